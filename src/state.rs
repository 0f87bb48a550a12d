use std::sync::Arc;
use crate::domain::services::availability_service::AvailabilityService;

#[derive(Clone)]
pub struct AppState {
    pub availability_service: Arc<AvailabilityService>,
}
