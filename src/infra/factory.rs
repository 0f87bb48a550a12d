use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::error::AppError;
use crate::domain::ports::BokunApi;
use crate::domain::services::availability_service::AvailabilityService;
use crate::infra::bokun::http_bokun_client::HttpBokunClient;

pub fn build_state(config: &Config, bokun_api: Arc<dyn BokunApi>) -> AppState {
    let availability_service = Arc::new(AvailabilityService::new(
        bokun_api,
        config.experience_ids.clone(),
    ));

    AppState { availability_service }
}

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    info!("Initializing Bokun client for {}...", config.bokun_base_url);
    let bokun_api = Arc::new(HttpBokunClient::from_config(config)?);
    Ok(build_state(config, bokun_api))
}
