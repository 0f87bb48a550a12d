use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{ExperiencesResponse, StartTimesResponse};
use crate::api::extractors::experience::ExperienceId;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let experiences = state.availability_service.list_experiences().await?;
    Ok(Json(ExperiencesResponse { success: true, experiences }))
}

pub async fn get_start_times(
    State(state): State<Arc<AppState>>,
    ExperienceId(experience_id): ExperienceId,
) -> Result<impl IntoResponse, AppError> {
    let start_times = state.availability_service.get_start_times(experience_id).await?;
    Ok(Json(StartTimesResponse { success: true, start_times }))
}
