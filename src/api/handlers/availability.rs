use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::AddAvailabilityRuleRequest;
use crate::api::dtos::responses::{AddAvailabilityRuleResponse, AvailabilityRulesResponse};
use crate::api::extractors::{experience::ExperienceId, json::AppJson};
use crate::domain::services::availability_service::AddSingleDateRule;
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info, Span};

pub async fn get_availability_rules(
    State(state): State<Arc<AppState>>,
    ExperienceId(experience_id): ExperienceId,
) -> Result<impl IntoResponse, AppError> {
    let availability = state.availability_service.get_availability_rules(experience_id).await?;

    Ok(Json(AvailabilityRulesResponse {
        success: true,
        rules: availability.rules,
        booking_type: availability.booking_type,
        start_times: availability.start_times,
    }))
}

pub async fn add_availability_rule(
    State(state): State<Arc<AppState>>,
    AppJson(payload): AppJson<AddAvailabilityRuleRequest>,
) -> Result<impl IntoResponse, AppError> {
    Span::current().record("experience_id", payload.experience_id);

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    if let Some(bt) = payload.booking_type {
        debug!("add_availability_rule: client reported booking type {:?}", bt);
    }
    info!("add_availability_rule: experience {} on {} (capacity {})", payload.experience_id, date, payload.capacity);

    let saved = state.availability_service.add_single_date_rule(AddSingleDateRule {
        experience_id: payload.experience_id,
        date,
        capacity: payload.capacity,
        start_time_ids: payload.start_time_ids,
        all_start_times: payload.all_start_times,
    }).await?;

    Ok(Json(AddAvailabilityRuleResponse {
        success: true,
        message: format!("Availability rule added! Total rules: {}", saved.count),
        rules: saved.rules,
    }))
}
