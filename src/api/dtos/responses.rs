use crate::domain::models::experience::{BookingType, ExperienceSummary, StartTimeOption};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct ExperiencesResponse {
    pub success: bool,
    pub experiences: Vec<ExperienceSummary>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimesResponse {
    pub success: bool,
    pub start_times: Vec<StartTimeOption>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRulesResponse {
    pub success: bool,
    pub rules: Vec<Value>,
    pub booking_type: BookingType,
    pub start_times: Vec<StartTimeOption>,
}

#[derive(Serialize)]
pub struct AddAvailabilityRuleResponse {
    pub success: bool,
    pub message: String,
    pub rules: Vec<Value>,
}
