use crate::domain::models::experience::BookingType;
use serde::Deserialize;

fn default_capacity() -> i64 {
    12
}

#[derive(Deserialize)]
pub struct AddAvailabilityRuleRequest {
    pub experience_id: i64,
    pub date: String, // YYYY-MM-DD
    #[serde(default = "default_capacity")]
    pub capacity: i64,
    // Advisory only; the booking type stored in Bokun wins.
    #[serde(default)]
    pub booking_type: Option<BookingType>,
    #[serde(default)]
    pub start_time_ids: Vec<i64>,
    #[serde(default)]
    pub all_start_times: Option<bool>,
}
