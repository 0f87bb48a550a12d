use serde::{Deserialize, Serialize};

use super::lenient::skip_malformed;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    #[default]
    DateOnly,
    DateAndTime,
}

impl BookingType {
    pub fn has_start_times(self) -> bool {
        self == BookingType::DateAndTime
    }
}

/// Time-of-day slot configured on an experience.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StartTime {
    pub id: i64,
    pub hour: u32,
    pub minute: u32,
}

impl StartTime {
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct StartTimeOption {
    pub id: i64,
    pub label: String,
}

impl From<&StartTime> for StartTimeOption {
    fn from(st: &StartTime) -> Self {
        Self { id: st.id, label: st.label() }
    }
}

/// Start-time part of `GET /activity.json/{id}`. Entries lacking an id, hour
/// or minute are left out.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDetail {
    #[serde(default, deserialize_with = "skip_malformed")]
    pub start_times: Option<Vec<StartTime>>,
    #[serde(default, deserialize_with = "skip_malformed")]
    pub departure_times: Option<Vec<StartTime>>,
}

impl ExperienceDetail {
    pub fn start_times(&self) -> &[StartTime] {
        self.start_times
            .as_deref()
            .or(self.departure_times.as_deref())
            .unwrap_or_default()
    }

    pub fn start_time_options(&self) -> Vec<StartTimeOption> {
        self.start_times().iter().map(StartTimeOption::from).collect()
    }
}

/// `{id, title}` of an experience, read straight from the activity detail.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ExperienceSummary {
    pub id: i64,
    pub title: String,
}
