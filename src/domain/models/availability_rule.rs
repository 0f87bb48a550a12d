use chrono::NaiveDate;
use serde::{
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};
use serde_json::Value;

use super::experience::BookingType;
use super::lenient::{null_as_default, skip_malformed};

/// Date window of a rule. Bokun leaves `endDate` empty on open-ended rules.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    // Opaque to this service; carried back exactly as read.
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub by_weekday: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub by_month: Vec<Value>,
}

impl RecurrenceRule {
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: Some(date),
            end_date: Some(date),
            by_weekday: Vec::new(),
            by_month: Vec::new(),
        }
    }
}

/// Start time entry as Bokun returns it inside a rule.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RemoteStartTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
}

/// Availability rule as read from Bokun. Every field may be missing or
/// `null`; fields this service does not know are dropped on parse.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<RecurrenceRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity_for_pickup: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_total_pax: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guided_languages: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_start_times: Option<bool>,
    #[serde(default, deserialize_with = "skip_malformed", skip_serializing_if = "Option::is_none")]
    pub start_times: Option<Vec<RemoteStartTime>>,
}

/// Reference to a start time, reduced to its id. Bokun rejects writes that
/// carry both `id` and `externalId`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct StartTimeRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartTimeSelection {
    All,
    Specific(Vec<StartTimeRef>),
}

impl StartTimeSelection {
    /// Builds a selection from candidate ids, falling back to `All` when no
    /// usable id is left.
    pub fn from_ids<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        let refs: Vec<StartTimeRef> = ids
            .into_iter()
            .filter(|id| *id > 0)
            .map(|id| StartTimeRef { id })
            .collect();

        if refs.is_empty() {
            StartTimeSelection::All
        } else {
            StartTimeSelection::Specific(refs)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StartTimeSelection::All)
    }
}

// Flattened into the rule: `allStartTimes` is always written, `startTimes`
// only alongside `allStartTimes: false`.
impl Serialize for StartTimeSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StartTimeSelection::All => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("allStartTimes", &true)?;
                map.end()
            }
            StartTimeSelection::Specific(refs) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("allStartTimes", &false)?;
                map.serialize_entry("startTimes", refs)?;
                map.end()
            }
        }
    }
}

/// Availability rule in the exact shape written back to Bokun.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_rule: Option<RecurrenceRule>,
    pub max_capacity: i64,
    pub max_capacity_for_pickup: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total_pax: Option<i64>,
    pub guided_languages: Vec<Value>,
    #[serde(flatten)]
    pub start_times: StartTimeSelection,
}

/// `componentType=AVAILABILITY_RULES` read payload, typed for merging.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRulesComponent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability_rules: Vec<RemoteRule>,
    #[serde(default)]
    pub booking_type: Option<BookingType>,
}

/// The same payload with the rules left as Bokun sent them, for callers
/// that only pass them on. `None` when the key is missing or `null`.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailabilityRules {
    #[serde(default)]
    pub availability_rules: Option<Vec<Value>>,
    #[serde(default)]
    pub booking_type: Option<BookingType>,
}

/// `componentType=BOOKING_TYPE` read payload.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingTypeComponent {
    #[serde(default)]
    pub booking_type: Option<BookingType>,
}

/// Body of the `componentType=AVAILABILITY_RULES` PUT. Replaces the whole
/// collection on the remote side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRulesUpdate<'a> {
    pub availability_rules: &'a [AvailabilityRule],
}
