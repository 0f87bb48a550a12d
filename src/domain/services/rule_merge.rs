use chrono::NaiveDate;

use crate::domain::models::availability_rule::{
    AvailabilityRule, RecurrenceRule, RemoteRule, StartTimeSelection,
};
use crate::domain::models::experience::BookingType;

/// Capacity assumed for a stored rule that carries none.
pub const FALLBACK_CAPACITY: i64 = 12;

/// Rebuilds a rule read from Bokun into a fresh write value holding only the
/// fields Bokun accepts back.
pub fn normalize_rule(rule: &RemoteRule, booking_type: BookingType) -> AvailabilityRule {
    let max_capacity = rule.max_capacity.unwrap_or(FALLBACK_CAPACITY);

    let max_capacity_for_pickup = match rule.max_capacity_for_pickup {
        Some(pickup) if pickup >= 1 => pickup,
        _ => max_capacity,
    };

    let start_times = if booking_type.has_start_times() {
        StartTimeSelection::from_ids(
            rule.start_times
                .iter()
                .flatten()
                .filter_map(|st| st.id),
        )
    } else {
        StartTimeSelection::All
    };

    AvailabilityRule {
        id: rule.id,
        recurrence_rule: rule.recurrence_rule.clone(),
        max_capacity,
        max_capacity_for_pickup,
        min_total_pax: rule.min_total_pax,
        guided_languages: rule.guided_languages.clone(),
        start_times,
    }
}

/// New rule covering exactly one day. `all_start_times` is the caller's
/// explicit choice; `None` lets the presence of ids decide.
pub fn build_single_date_rule(
    date: NaiveDate,
    capacity: i64,
    booking_type: BookingType,
    start_time_ids: &[i64],
    all_start_times: Option<bool>,
) -> AvailabilityRule {
    let start_times = if booking_type.has_start_times() && all_start_times != Some(true) {
        StartTimeSelection::from_ids(start_time_ids.iter().copied())
    } else {
        StartTimeSelection::All
    };

    AvailabilityRule {
        id: None,
        recurrence_rule: Some(RecurrenceRule::single_day(date)),
        max_capacity: capacity,
        max_capacity_for_pickup: capacity,
        min_total_pax: Some(1),
        guided_languages: Vec::new(),
        start_times,
    }
}

/// Full collection to write back: every existing rule, cleaned, then the new one.
pub fn merge_rules(
    existing: &[RemoteRule],
    new_rule: AvailabilityRule,
    booking_type: BookingType,
) -> Vec<AvailabilityRule> {
    existing
        .iter()
        .map(|rule| normalize_rule(rule, booking_type))
        .chain(std::iter::once(new_rule))
        .collect()
}
