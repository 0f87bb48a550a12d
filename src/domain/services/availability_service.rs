use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::domain::models::availability_rule::{
    AvailabilityRulesComponent, AvailabilityRulesUpdate, BookingTypeComponent, RawAvailabilityRules,
};
use crate::domain::models::experience::{BookingType, ExperienceDetail, ExperienceSummary, StartTimeOption};
use crate::domain::ports::BokunApi;
use crate::domain::services::rule_merge::{build_single_date_rule, merge_rules};
use crate::error::AppError;

pub fn activity_path(experience_id: i64) -> String {
    format!("/activity.json/{}", experience_id)
}

pub fn component_path(experience_id: i64, component_type: &str) -> String {
    format!(
        "/restapi/v2.0/experience/{}/components?componentType={}",
        experience_id, component_type
    )
}

pub fn availability_rules_path(experience_id: i64) -> String {
    component_path(experience_id, "AVAILABILITY_RULES")
}

pub fn booking_type_path(experience_id: i64) -> String {
    component_path(experience_id, "BOOKING_TYPE")
}

pub struct AddSingleDateRule {
    pub experience_id: i64,
    pub date: NaiveDate,
    pub capacity: i64,
    pub start_time_ids: Vec<i64>,
    pub all_start_times: Option<bool>,
}

#[derive(Debug)]
pub struct SavedRules {
    pub rules: Vec<Value>,
    pub count: usize,
}

#[derive(Debug)]
pub struct ExperienceAvailability {
    /// Rules exactly as Bokun returned them.
    pub rules: Vec<Value>,
    pub booking_type: BookingType,
    pub start_times: Vec<StartTimeOption>,
}

pub struct AvailabilityService {
    api: Arc<dyn BokunApi>,
    experience_ids: Vec<i64>,
}

impl AvailabilityService {
    pub fn new(api: Arc<dyn BokunApi>, experience_ids: Vec<i64>) -> Self {
        Self { api, experience_ids }
    }

    /// Resolves the configured experience ids to titles. Experiences Bokun
    /// refuses, or answers with an unreadable detail, are logged and left out.
    pub async fn list_experiences(&self) -> Result<Vec<ExperienceSummary>, AppError> {
        let mut experiences: Vec<ExperienceSummary> = Vec::with_capacity(self.experience_ids.len());

        for &id in &self.experience_ids {
            let res = self.api.get(&activity_path(id)).await?;
            if !res.is_success() {
                warn!("  [{}] ERROR {}", id, res.describe());
                continue;
            }

            match res.json::<ExperienceSummary>() {
                Ok(summary) => {
                    info!("  [{}] {}", summary.id, summary.title);
                    experiences.push(summary);
                }
                Err(e) => warn!("  [{}] unreadable detail: {}", id, e),
            }
        }

        info!("Loaded {} experiences", experiences.len());
        Ok(experiences)
    }

    async fn fetch_detail(&self, experience_id: i64) -> Result<Option<ExperienceDetail>, AppError> {
        let res = self.api.get(&activity_path(experience_id)).await?;
        if !res.is_success() {
            warn!("Activity detail for {} unavailable: {}", experience_id, res.describe());
            return Ok(None);
        }

        match res.json() {
            Ok(detail) => Ok(Some(detail)),
            Err(e) => {
                warn!("Activity detail for {} unreadable: {}", experience_id, e);
                Ok(None)
            }
        }
    }

    pub async fn get_start_times(&self, experience_id: i64) -> Result<Vec<StartTimeOption>, AppError> {
        let options = self
            .fetch_detail(experience_id)
            .await?
            .map(|detail| detail.start_time_options())
            .unwrap_or_default();
        info!("Start times for {}: {}", experience_id, options.len());
        Ok(options)
    }

    async fn fetch_booking_type(&self, experience_id: i64) -> Result<Option<BookingType>, AppError> {
        let res = self.api.get(&booking_type_path(experience_id)).await?;
        if !res.is_success() {
            warn!("Booking type for {} unavailable: {}", experience_id, res.describe());
            return Ok(None);
        }
        let component: BookingTypeComponent = res.json()?;
        Ok(component.booking_type)
    }

    #[instrument(skip(self))]
    pub async fn get_availability_rules(&self, experience_id: i64) -> Result<ExperienceAvailability, AppError> {
        let res = self.api.get(&availability_rules_path(experience_id)).await?;
        if !res.is_success() {
            return Err(AppError::Upstream(res.describe()));
        }
        let component: RawAvailabilityRules = res.json()?;
        let rules = component.availability_rules.unwrap_or_default();

        // The rules component does not reliably carry the booking type.
        let booking_type = match self.fetch_booking_type(experience_id).await? {
            Some(bt) => bt,
            None => component.booking_type.unwrap_or_default(),
        };

        let start_times = if booking_type.has_start_times() {
            self.get_start_times(experience_id).await?
        } else {
            Vec::new()
        };

        info!("Booking type: {:?}, {} rules, {} start times", booking_type, rules.len(), start_times.len());

        Ok(ExperienceAvailability {
            rules,
            booking_type,
            start_times,
        })
    }

    /// Appends a one-day rule by rewriting the full rule collection. Bokun has
    /// no version check on this component, so a concurrent writer's rule can be
    /// overwritten.
    #[instrument(skip(self, request), fields(experience_id = request.experience_id, date = %request.date))]
    pub async fn add_single_date_rule(&self, request: AddSingleDateRule) -> Result<SavedRules, AppError> {
        if request.capacity < 1 {
            return Err(AppError::Validation("capacity must be at least 1".into()));
        }

        let path = availability_rules_path(request.experience_id);

        let get_res = self.api.get(&path).await?;
        if !get_res.is_success() {
            return Err(AppError::Upstream(format!(
                "Could not fetch existing rules: {} {}",
                get_res.status, get_res.body
            )));
        }
        let existing: AvailabilityRulesComponent = get_res.json()?;

        let booking_type = match existing.booking_type {
            Some(bt) => bt,
            None => self.fetch_booking_type(request.experience_id).await?.unwrap_or_default(),
        };
        info!("Existing rules: {}, booking type {:?}", existing.availability_rules.len(), booking_type);

        let new_rule = build_single_date_rule(
            request.date,
            request.capacity,
            booking_type,
            &request.start_time_ids,
            request.all_start_times,
        );
        let updated = merge_rules(&existing.availability_rules, new_rule, booking_type);

        let payload = serde_json::to_value(AvailabilityRulesUpdate {
            availability_rules: &updated,
        })?;

        let put_res = self.api.put(&path, &payload).await?;
        if !put_res.is_success() {
            return Err(AppError::Upstream(put_res.describe()));
        }

        // The write has landed; from here on nothing may turn into an error.
        let rules = match put_res.json::<RawAvailabilityRules>() {
            Ok(RawAvailabilityRules { availability_rules: Some(saved), .. }) => saved,
            Ok(_) => {
                warn!("Bokun saved the rules without echoing them, reporting the rules sent");
                sent_rules(&payload)
            }
            Err(e) => {
                warn!("Saved rules could not be read back ({}), reporting the rules sent", e);
                sent_rules(&payload)
            }
        };
        let count = rules.len();
        info!("Saved {} availability rules", count);

        Ok(SavedRules { rules, count })
    }
}

fn sent_rules(payload: &Value) -> Vec<Value> {
    payload["availabilityRules"].as_array().cloned().unwrap_or_default()
}
