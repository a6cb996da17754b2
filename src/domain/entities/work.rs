use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        date_range::{non_blank, DateRange, DateRangeInput},
        option_fields::OptionField,
    },
    errors::AppError,
};

const MAX_NAME_LENGTH: u64 = 255;
const MAX_DESCRIPTION_LENGTH: u64 = 5000;

const REQUIRED_FIELDS_MSG: &str =
    "title, company_name, start_date_month, start_date_year and is_current are required";

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub start_date_month: i16,
    pub start_date_year: i16,
    pub end_date_month: Option<i16>,
    pub end_date_year: Option<i16>,
    pub is_current: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a work row. Every field defaults to `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkPatch {
    pub id: Uuid,
    pub title: OptionField<String>,
    pub company_name: OptionField<String>,
    pub description: OptionField<String>,
    pub start_date_month: OptionField<i16>,
    pub start_date_year: OptionField<i16>,
    pub end_date_month: OptionField<i16>,
    pub end_date_year: OptionField<i16>,
    pub is_current: OptionField<i16>,
    pub deleted: OptionField<i16>,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Create/update payload as sent by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkInput {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub dates: DateRangeInput,
}

/// A work payload that passed the whole validation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NewWork {
    #[validate(length(max = MAX_NAME_LENGTH, message = "title must be at most 255 characters"))]
    pub title: String,

    #[validate(length(max = MAX_NAME_LENGTH, message = "company_name must be at most 255 characters"))]
    pub company_name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "description must be at most 5000 characters"))]
    pub description: String,

    #[serde(flatten)]
    pub dates: DateRange,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct WorkCreatedResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub work: NewWork,
}

// ───── Validation Pipeline ──────────────────────────────────────────

impl WorkInput {
    /// Validates the payload for a create or a full update, stopping at
    /// the first failing rule. The description defaults to an empty
    /// string and the end dates are cleared for a current position.
    pub fn validate_for_write(&self, current_year: i32) -> Result<NewWork, AppError> {
        let (Some(title), Some(company_name)) = (
            non_blank(&self.title),
            non_blank(&self.company_name),
        ) else {
            return Err(AppError::invalid_param(REQUIRED_FIELDS_MSG));
        };
        if !self.dates.has_required_fields() {
            return Err(AppError::invalid_param(REQUIRED_FIELDS_MSG));
        }

        let dates = self.dates.validate(current_year)?;

        let work = NewWork {
            title: title.to_string(),
            company_name: company_name.to_string(),
            description: self.description.clone().unwrap_or_default(),
            dates,
        };
        work.validate()?;

        Ok(work)
    }
}

// ───── Patch Preparation ───────────────────────────────────

impl NewWork {
    /// Full overwrite of the editable columns. End dates are written as
    /// NULL for a current position so a switch from ended to current
    /// does not leave stale values behind.
    pub fn prepare_for_update(&self, id: Uuid) -> WorkPatch {
        WorkPatch {
            id,
            title: OptionField::SetToValue(self.title.clone()),
            company_name: OptionField::SetToValue(self.company_name.clone()),
            description: OptionField::SetToValue(self.description.clone()),
            start_date_month: OptionField::SetToValue(self.dates.start_date_month),
            start_date_year: OptionField::SetToValue(self.dates.start_date_year),
            end_date_month: self.dates.end_date_month.into(),
            end_date_year: self.dates.end_date_year.into(),
            is_current: OptionField::SetToValue(self.dates.is_current),
            deleted: OptionField::Unchanged,
        }
    }
}

impl WorkPatch {
    pub fn soft_delete(id: Uuid) -> Self {
        WorkPatch {
            id,
            deleted: OptionField::SetToValue(1),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engineer() -> WorkInput {
        WorkInput {
            title: Some("Engineer".into()),
            company_name: Some("Acme".into()),
            description: None,
            dates: DateRangeInput {
                start_date_month: Some(json!(3)),
                start_date_year: Some(json!(2020)),
                end_date_month: None,
                end_date_year: None,
                is_current: Some(json!(1)),
            },
        }
    }

    #[test]
    fn deserializes_flat_payload() {
        let input: WorkInput = serde_json::from_value(json!({
            "title": "Engineer",
            "company_name": "Acme",
            "start_date_month": 3,
            "start_date_year": 2020,
            "is_current": 1
        }))
        .unwrap();

        assert_eq!(input, engineer());
    }

    #[test]
    fn mistyped_numbers_reach_validation() {
        let input: WorkInput = serde_json::from_value(json!({
            "title": "Engineer",
            "company_name": "Acme",
            "start_date_month": "3",
            "start_date_year": 2020,
            "is_current": true
        }))
        .unwrap();

        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param("is_current must be 0 or 1"))
        );
    }

    #[test]
    fn zero_start_month_counts_as_missing() {
        let mut input = engineer();
        input.dates.start_date_month = Some(json!(0));
        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param(REQUIRED_FIELDS_MSG))
        );
    }

    #[test]
    fn description_defaults_to_empty() {
        let work = engineer().validate_for_write(2025).unwrap();
        assert_eq!(work.description, "");
        assert_eq!(work.dates.end_date_month, None);
    }

    #[test]
    fn blank_title_counts_as_missing() {
        let input = WorkInput { title: Some("   ".into()), ..engineer() };
        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param(REQUIRED_FIELDS_MSG))
        );
    }

    #[test]
    fn missing_is_current_counts_as_missing() {
        let mut input = engineer();
        input.dates.is_current = None;
        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param(REQUIRED_FIELDS_MSG))
        );
    }

    #[test]
    fn overlong_title_is_rejected_after_date_checks() {
        let input = WorkInput { title: Some("x".repeat(256)), ..engineer() };
        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param("title: title must be at most 255 characters"))
        );
    }

    #[test]
    fn update_patch_clears_end_dates_for_current_work() {
        let work = engineer().validate_for_write(2025).unwrap();
        let patch = work.prepare_for_update(Uuid::nil());

        assert!(patch.end_date_month.is_set_to_null());
        assert!(patch.end_date_year.is_set_to_null());
        assert!(patch.deleted.is_unchanged());
        assert_eq!(patch.is_current, OptionField::SetToValue(1));
    }

    #[test]
    fn soft_delete_touches_only_deleted() {
        let id = Uuid::new_v4();
        let patch = WorkPatch::soft_delete(id);
        assert_eq!(
            patch,
            WorkPatch { id, deleted: OptionField::SetToValue(1), ..Default::default() }
        );
    }

    #[test]
    fn created_response_is_flat() {
        let work = engineer().validate_for_write(2025).unwrap();
        let json = serde_json::to_value(WorkCreatedResponse { id: Uuid::nil(), work }).unwrap();
        assert_eq!(json["title"], "Engineer");
        assert_eq!(json["start_date_year"], 2020);
        assert!(json["end_date_year"].is_null());
    }
}
