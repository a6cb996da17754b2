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
    "degree, subject, school_name, start_date_month, start_date_year and is_current are required";

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub subject: String,
    pub school_name: String,
    pub description: String,
    pub start_date_month: i16,
    pub start_date_year: i16,
    pub end_date_month: Option<i16>,
    pub end_date_year: Option<i16>,
    pub is_current: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EducationPatch {
    pub id: Uuid,
    pub degree: OptionField<String>,
    pub subject: OptionField<String>,
    pub school_name: OptionField<String>,
    pub description: OptionField<String>,
    pub start_date_month: OptionField<i16>,
    pub start_date_year: OptionField<i16>,
    pub end_date_month: OptionField<i16>,
    pub end_date_year: OptionField<i16>,
    pub is_current: OptionField<i16>,
    pub deleted: OptionField<i16>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationInput {
    pub degree: Option<String>,
    pub subject: Option<String>,
    pub school_name: Option<String>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub dates: DateRangeInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct NewEducation {
    #[validate(length(max = MAX_NAME_LENGTH, message = "degree must be at most 255 characters"))]
    pub degree: String,

    #[validate(length(max = MAX_NAME_LENGTH, message = "subject must be at most 255 characters"))]
    pub subject: String,

    #[validate(length(max = MAX_NAME_LENGTH, message = "school_name must be at most 255 characters"))]
    pub school_name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "description must be at most 5000 characters"))]
    pub description: String,

    #[serde(flatten)]
    pub dates: DateRange,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EducationCreatedResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub education: NewEducation,
}

// ───── Validation Pipeline ──────────────────────────────────────────

impl EducationInput {
    pub fn validate_for_write(&self, current_year: i32) -> Result<NewEducation, AppError> {
        let (Some(degree), Some(subject), Some(school_name)) = (
            non_blank(&self.degree),
            non_blank(&self.subject),
            non_blank(&self.school_name),
        ) else {
            return Err(AppError::invalid_param(REQUIRED_FIELDS_MSG));
        };
        if !self.dates.has_required_fields() {
            return Err(AppError::invalid_param(REQUIRED_FIELDS_MSG));
        }

        let dates = self.dates.validate(current_year)?;

        let education = NewEducation {
            degree: degree.to_string(),
            subject: subject.to_string(),
            school_name: school_name.to_string(),
            description: self.description.clone().unwrap_or_default(),
            dates,
        };
        education.validate()?;

        Ok(education)
    }
}

// ───── Patch Preparation ───────────────────────────────────

impl NewEducation {
    pub fn prepare_for_update(&self, id: Uuid) -> EducationPatch {
        EducationPatch {
            id,
            degree: OptionField::SetToValue(self.degree.clone()),
            subject: OptionField::SetToValue(self.subject.clone()),
            school_name: OptionField::SetToValue(self.school_name.clone()),
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

impl EducationPatch {
    pub fn soft_delete(id: Uuid) -> Self {
        EducationPatch {
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

    #[test]
    fn requires_school_name() {
        let input: EducationInput = serde_json::from_value(json!({
            "degree": "BSc",
            "subject": "Computer Science",
            "start_date_month": 9,
            "start_date_year": 2014,
            "is_current": 0,
            "end_date_month": 6,
            "end_date_year": 2018
        }))
        .unwrap();

        assert_eq!(
            input.validate_for_write(2025),
            Err(AppError::invalid_param(REQUIRED_FIELDS_MSG))
        );
    }

    #[test]
    fn ended_education_keeps_end_dates() {
        let input = EducationInput {
            degree: Some("BSc".into()),
            subject: Some("Computer Science".into()),
            school_name: Some("State University".into()),
            description: Some("Graduated with honours".into()),
            dates: DateRangeInput {
                start_date_month: Some(json!(9)),
                start_date_year: Some(json!(2014)),
                end_date_month: Some(json!(6)),
                end_date_year: Some(json!(2018)),
                is_current: Some(json!(0)),
            },
        };

        let education = input.validate_for_write(2025).unwrap();
        let patch = education.prepare_for_update(Uuid::nil());

        assert_eq!(patch.end_date_month, OptionField::SetToValue(6));
        assert_eq!(patch.end_date_year, OptionField::SetToValue(2018));
        assert_eq!(patch.description, OptionField::SetToValue("Graduated with honours".into()));
    }
}
