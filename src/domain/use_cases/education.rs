use tracing::Span;
use uuid::Uuid;

use crate::{
    entities::{
        date_range::current_year,
        education::{Education, EducationCreatedResponse, EducationInput, EducationPatch},
    },
    errors::AppError,
    repositories::education::EducationRepository,
    utils::record_id::{parse_record_id, require_id},
};

const NOT_FOUND: &str = "no education found";

pub struct EducationService<R>
where
    R: EducationRepository,
{
    pub education_repo: R,
    span: Span,
}

impl<R> EducationService<R>
where
    R: EducationRepository,
{
    pub fn new(education_repo: R) -> Self {
        Self::with_span(education_repo, tracing::info_span!("education_service"))
    }

    pub fn with_span(education_repo: R, span: Span) -> Self {
        EducationService { education_repo, span }
    }

    pub async fn get_all_educations(&self) -> Result<Vec<Education>, AppError> {
        self.education_repo.get_all().await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, "get_all failed");
            AppError::database("cannot get all educations from database")
        })
    }

    pub async fn get_education_by_id(&self, education_id: &str) -> Result<Education, AppError> {
        let education_id = require_id(education_id, "educationId is required")?;
        let id = parse_record_id(education_id, NOT_FOUND)?;

        self.find_existing(&id).await
    }

    pub async fn create_education(
        &self,
        education: EducationInput,
    ) -> Result<EducationCreatedResponse, AppError> {
        let new_education = education.validate_for_write(current_year())?;

        let id = self
            .education_repo
            .create(&new_education)
            .await
            .map_err(|e| {
                tracing::error!(parent: &self.span, error = %e, "create failed");
                AppError::database("cannot create education from database")
            })?;

        tracing::info!(parent: &self.span, %id, "education created");

        Ok(EducationCreatedResponse { id, education: new_education })
    }

    pub async fn update_education_by_id(
        &self,
        id: &str,
        education: EducationInput,
    ) -> Result<u64, AppError> {
        let id = require_id(id, "id is required")?;
        let new_education = education.validate_for_write(current_year())?;

        let id = parse_record_id(id, NOT_FOUND)?;
        self.find_existing(&id).await?;

        self.apply(&new_education.prepare_for_update(id)).await
    }

    pub async fn delete_education_by_id(&self, id: &str) -> Result<u64, AppError> {
        let id = require_id(id, "id is required")?;
        let id = parse_record_id(id, NOT_FOUND)?;
        self.find_existing(&id).await?;

        self.apply(&EducationPatch::soft_delete(id)).await
    }

    async fn find_existing(&self, id: &Uuid) -> Result<Education, AppError> {
        let education = self.education_repo.get_by_id(id).await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, %id, "get_by_id failed");
            AppError::database("cannot get education by id from database")
        })?;

        education.ok_or_else(|| AppError::invalid_param(NOT_FOUND))
    }

    async fn apply(&self, patch: &EducationPatch) -> Result<u64, AppError> {
        self.education_repo.update_by_id(patch).await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, id = %patch.id, "update_by_id failed");
            AppError::database("cannot update education from database")
        })
    }
}
