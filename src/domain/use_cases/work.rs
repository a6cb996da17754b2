use tracing::Span;
use uuid::Uuid;

use crate::{
    entities::{
        date_range::current_year,
        work::{Work, WorkCreatedResponse, WorkInput, WorkPatch},
    },
    errors::AppError,
    repositories::work::WorkRepository,
    utils::record_id::{parse_record_id, require_id},
};

const NOT_FOUND: &str = "no work found";

pub struct WorkService<R>
where
    R: WorkRepository,
{
    pub work_repo: R,
    span: Span,
}

impl<R> WorkService<R>
where
    R: WorkRepository,
{
    pub fn new(work_repo: R) -> Self {
        Self::with_span(work_repo, tracing::info_span!("work_service"))
    }

    /// Storage failures are logged as children of `span`.
    pub fn with_span(work_repo: R, span: Span) -> Self {
        WorkService { work_repo, span }
    }

    /// Lists every work record that has not been deleted
    pub async fn get_all_works(&self) -> Result<Vec<Work>, AppError> {
        self.work_repo.get_all().await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, "get_all failed");
            AppError::database("cannot get all works from database")
        })
    }

    /// Retrieves a single work record
    pub async fn get_work_by_id(&self, work_id: &str) -> Result<Work, AppError> {
        let work_id = require_id(work_id, "workId is required")?;
        let id = parse_record_id(work_id, NOT_FOUND)?;

        self.find_existing(&id).await
    }

    /// Validates and stores a new work record.
    ///
    /// Returns the new id alongside the normalized input rather than a
    /// re-read of the stored row.
    pub async fn create_work(&self, work: WorkInput) -> Result<WorkCreatedResponse, AppError> {
        let new_work = work.validate_for_write(current_year())?;

        let id = self
            .work_repo
            .create(&new_work)
            .await
            .map_err(|e| {
                tracing::error!(parent: &self.span, error = %e, "create failed");
                AppError::database("cannot create work from database")
            })?;

        tracing::info!(parent: &self.span, %id, "work created");

        Ok(WorkCreatedResponse { id, work: new_work })
    }

    /// Replaces the editable fields of an existing record, returns the
    /// number of rows changed
    pub async fn update_work_by_id(&self, id: &str, work: WorkInput) -> Result<u64, AppError> {
        let id = require_id(id, "id is required")?;
        let new_work = work.validate_for_write(current_year())?;

        let id = parse_record_id(id, NOT_FOUND)?;
        self.find_existing(&id).await?;

        self.apply(&new_work.prepare_for_update(id)).await
    }

    /// Soft-deletes an existing record
    pub async fn delete_work_by_id(&self, id: &str) -> Result<u64, AppError> {
        let id = require_id(id, "id is required")?;
        let id = parse_record_id(id, NOT_FOUND)?;
        self.find_existing(&id).await?;

        self.apply(&WorkPatch::soft_delete(id)).await
    }

    async fn find_existing(&self, id: &Uuid) -> Result<Work, AppError> {
        let work = self.work_repo.get_by_id(id).await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, %id, "get_by_id failed");
            AppError::database("cannot get work by id from database")
        })?;

        work.ok_or_else(|| AppError::invalid_param(NOT_FOUND))
    }

    async fn apply(&self, patch: &WorkPatch) -> Result<u64, AppError> {
        self.work_repo.update_by_id(patch).await.map_err(|e| {
            tracing::error!(parent: &self.span, error = %e, id = %patch.id, "update_by_id failed");
            AppError::database("cannot update work from database")
        })
    }
}
