use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::work::{NewWork, Work, WorkPatch},
    repositories::sqlx_repo::SqlxWorkRepo,
};

/// Storage for work-history rows. Failures are returned as the raw
/// `sqlx::Error`; translating them is up to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkRepository: Send + Sync {
    /// All non-deleted rows, newest first
    async fn get_all(&self) -> Result<Vec<Work>, sqlx::Error>;

    /// `None` when no non-deleted row has this id
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Work>, sqlx::Error>;

    async fn create(&self, work: &NewWork) -> Result<Uuid, sqlx::Error>;

    /// Applies the patch and returns the number of rows changed
    async fn update_by_id(&self, patch: &WorkPatch) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl<T> WorkRepository for Arc<T>
where
    T: WorkRepository + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<Work>, sqlx::Error> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Work>, sqlx::Error> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, work: &NewWork) -> Result<Uuid, sqlx::Error> {
        (**self).create(work).await
    }

    async fn update_by_id(&self, patch: &WorkPatch) -> Result<u64, sqlx::Error> {
        (**self).update_by_id(patch).await
    }
}

impl SqlxWorkRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxWorkRepo { pool }
    }
}

#[async_trait]
impl WorkRepository for SqlxWorkRepo {
    async fn get_all(&self) -> Result<Vec<Work>, sqlx::Error> {
        sqlx::query_as::<_, Work>(
            r#"
            SELECT id, title, company_name, description,
                   start_date_month, start_date_year, end_date_month, end_date_year,
                   is_current, created_at, updated_at
            FROM works
            WHERE deleted = 0
            ORDER BY start_date_year DESC, start_date_month DESC,
                     is_current DESC,
                     end_date_year DESC, end_date_month DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Work>, sqlx::Error> {
        sqlx::query_as::<_, Work>(
            r#"
            SELECT id, title, company_name, description,
                   start_date_month, start_date_year, end_date_month, end_date_year,
                   is_current, created_at, updated_at
            FROM works
            WHERE id = $1 AND deleted = 0
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create(&self, work: &NewWork) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO works (
                title, company_name, description,
                start_date_month, start_date_year, end_date_month, end_date_year,
                is_current, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(&work.title)
        .bind(&work.company_name)
        .bind(&work.description)
        .bind(work.dates.start_date_month)
        .bind(work.dates.start_date_year)
        .bind(work.dates.end_date_month)
        .bind(work.dates.end_date_year)
        .bind(work.dates.is_current)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_by_id(&self, patch: &WorkPatch) -> Result<u64, sqlx::Error> {
        let (touch_end_month, end_date_month) = patch.end_date_month.nullable_bind();
        let (touch_end_year, end_date_year) = patch.end_date_year.nullable_bind();

        // COALESCE keeps NOT NULL columns when unchanged; the nullable end
        // dates need an explicit flag so that NULL can actually be written
        let result = sqlx::query(
            r#"
            UPDATE works SET
                title = COALESCE($1, title),
                company_name = COALESCE($2, company_name),
                description = COALESCE($3, description),
                start_date_month = COALESCE($4, start_date_month),
                start_date_year = COALESCE($5, start_date_year),
                end_date_month = CASE WHEN $6 THEN $7 ELSE end_date_month END,
                end_date_year = CASE WHEN $8 THEN $9 ELSE end_date_year END,
                is_current = COALESCE($10, is_current),
                deleted = COALESCE($11, deleted),
                updated_at = NOW()
            WHERE id = $12
            "#,
        )
        .bind(patch.title.coalesce_str())
        .bind(patch.company_name.coalesce_str())
        .bind(patch.description.coalesce_str())
        .bind(patch.start_date_month.coalesce_bind())
        .bind(patch.start_date_year.coalesce_bind())
        .bind(touch_end_month)
        .bind(end_date_month)
        .bind(touch_end_year)
        .bind(end_date_year)
        .bind(patch.is_current.coalesce_bind())
        .bind(patch.deleted.coalesce_bind())
        .bind(patch.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
