use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::education::{Education, EducationPatch, NewEducation},
    repositories::sqlx_repo::SqlxEducationRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Education>, sqlx::Error>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Education>, sqlx::Error>;
    async fn create(&self, education: &NewEducation) -> Result<Uuid, sqlx::Error>;
    async fn update_by_id(&self, patch: &EducationPatch) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl<T> EducationRepository for Arc<T>
where
    T: EducationRepository + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<Education>, sqlx::Error> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Education>, sqlx::Error> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, education: &NewEducation) -> Result<Uuid, sqlx::Error> {
        (**self).create(education).await
    }

    async fn update_by_id(&self, patch: &EducationPatch) -> Result<u64, sqlx::Error> {
        (**self).update_by_id(patch).await
    }
}

impl SqlxEducationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxEducationRepo { pool }
    }
}

#[async_trait]
impl EducationRepository for SqlxEducationRepo {
    async fn get_all(&self) -> Result<Vec<Education>, sqlx::Error> {
        sqlx::query_as::<_, Education>(
            r#"
            SELECT id, degree, subject, school_name, description,
                   start_date_month, start_date_year, end_date_month, end_date_year,
                   is_current, created_at, updated_at
            FROM education
            WHERE deleted = 0
            ORDER BY start_date_year DESC, start_date_month DESC,
                     is_current DESC,
                     end_date_year DESC, end_date_month DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Education>, sqlx::Error> {
        sqlx::query_as::<_, Education>(
            r#"
            SELECT id, degree, subject, school_name, description,
                   start_date_month, start_date_year, end_date_month, end_date_year,
                   is_current, created_at, updated_at
            FROM education
            WHERE id = $1 AND deleted = 0
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn create(&self, education: &NewEducation) -> Result<Uuid, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO education (
                degree, subject, school_name, description,
                start_date_month, start_date_year, end_date_month, end_date_year,
                is_current, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(&education.degree)
        .bind(&education.subject)
        .bind(&education.school_name)
        .bind(&education.description)
        .bind(education.dates.start_date_month)
        .bind(education.dates.start_date_year)
        .bind(education.dates.end_date_month)
        .bind(education.dates.end_date_year)
        .bind(education.dates.is_current)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_by_id(&self, patch: &EducationPatch) -> Result<u64, sqlx::Error> {
        let (touch_end_month, end_date_month) = patch.end_date_month.nullable_bind();
        let (touch_end_year, end_date_year) = patch.end_date_year.nullable_bind();

        let result = sqlx::query(
            r#"
            UPDATE education SET
                degree = COALESCE($1, degree),
                subject = COALESCE($2, subject),
                school_name = COALESCE($3, school_name),
                description = COALESCE($4, description),
                start_date_month = COALESCE($5, start_date_month),
                start_date_year = COALESCE($6, start_date_year),
                end_date_month = CASE WHEN $7 THEN $8 ELSE end_date_month END,
                end_date_year = CASE WHEN $9 THEN $10 ELSE end_date_year END,
                is_current = COALESCE($11, is_current),
                deleted = COALESCE($12, deleted),
                updated_at = NOW()
            WHERE id = $13
            "#,
        )
        .bind(patch.degree.coalesce_str())
        .bind(patch.subject.coalesce_str())
        .bind(patch.school_name.coalesce_str())
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
