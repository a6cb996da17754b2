use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{education::EducationInput, responses::ChangedRowsResponse},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_all_educations(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let educations = state.education_service.get_all_educations().await?;
    Ok(HttpResponse::Ok().json(educations))
}

#[instrument(skip(state))]
pub async fn get_education_by_id(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let education = state.education_service.get_education_by_id(&education_id).await?;
    Ok(HttpResponse::Ok().json(education))
}

#[instrument(skip(state, data))]
pub async fn create_education(
    state: web::Data<AppState>,
    data: web::Json<EducationInput>,
) -> Result<impl Responder, AppError> {
    let created = state.education_service.create_education(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

#[instrument(skip(state, data))]
pub async fn update_education(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<EducationInput>,
) -> Result<impl Responder, AppError> {
    let changed_rows = state
        .education_service
        .update_education_by_id(&education_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ChangedRowsResponse { changed_rows }))
}

#[instrument(skip(state))]
pub async fn delete_education(
    education_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let changed_rows = state.education_service.delete_education_by_id(&education_id).await?;
    Ok(HttpResponse::Ok().json(ChangedRowsResponse { changed_rows }))
}
