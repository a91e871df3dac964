use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use payloads::{
    ShotId,
    requests::{BulkDelete, PageRequest, ShotFilter, UpdateShotMetric},
};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/shots")]
pub async fn list_shots(
    filter: web::Query<ShotFilter>,
    page: web::Query<PageRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let shots = store::list_shots(&filter, &page, &pool).await?;
    Ok(HttpResponse::Ok().json(shots))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/shots")]
pub async fn create_shot(
    details: web::Json<payloads::Shot>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let shot = store::create_shot(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Created().json(shot))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/shots/bulk_delete")]
pub async fn bulk_delete_shots(
    details: web::Json<BulkDelete<ShotId>>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let result = store::bulk_delete_shots(&details, &pool).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/shots/statistics")]
pub async fn shot_statistics(
    filter: web::Query<ShotFilter>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let statistics = store::shot_statistics(&filter, &pool).await?;
    Ok(HttpResponse::Ok().json(statistics))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/shots/{shot_id}")]
pub async fn get_shot(
    shot_id: web::Path<ShotId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let shot = store::get_shot(&shot_id, &pool).await?;
    Ok(HttpResponse::Ok().json(shot))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[put("/shots/{shot_id}")]
pub async fn update_shot(
    shot_id: web::Path<ShotId>,
    details: web::Json<payloads::Shot>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let shot =
        store::update_shot(&shot_id, &details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(shot))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[patch("/shots/{shot_id}")]
pub async fn update_shot_metric(
    shot_id: web::Path<ShotId>,
    details: web::Json<UpdateShotMetric>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let shot =
        store::update_shot_metric(&shot_id, &details, &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(shot))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/shots/{shot_id}")]
pub async fn delete_shot(
    shot_id: web::Path<ShotId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_shot(&shot_id, &pool).await?;
    Ok(HttpResponse::NoContent().finish())
}
