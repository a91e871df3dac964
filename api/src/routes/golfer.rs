use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{
    GolferId,
    requests::{BulkDelete, GolferFilter, PageRequest},
};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/golfers")]
pub async fn list_golfers(
    filter: web::Query<GolferFilter>,
    page: web::Query<PageRequest>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let golfers =
        store::list_golfers(&filter, &page, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(golfers))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/golfers")]
pub async fn create_golfer(
    details: web::Json<payloads::Golfer>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let golfer = store::create_golfer(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Created().json(golfer))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/golfers/bulk_delete")]
pub async fn bulk_delete_golfers(
    details: web::Json<BulkDelete<GolferId>>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let result = store::bulk_delete_golfers(&details, &pool).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/golfers/{golfer_id}")]
pub async fn get_golfer(
    golfer_id: web::Path<GolferId>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let golfer = store::get_golfer(&golfer_id, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(golfer))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[put("/golfers/{golfer_id}")]
pub async fn update_golfer(
    golfer_id: web::Path<GolferId>,
    details: web::Json<payloads::Golfer>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let golfer =
        store::update_golfer(&golfer_id, &details, &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(golfer))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/golfers/{golfer_id}")]
pub async fn delete_golfer(
    golfer_id: web::Path<GolferId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_golfer(&golfer_id, &pool).await?;
    Ok(HttpResponse::NoContent().finish())
}
