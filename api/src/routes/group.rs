use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{
    GroupId,
    requests::{BulkDelete, GolferIds, GroupFilter, PageRequest},
};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/groups")]
pub async fn list_groups(
    filter: web::Query<GroupFilter>,
    page: web::Query<PageRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let groups = store::list_groups(&filter, &page, &pool).await?;
    Ok(HttpResponse::Ok().json(groups))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/groups")]
pub async fn create_group(
    details: web::Json<payloads::Group>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let group = store::create_group(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Created().json(group))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/groups/bulk_delete")]
pub async fn bulk_delete_groups(
    details: web::Json<BulkDelete<GroupId>>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let result = store::bulk_delete_groups(&details, &pool).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/groups/{group_id}")]
pub async fn get_group(
    group_id: web::Path<GroupId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let group = store::get_group(&group_id, &pool).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/groups/{group_id}/golfers")]
pub async fn get_group_with_golfers(
    group_id: web::Path<GroupId>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let group =
        store::get_group_with_golfers(&group_id, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[put("/groups/{group_id}")]
pub async fn update_group(
    group_id: web::Path<GroupId>,
    details: web::Json<payloads::Group>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let group =
        store::update_group(&group_id, &details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/groups/{group_id}")]
pub async fn delete_group(
    group_id: web::Path<GroupId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_group(&group_id, &pool).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/groups/{group_id}/assign_golfers")]
pub async fn assign_golfers(
    group_id: web::Path<GroupId>,
    details: web::Json<GolferIds>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let result =
        store::assign_golfers(&group_id, &details, &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/groups/{group_id}/remove_golfers")]
pub async fn remove_golfers(
    group_id: web::Path<GroupId>,
    details: web::Json<GolferIds>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let result =
        store::remove_golfers(&group_id, &details, &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(result))
}
