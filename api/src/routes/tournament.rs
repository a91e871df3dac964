use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{
    TournamentId,
    requests::{BulkDelete, PageRequest, TournamentFilter},
};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/tournaments")]
pub async fn list_tournaments(
    filter: web::Query<TournamentFilter>,
    page: web::Query<PageRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let tournaments = store::list_tournaments(&filter, &page, &pool).await?;
    Ok(HttpResponse::Ok().json(tournaments))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/tournaments")]
pub async fn create_tournament(
    details: web::Json<payloads::Tournament>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let tournament =
        store::create_tournament(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Created().json(tournament))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/tournaments/bulk_delete")]
pub async fn bulk_delete_tournaments(
    details: web::Json<BulkDelete<TournamentId>>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let result = store::bulk_delete_tournaments(&details, &pool).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/tournaments/{tournament_id}")]
pub async fn get_tournament(
    tournament_id: web::Path<TournamentId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let tournament = store::get_tournament(&tournament_id, &pool).await?;
    Ok(HttpResponse::Ok().json(tournament))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/tournaments/{tournament_id}/groups")]
pub async fn get_tournament_with_groups(
    tournament_id: web::Path<TournamentId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let tournament =
        store::get_tournament_with_groups(&tournament_id, &pool).await?;
    Ok(HttpResponse::Ok().json(tournament))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[put("/tournaments/{tournament_id}")]
pub async fn update_tournament(
    tournament_id: web::Path<TournamentId>,
    details: web::Json<payloads::Tournament>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let tournament = store::update_tournament(
        &tournament_id,
        &details,
        &pool,
        &time_source,
    )
    .await?;
    Ok(HttpResponse::Ok().json(tournament))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/tournaments/{tournament_id}")]
pub async fn delete_tournament(
    tournament_id: web::Path<TournamentId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_tournament(&tournament_id, &pool).await?;
    Ok(HttpResponse::NoContent().finish())
}
