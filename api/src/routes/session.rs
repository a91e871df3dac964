use actix_web::{HttpResponse, delete, get, post, put, web};
use payloads::{
    SessionId,
    requests::{BulkDelete, PageRequest, SessionFilter},
};
use sqlx::PgPool;

use crate::{store, time::TimeSource};

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/sessions")]
pub async fn list_sessions(
    filter: web::Query<SessionFilter>,
    page: web::Query<PageRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let sessions = store::list_sessions(&filter, &page, &pool).await?;
    Ok(HttpResponse::Ok().json(sessions))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/sessions")]
pub async fn create_session(
    details: web::Json<payloads::Session>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let session = store::create_session(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Created().json(session))
}

#[tracing::instrument(skip(pool), ret)]
#[post("/sessions/bulk_delete")]
pub async fn bulk_delete_sessions(
    details: web::Json<BulkDelete<SessionId>>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let result = store::bulk_delete_sessions(&details, &pool).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/sessions/{session_id}")]
pub async fn get_session(
    session_id: web::Path<SessionId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let session = store::get_session(&session_id, &pool).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[put("/sessions/{session_id}")]
pub async fn update_session(
    session_id: web::Path<SessionId>,
    details: web::Json<payloads::Session>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let session =
        store::update_session(&session_id, &details, &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(session))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/sessions/{session_id}")]
pub async fn delete_session(
    session_id: web::Path<SessionId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_session(&session_id, &pool).await?;
    Ok(HttpResponse::NoContent().finish())
}
