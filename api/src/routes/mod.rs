pub mod golfer;
pub mod group;
pub mod session;
pub mod shot;
pub mod tournament;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, error::InternalError, get, web,
};

use crate::store::StoreError;

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(tournament::list_tournaments)
        .service(tournament::create_tournament)
        .service(tournament::bulk_delete_tournaments)
        .service(tournament::get_tournament)
        .service(tournament::get_tournament_with_groups)
        .service(tournament::update_tournament)
        .service(tournament::delete_tournament)
        .service(group::list_groups)
        .service(group::create_group)
        .service(group::bulk_delete_groups)
        .service(group::get_group)
        .service(group::get_group_with_golfers)
        .service(group::update_group)
        .service(group::delete_group)
        .service(group::assign_golfers)
        .service(group::remove_golfers)
        .service(golfer::list_golfers)
        .service(golfer::create_golfer)
        .service(golfer::bulk_delete_golfers)
        .service(golfer::get_golfer)
        .service(golfer::update_golfer)
        .service(golfer::delete_golfer)
        .service(shot::list_shots)
        .service(shot::create_shot)
        .service(shot::bulk_delete_shots)
        // must come before the `/shots/{shot_id}` routes
        .service(shot::shot_statistics)
        .service(shot::get_shot)
        .service(shot::update_shot)
        .service(shot::update_shot_metric)
        .service(shot::delete_shot)
        .service(session::list_sessions)
        .service(session::create_session)
        .service(session::bulk_delete_sessions)
        .service(session::get_session)
        .service(session::update_session)
        .service(session::delete_session)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Malformed JSON bodies are reported like any other bad request.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = APIError::BadRequest(anyhow::anyhow!("{err}"))
            .error_response();
        InternalError::from_response(err, response).into()
    })
}

/// Same for query strings that don't parse into a filter or page.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = APIError::BadRequest(anyhow::anyhow!("{err}"))
            .error_response();
        InternalError::from_response(err, response).into()
    })
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(_) | StoreError::UnexpectedError(_) => {
                APIError::UnexpectedError(e.into())
            }
            StoreError::TournamentNotFound
            | StoreError::GroupNotFound
            | StoreError::GolferNotFound
            | StoreError::ShotNotFound
            | StoreError::SessionNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn store_errors_map_to_status_codes() {
        let status = |e: StoreError| APIError::from(e).error_response().status();
        assert_eq!(status(StoreError::GroupNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status(StoreError::EmptyIdList), StatusCode::BAD_REQUEST);
        assert_eq!(
            status(StoreError::GroupFull {
                group: "Group 1".into(),
                available: 0,
                requested: 2,
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(StoreError::UnexpectedError(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
