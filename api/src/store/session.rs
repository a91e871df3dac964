use super::*;
use jiff_sqlx::ToSqlx;
use payloads::{
    SessionId,
    requests::{BulkDelete, SessionFilter},
    responses,
};
use uuid::Uuid;

use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: SessionId,
    pub session_name: String,
    #[sqlx(try_from = "SqlxTs")]
    pub start_time: Timestamp,
    #[sqlx(try_from = "OptionalTimestamp")]
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
    pub shot_count: i64,
}

impl From<SessionRow> for responses::Session {
    fn from(row: SessionRow) -> Self {
        Self {
            session_id: row.id,
            session_details: payloads::Session {
                session_name: row.session_name,
                start_time: Some(row.start_time),
                end_time: row.end_time,
                notes: row.notes,
            },
            shot_count: row.shot_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SESSION_COLUMNS: &str = "SELECT ps.*,
        (SELECT COUNT(*) FROM shots s
            WHERE s.session_id = ps.id) AS shot_count
    FROM practice_sessions ps";

const SESSIONS: ListQuery = ListQuery {
    select: SESSION_COLUMNS,
    count: "SELECT COUNT(*) FROM practice_sessions ps",
    filter: "WHERE ($1::text IS NULL
        OR ps.session_name ILIKE $1
        OR ps.notes ILIKE $1)",
    order: "ps.start_time DESC, ps.created_at DESC",
};

impl BindFilter for SessionFilter {
    const PARAMS: usize = 1;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(search_pattern(&self.search))
    }
}

pub async fn list_sessions(
    filter: &SessionFilter,
    page: &PageRequest,
    pool: &PgPool,
) -> Result<Paginated<responses::Session>, StoreError> {
    let (rows, count) =
        fetch_page::<SessionRow, _>(&SESSIONS, filter, page, pool).await?;
    Ok(paginate(rows.into_iter().map(Into::into).collect(), count, page))
}

pub async fn get_session(
    session_id: &SessionId,
    pool: &PgPool,
) -> Result<responses::Session, StoreError> {
    let row = sqlx::query_as::<_, SessionRow>(&format!(
        "{SESSION_COLUMNS} WHERE ps.id = $1"
    ))
    .bind(session_id)
    .fetch_one(pool)
    .await
    .map_err(|e| not_found(e, StoreError::SessionNotFound))?;
    Ok(row.into())
}

pub async fn create_session(
    details: &payloads::Session,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Session, StoreError> {
    let now = time_source.now();
    let details = payloads::Session {
        start_time: Some(details.start_time.unwrap_or(now)),
        ..details.clone()
    };
    payloads::validation::validate_session(&details)?;

    let session_id = sqlx::query_scalar::<_, SessionId>(
        "INSERT INTO practice_sessions (
            session_name,
            start_time,
            end_time,
            notes,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5) RETURNING id",
    )
    .bind(details.session_name.trim())
    .bind(details.start_time.unwrap_or(now).to_sqlx())
    .bind(details.end_time.map(|t| t.to_sqlx()))
    .bind(non_blank(&details.notes))
    .bind(now.to_sqlx())
    .fetch_one(pool)
    .await?;

    get_session(&session_id, pool).await
}

/// Update a session. A missing start time keeps the recorded one.
pub async fn update_session(
    session_id: &SessionId,
    details: &payloads::Session,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Session, StoreError> {
    let existing = get_session(session_id, pool).await?;
    let details = payloads::Session {
        start_time: details.start_time.or(existing.start_time),
        ..details.clone()
    };
    payloads::validation::validate_session(&details)?;

    let result = sqlx::query(
        "UPDATE practice_sessions SET
            session_name = $2,
            start_time = COALESCE($3, start_time),
            end_time = $4,
            notes = $5,
            updated_at = $6
        WHERE id = $1",
    )
    .bind(session_id)
    .bind(details.session_name.trim())
    .bind(details.start_time.map(|t| t.to_sqlx()))
    .bind(details.end_time.map(|t| t.to_sqlx()))
    .bind(non_blank(&details.notes))
    .bind(time_source.now().to_sqlx())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::SessionNotFound);
    }
    get_session(session_id, pool).await
}

/// Delete a session. Its shots remain, without a session.
pub async fn delete_session(
    session_id: &SessionId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM practice_sessions WHERE id = $1")
        .bind(session_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::SessionNotFound);
    }
    Ok(())
}

pub async fn bulk_delete_sessions(
    details: &BulkDelete<SessionId>,
    pool: &PgPool,
) -> Result<responses::BulkDeleteResult, StoreError> {
    if details.ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let ids: Vec<Uuid> = details.ids.iter().map(|id| id.0).collect();

    let mut tx = pool.begin().await?;
    if details.delete_children {
        sqlx::query("DELETE FROM shots WHERE session_id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
    }
    let deleted =
        sqlx::query("DELETE FROM practice_sessions WHERE id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    tx.commit().await?;

    tracing::info!(
        deleted,
        delete_children = details.delete_children,
        "deleted practice sessions"
    );
    Ok(responses::BulkDeleteResult {
        message: bulk_delete_message(
            deleted,
            "session",
            "sessions",
            details.delete_children,
        ),
        deleted_count: deleted,
        children_deleted: details.delete_children,
    })
}
