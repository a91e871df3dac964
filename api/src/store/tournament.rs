use super::*;
use jiff_sqlx::ToSqlx;
use payloads::{
    TournamentId,
    requests::{BulkDelete, TournamentFilter},
    responses,
};
use uuid::Uuid;

use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct TournamentRow {
    pub id: TournamentId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(try_from = "SqlxDate")]
    pub start_date: Date,
    #[sqlx(try_from = "SqlxDate")]
    pub end_date: Date,
    pub location: Option<String>,
    pub is_active: bool,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
    pub total_groups: i64,
    pub total_golfers: i64,
}

impl From<TournamentRow> for responses::Tournament {
    fn from(row: TournamentRow) -> Self {
        Self {
            tournament_id: row.id,
            tournament_details: payloads::Tournament {
                name: row.name,
                description: row.description,
                start_date: row.start_date,
                end_date: row.end_date,
                location: row.location,
                is_active: row.is_active,
            },
            total_groups: row.total_groups,
            total_golfers: row.total_golfers,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const TOURNAMENT_COLUMNS: &str = "SELECT t.*,
        (SELECT COUNT(*) FROM golf_groups g
            WHERE g.tournament_id = t.id) AS total_groups,
        (SELECT COUNT(*) FROM golfers gf
            JOIN golf_groups g ON g.id = gf.group_id
            WHERE g.tournament_id = t.id) AS total_golfers
    FROM tournaments t";

const TOURNAMENTS: ListQuery = ListQuery {
    select: TOURNAMENT_COLUMNS,
    count: "SELECT COUNT(*) FROM tournaments t",
    filter: "WHERE ($1::bool IS NULL OR t.is_active = $1)
        AND ($2::text IS NULL
            OR t.name ILIKE $2
            OR t.location ILIKE $2
            OR t.description ILIKE $2)",
    order: "t.start_date DESC, t.created_at DESC",
};

impl BindFilter for TournamentFilter {
    const PARAMS: usize = 2;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query.bind(self.is_active).bind(search_pattern(&self.search))
    }
}

pub async fn list_tournaments(
    filter: &TournamentFilter,
    page: &PageRequest,
    pool: &PgPool,
) -> Result<Paginated<responses::Tournament>, StoreError> {
    let (rows, count) =
        fetch_page::<TournamentRow, _>(&TOURNAMENTS, filter, page, pool)
            .await?;
    Ok(paginate(rows.into_iter().map(Into::into).collect(), count, page))
}

pub async fn get_tournament(
    tournament_id: &TournamentId,
    pool: &PgPool,
) -> Result<responses::Tournament, StoreError> {
    let row = sqlx::query_as::<_, TournamentRow>(&format!(
        "{TOURNAMENT_COLUMNS} WHERE t.id = $1"
    ))
    .bind(tournament_id)
    .fetch_one(pool)
    .await
    .map_err(|e| not_found(e, StoreError::TournamentNotFound))?;
    Ok(row.into())
}

pub async fn get_tournament_with_groups(
    tournament_id: &TournamentId,
    pool: &PgPool,
) -> Result<responses::TournamentWithGroups, StoreError> {
    let tournament = get_tournament(tournament_id, pool).await?;
    let groups = list_all_groups(
        &payloads::requests::GroupFilter {
            tournament_id: Some(*tournament_id),
            ..Default::default()
        },
        pool,
    )
    .await?;
    Ok(responses::TournamentWithGroups { tournament, groups })
}

pub async fn create_tournament(
    details: &payloads::Tournament,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Tournament, StoreError> {
    payloads::validation::validate_tournament(details)?;

    let tournament_id = sqlx::query_scalar::<_, TournamentId>(
        "INSERT INTO tournaments (
            name,
            description,
            start_date,
            end_date,
            location,
            is_active,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $7) RETURNING id",
    )
    .bind(details.name.trim())
    .bind(non_blank(&details.description))
    .bind(details.start_date.to_sqlx())
    .bind(details.end_date.to_sqlx())
    .bind(non_blank(&details.location))
    .bind(details.is_active)
    .bind(time_source.now().to_sqlx())
    .fetch_one(pool)
    .await?;

    get_tournament(&tournament_id, pool).await
}

pub async fn update_tournament(
    tournament_id: &TournamentId,
    details: &payloads::Tournament,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Tournament, StoreError> {
    payloads::validation::validate_tournament(details)?;

    let result = sqlx::query(
        "UPDATE tournaments SET
            name = $2,
            description = $3,
            start_date = $4,
            end_date = $5,
            location = $6,
            is_active = $7,
            updated_at = $8
        WHERE id = $1",
    )
    .bind(tournament_id)
    .bind(details.name.trim())
    .bind(non_blank(&details.description))
    .bind(details.start_date.to_sqlx())
    .bind(details.end_date.to_sqlx())
    .bind(non_blank(&details.location))
    .bind(details.is_active)
    .bind(time_source.now().to_sqlx())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::TournamentNotFound);
    }
    get_tournament(tournament_id, pool).await
}

/// Delete a tournament. Its groups remain, without a tournament.
pub async fn delete_tournament(
    tournament_id: &TournamentId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    release_groups(&[tournament_id.0], &mut tx).await?;
    let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
        .bind(tournament_id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::TournamentNotFound);
    }
    tx.commit().await?;
    Ok(())
}

pub async fn bulk_delete_tournaments(
    details: &BulkDelete<TournamentId>,
    pool: &PgPool,
) -> Result<responses::BulkDeleteResult, StoreError> {
    if details.ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let ids: Vec<Uuid> = details.ids.iter().map(|id| id.0).collect();

    let mut tx = pool.begin().await?;
    if details.delete_children {
        sqlx::query(
            "DELETE FROM shots WHERE golfer_id IN (
                SELECT gf.id FROM golfers gf
                JOIN golf_groups g ON g.id = gf.group_id
                WHERE g.tournament_id = ANY($1)
            )",
        )
        .bind(&ids)
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "DELETE FROM golfers WHERE group_id IN (
                SELECT id FROM golf_groups WHERE tournament_id = ANY($1)
            )",
        )
        .bind(&ids)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM golf_groups WHERE tournament_id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
    } else {
        release_groups(&ids, &mut tx).await?;
    }
    let deleted = sqlx::query("DELETE FROM tournaments WHERE id = ANY($1)")
        .bind(&ids)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    tracing::info!(
        deleted,
        delete_children = details.delete_children,
        "deleted tournaments"
    );
    Ok(responses::BulkDeleteResult {
        message: bulk_delete_message(
            deleted,
            "tournament",
            "tournaments",
            details.delete_children,
        ),
        deleted_count: deleted,
        children_deleted: details.delete_children,
    })
}
