use super::*;
use jiff_sqlx::ToSqlx;
use payloads::{
    GroupId, TournamentId,
    requests::{BulkDelete, GolferFilter, GolferIds, GroupFilter},
    responses,
    validation::group_display_name,
};
use uuid::Uuid;

use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct GroupRow {
    pub id: GroupId,
    pub tournament_id: Option<TournamentId>,
    pub group_number: i32,
    pub nickname: Option<String>,
    pub max_golfers: i32,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
    pub tournament_name: Option<String>,
    pub current_golfer_count: i64,
}

impl GroupRow {
    fn display_name(&self) -> String {
        group_display_name(self.nickname.as_deref(), self.group_number)
    }

    fn available_spots(&self) -> i64 {
        (i64::from(self.max_golfers) - self.current_golfer_count).max(0)
    }
}

impl From<GroupRow> for responses::Group {
    fn from(row: GroupRow) -> Self {
        Self {
            display_name: row.display_name(),
            is_full: row.current_golfer_count >= i64::from(row.max_golfers),
            available_spots: row.available_spots(),
            group_id: row.id,
            group_details: payloads::Group {
                tournament_id: row.tournament_id,
                nickname: row.nickname,
                max_golfers: row.max_golfers,
            },
            group_number: row.group_number,
            tournament_name: row.tournament_name,
            current_golfer_count: row.current_golfer_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const GROUP_COLUMNS: &str = "SELECT g.*,
        t.name AS tournament_name,
        (SELECT COUNT(*) FROM golfers gf
            WHERE gf.group_id = g.id) AS current_golfer_count
    FROM golf_groups g
    LEFT JOIN tournaments t ON t.id = g.tournament_id";

const GROUPS: ListQuery = ListQuery {
    select: GROUP_COLUMNS,
    count: "SELECT COUNT(*) FROM golf_groups g
        LEFT JOIN tournaments t ON t.id = g.tournament_id",
    filter: "WHERE ($1::uuid IS NULL OR g.tournament_id = $1)
        AND ($2::bool IS NULL OR (
            (SELECT COUNT(*) FROM golfers gf WHERE gf.group_id = g.id)
                >= g.max_golfers
        ) = $2)
        AND ($3::text IS NULL
            OR g.nickname ILIKE $3
            OR t.name ILIKE $3
            OR ('Group ' || g.group_number) ILIKE $3)",
    order: "t.name NULLS LAST, g.group_number, g.created_at",
};

impl BindFilter for GroupFilter {
    const PARAMS: usize = 3;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.tournament_id)
            .bind(self.is_full)
            .bind(search_pattern(&self.search))
    }
}

pub async fn list_groups(
    filter: &GroupFilter,
    page: &PageRequest,
    pool: &PgPool,
) -> Result<Paginated<responses::Group>, StoreError> {
    let (rows, count) =
        fetch_page::<GroupRow, _>(&GROUPS, filter, page, pool).await?;
    Ok(paginate(rows.into_iter().map(Into::into).collect(), count, page))
}

/// Every group matching the filter, unpaginated.
pub async fn list_all_groups(
    filter: &GroupFilter,
    pool: &PgPool,
) -> Result<Vec<responses::Group>, StoreError> {
    let rows = fetch_all::<GroupRow, _>(&GROUPS, filter, pool).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

async fn get_group_row(
    group_id: &GroupId,
    pool: &PgPool,
) -> Result<GroupRow, StoreError> {
    sqlx::query_as::<_, GroupRow>(&format!("{GROUP_COLUMNS} WHERE g.id = $1"))
        .bind(group_id)
        .fetch_one(pool)
        .await
        .map_err(|e| not_found(e, StoreError::GroupNotFound))
}

pub async fn get_group(
    group_id: &GroupId,
    pool: &PgPool,
) -> Result<responses::Group, StoreError> {
    Ok(get_group_row(group_id, pool).await?.into())
}

pub async fn get_group_with_golfers(
    group_id: &GroupId,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::GroupWithGolfers, StoreError> {
    let group = get_group(group_id, pool).await?;
    let golfers = list_all_golfers(
        &GolferFilter {
            group_id: Some(*group_id),
            ..Default::default()
        },
        pool,
        time_source,
    )
    .await?;
    Ok(responses::GroupWithGolfers { group, golfers })
}

async fn ensure_tournament_exists(
    tournament_id: &Option<TournamentId>,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    if let Some(tournament_id) = tournament_id {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tournaments WHERE id = $1)",
        )
        .bind(tournament_id)
        .fetch_one(&mut **tx)
        .await?;
        if !exists {
            return Err(StoreError::TournamentNotFound);
        }
    }
    Ok(())
}

/// Serialize group numbering within a tournament, or among groups without
/// one, until the transaction ends.
async fn lock_group_numbers(
    tournament_id: &Option<TournamentId>,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    sqlx::query(
        "SELECT pg_advisory_xact_lock(
            hashtext('golf_groups:' || COALESCE($1::TEXT, 'unassigned'))
        )",
    )
    .bind(tournament_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// The next group number within a tournament, or among groups without one.
async fn next_group_number(
    tournament_id: &Option<TournamentId>,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<i32, StoreError> {
    lock_group_numbers(tournament_id, tx).await?;
    Ok(sqlx::query_scalar::<_, i32>(
        "SELECT COALESCE(MAX(group_number), 0) + 1 FROM golf_groups
        WHERE tournament_id IS NOT DISTINCT FROM $1",
    )
    .bind(tournament_id)
    .fetch_one(&mut **tx)
    .await?)
}

/// Detach the groups of deleted tournaments, numbering them after the
/// groups that are already unassigned.
pub(super) async fn release_groups(
    tournament_ids: &[Uuid],
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    lock_group_numbers(&None, tx).await?;
    sqlx::query(
        "UPDATE golf_groups g
        SET tournament_id = NULL,
            group_number = released.base + released.position
        FROM (
            SELECT id,
                ROW_NUMBER() OVER (
                    ORDER BY tournament_id, group_number
                )::INTEGER AS position,
                (SELECT COALESCE(MAX(group_number), 0) FROM golf_groups
                WHERE tournament_id IS NULL) AS base
            FROM golf_groups
            WHERE tournament_id = ANY($1)
        ) released
        WHERE g.id = released.id",
    )
    .bind(tournament_ids)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn create_group(
    details: &payloads::Group,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Group, StoreError> {
    payloads::validation::validate_group(details)?;

    let mut tx = pool.begin().await?;
    ensure_tournament_exists(&details.tournament_id, &mut tx).await?;
    let group_number =
        next_group_number(&details.tournament_id, &mut tx).await?;
    let group_id = sqlx::query_scalar::<_, GroupId>(
        "INSERT INTO golf_groups (
            tournament_id,
            group_number,
            nickname,
            max_golfers,
            created_at,
            updated_at
        ) VALUES ($1, $2, $3, $4, $5, $5) RETURNING id",
    )
    .bind(details.tournament_id)
    .bind(group_number)
    .bind(non_blank(&details.nickname))
    .bind(details.max_golfers)
    .bind(time_source.now().to_sqlx())
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    get_group(&group_id, pool).await
}

/// Update a group. Moving it to another tournament renumbers it there; the
/// capacity cannot drop below the current number of golfers.
pub async fn update_group(
    group_id: &GroupId,
    details: &payloads::Group,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Group, StoreError> {
    payloads::validation::validate_group(details)?;

    let existing = get_group_row(group_id, pool).await?;
    if existing.current_golfer_count > i64::from(details.max_golfers) {
        return Err(StoreError::GroupCapacityBelowCount {
            group: existing.display_name(),
            current: existing.current_golfer_count,
        });
    }

    let mut tx = pool.begin().await?;
    ensure_tournament_exists(&details.tournament_id, &mut tx).await?;
    let group_number = if existing.tournament_id == details.tournament_id {
        existing.group_number
    } else {
        next_group_number(&details.tournament_id, &mut tx).await?
    };
    sqlx::query(
        "UPDATE golf_groups SET
            tournament_id = $2,
            group_number = $3,
            nickname = $4,
            max_golfers = $5,
            updated_at = $6
        WHERE id = $1",
    )
    .bind(group_id)
    .bind(details.tournament_id)
    .bind(group_number)
    .bind(non_blank(&details.nickname))
    .bind(details.max_golfers)
    .bind(time_source.now().to_sqlx())
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    get_group(group_id, pool).await
}

/// Delete a group. Its golfers remain, unassigned.
pub async fn delete_group(
    group_id: &GroupId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM golf_groups WHERE id = $1")
        .bind(group_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::GroupNotFound);
    }
    Ok(())
}

pub async fn bulk_delete_groups(
    details: &BulkDelete<GroupId>,
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
                SELECT id FROM golfers WHERE group_id = ANY($1)
            )",
        )
        .bind(&ids)
        .execute(&mut *tx)
        .await?;
        sqlx::query("DELETE FROM golfers WHERE group_id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
    }
    let deleted = sqlx::query("DELETE FROM golf_groups WHERE id = ANY($1)")
        .bind(&ids)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    tracing::info!(
        deleted,
        delete_children = details.delete_children,
        "deleted groups"
    );
    Ok(responses::BulkDeleteResult {
        message: bulk_delete_message(
            deleted,
            "group",
            "groups",
            details.delete_children,
        ),
        deleted_count: deleted,
        children_deleted: details.delete_children,
    })
}

/// Lock a group for the rest of the transaction and read its capacity and
/// current golfer count.
pub(super) async fn lock_group_capacity(
    group_id: &GroupId,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(String, i64, i64), StoreError> {
    let (group_number, nickname, max_golfers) =
        sqlx::query_as::<_, (i32, Option<String>, i32)>(
            "SELECT group_number, nickname, max_golfers FROM golf_groups
            WHERE id = $1 FOR UPDATE",
        )
        .bind(group_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| not_found(e, StoreError::GroupNotFound))?;
    let current = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM golfers WHERE group_id = $1",
    )
    .bind(group_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok((
        group_display_name(nickname.as_deref(), group_number),
        i64::from(max_golfers),
        current,
    ))
}

/// Move golfers into a group. Golfers already in the group don't count
/// against its remaining capacity.
pub async fn assign_golfers(
    group_id: &GroupId,
    details: &GolferIds,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::GroupAssignmentResult, StoreError> {
    if details.golfer_ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let mut ids: Vec<Uuid> =
        details.golfer_ids.iter().map(|id| id.0).collect();
    ids.sort();
    ids.dedup();

    let mut tx = pool.begin().await?;
    let (display_name, max_golfers, current) =
        lock_group_capacity(group_id, &mut tx).await?;

    let (found, already_in_group) = sqlx::query_as::<_, (i64, i64)>(
        "SELECT COUNT(*), COUNT(*) FILTER (WHERE group_id = $2)
        FROM golfers WHERE id = ANY($1)",
    )
    .bind(&ids)
    .bind(group_id)
    .fetch_one(&mut *tx)
    .await?;
    if found < ids.len() as i64 {
        return Err(StoreError::GolferNotFound);
    }

    let requested = found - already_in_group;
    let available = (max_golfers - current).max(0);
    if requested > available {
        return Err(StoreError::GroupFull {
            group: display_name,
            available,
            requested,
        });
    }

    let assigned = sqlx::query(
        "UPDATE golfers SET group_id = $2, updated_at = $3
        WHERE id = ANY($1) AND group_id IS DISTINCT FROM $2",
    )
    .bind(&ids)
    .bind(group_id)
    .bind(time_source.now().to_sqlx())
    .execute(&mut *tx)
    .await?
    .rows_affected();
    tx.commit().await?;

    Ok(responses::GroupAssignmentResult {
        message: format!(
            "Assigned {assigned} golfer{} to {display_name}",
            if assigned == 1 { "" } else { "s" }
        ),
        assigned_count: assigned,
    })
}

/// Unassign golfers from a group; golfers in other groups are left alone.
pub async fn remove_golfers(
    group_id: &GroupId,
    details: &GolferIds,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::GroupAssignmentResult, StoreError> {
    if details.golfer_ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let ids: Vec<Uuid> = details.golfer_ids.iter().map(|id| id.0).collect();
    let group = get_group_row(group_id, pool).await?;

    let removed = sqlx::query(
        "UPDATE golfers SET group_id = NULL, updated_at = $3
        WHERE id = ANY($1) AND group_id = $2",
    )
    .bind(&ids)
    .bind(group_id)
    .bind(time_source.now().to_sqlx())
    .execute(pool)
    .await?
    .rows_affected();

    Ok(responses::GroupAssignmentResult {
        message: format!(
            "Removed {removed} golfer{} from {}",
            if removed == 1 { "" } else { "s" },
            group.display_name()
        ),
        assigned_count: removed,
    })
}
