use super::*;
use jiff_sqlx::ToSqlx;
use payloads::{
    GolferId, SessionId, ShotId, ShotType,
    requests::{BulkDelete, ShotFilter, UpdateShotMetric},
    responses,
    validation::{FieldErrors, group_display_name, smash_factor},
};
use uuid::Uuid;

use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct ShotRow {
    pub id: ShotId,
    pub golfer_id: Option<GolferId>,
    pub session_id: Option<SessionId>,
    pub shot_number: i32,
    pub hole_number: Option<i32>,
    pub shot_type: ShotType,
    pub club_used: Option<String>,
    pub ball_speed: Option<f64>,
    pub club_head_speed: Option<f64>,
    pub launch_angle: Option<f64>,
    pub spin_rate: Option<f64>,
    pub carry_distance: Option<f64>,
    pub total_distance: Option<f64>,
    pub side_angle: Option<f64>,
    pub is_simulated: bool,
    pub launch_monitor_id: Option<String>,
    pub notes: Option<String>,
    #[sqlx(try_from = "SqlxTs")]
    pub timestamp: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
    pub golfer_name: Option<String>,
    pub group_number: Option<i32>,
    pub group_nickname: Option<String>,
    pub tournament_name: Option<String>,
}

impl From<ShotRow> for responses::Shot {
    fn from(row: ShotRow) -> Self {
        Self {
            shot_id: row.id,
            shot_number: row.shot_number,
            smash_factor: smash_factor(row.ball_speed, row.club_head_speed),
            golfer_name: row.golfer_name,
            group_name: row.group_number.map(|number| {
                group_display_name(row.group_nickname.as_deref(), number)
            }),
            tournament_name: row.tournament_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
            shot_details: payloads::Shot {
                golfer_id: row.golfer_id,
                session_id: row.session_id,
                hole_number: row.hole_number,
                shot_type: row.shot_type,
                club_used: row.club_used,
                ball_speed: row.ball_speed,
                club_head_speed: row.club_head_speed,
                launch_angle: row.launch_angle,
                spin_rate: row.spin_rate,
                carry_distance: row.carry_distance,
                total_distance: row.total_distance,
                side_angle: row.side_angle,
                is_simulated: row.is_simulated,
                launch_monitor_id: row.launch_monitor_id,
                notes: row.notes,
                timestamp: Some(row.timestamp),
            },
        }
    }
}

const SHOT_JOINS: &str = "FROM shots s
    LEFT JOIN golfers gf ON gf.id = s.golfer_id
    LEFT JOIN golf_groups g ON g.id = gf.group_id
    LEFT JOIN tournaments t ON t.id = g.tournament_id";

const SHOT_COLUMNS: &str = "SELECT s.*,
        gf.first_name || ' ' || gf.last_name AS golfer_name,
        g.group_number,
        g.nickname AS group_nickname,
        t.name AS tournament_name
    FROM shots s
    LEFT JOIN golfers gf ON gf.id = s.golfer_id
    LEFT JOIN golf_groups g ON g.id = gf.group_id
    LEFT JOIN tournaments t ON t.id = g.tournament_id";

const SHOT_FILTER: &str = "WHERE ($1::uuid IS NULL OR s.golfer_id = $1)
    AND ($2::uuid IS NULL OR gf.group_id = $2)
    AND ($3::uuid IS NULL OR g.tournament_id = $3)
    AND ($4::uuid IS NULL OR s.session_id = $4)
    AND ($5::shot_type IS NULL OR s.shot_type = $5)
    AND ($6::bool IS NULL OR s.is_simulated = $6)
    AND ($7::bool IS NULL OR (gf.group_id IS NULL) = $7)";

const SHOTS: ListQuery = ListQuery {
    select: SHOT_COLUMNS,
    count: "SELECT COUNT(*) FROM shots s
        LEFT JOIN golfers gf ON gf.id = s.golfer_id
        LEFT JOIN golf_groups g ON g.id = gf.group_id",
    filter: SHOT_FILTER,
    order: "s.\"timestamp\" DESC, s.shot_number DESC",
};

impl BindFilter for ShotFilter {
    const PARAMS: usize = 7;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.golfer_id)
            .bind(self.group_id)
            .bind(self.tournament_id)
            .bind(self.session_id)
            .bind(self.shot_type)
            .bind(self.is_simulated)
            .bind(self.unassigned)
    }
}

pub async fn list_shots(
    filter: &ShotFilter,
    page: &PageRequest,
    pool: &PgPool,
) -> Result<Paginated<responses::Shot>, StoreError> {
    let (rows, count) =
        fetch_page::<ShotRow, _>(&SHOTS, filter, page, pool).await?;
    Ok(paginate(rows.into_iter().map(Into::into).collect(), count, page))
}

pub async fn get_shot(
    shot_id: &ShotId,
    pool: &PgPool,
) -> Result<responses::Shot, StoreError> {
    let row =
        sqlx::query_as::<_, ShotRow>(&format!("{SHOT_COLUMNS} WHERE s.id = $1"))
            .bind(shot_id)
            .fetch_one(pool)
            .await
            .map_err(|e| not_found(e, StoreError::ShotNotFound))?;
    Ok(row.into())
}

/// Check the golfer and session a shot points at, locking the golfer so shot
/// numbers are handed out one at a time.
async fn check_shot_references(
    details: &payloads::Shot,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    if let Some(golfer_id) = details.golfer_id {
        sqlx::query_scalar::<_, GolferId>(
            "SELECT id FROM golfers WHERE id = $1 FOR UPDATE",
        )
        .bind(golfer_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| not_found(e, StoreError::GolferNotFound))?;
    }
    if let Some(session_id) = details.session_id {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM practice_sessions WHERE id = $1)",
        )
        .bind(session_id)
        .fetch_one(&mut **tx)
        .await?;
        if !exists {
            return Err(StoreError::SessionNotFound);
        }
    }
    Ok(())
}

async fn next_shot_number(
    golfer_id: &Option<GolferId>,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<i32, StoreError> {
    Ok(sqlx::query_scalar::<_, i32>(
        "SELECT COALESCE(MAX(shot_number), 0) + 1 FROM shots
        WHERE golfer_id IS NOT DISTINCT FROM $1",
    )
    .bind(golfer_id)
    .fetch_one(&mut **tx)
    .await?)
}

/// Record a shot. It is numbered after the golfer's latest shot and stamped
/// with the current time unless a timestamp is given.
pub async fn create_shot(
    details: &payloads::Shot,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Shot, StoreError> {
    payloads::validation::validate_shot(details)?;

    let mut tx = pool.begin().await?;
    check_shot_references(details, &mut tx).await?;
    let shot_number = next_shot_number(&details.golfer_id, &mut tx).await?;
    let now = time_source.now();

    let shot_id = sqlx::query_scalar::<_, ShotId>(
        "INSERT INTO shots (
            golfer_id,
            session_id,
            shot_number,
            hole_number,
            shot_type,
            club_used,
            ball_speed,
            club_head_speed,
            launch_angle,
            spin_rate,
            carry_distance,
            total_distance,
            side_angle,
            is_simulated,
            launch_monitor_id,
            notes,
            \"timestamp\",
            created_at,
            updated_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
            $11, $12, $13, $14, $15, $16, $17, $18, $18
        ) RETURNING id",
    )
    .bind(details.golfer_id)
    .bind(details.session_id)
    .bind(shot_number)
    .bind(details.hole_number)
    .bind(details.shot_type)
    .bind(non_blank(&details.club_used))
    .bind(details.ball_speed)
    .bind(details.club_head_speed)
    .bind(details.launch_angle)
    .bind(details.spin_rate)
    .bind(details.carry_distance)
    .bind(details.total_distance)
    .bind(details.side_angle)
    .bind(details.is_simulated)
    .bind(non_blank(&details.launch_monitor_id))
    .bind(non_blank(&details.notes))
    .bind(details.timestamp.unwrap_or(now).to_sqlx())
    .bind(now.to_sqlx())
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    get_shot(&shot_id, pool).await
}

/// Update a shot. Moving it to another golfer renumbers it; a missing
/// timestamp keeps the recorded one.
pub async fn update_shot(
    shot_id: &ShotId,
    details: &payloads::Shot,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Shot, StoreError> {
    payloads::validation::validate_shot(details)?;

    let mut tx = pool.begin().await?;
    let (golfer_id, shot_number) =
        sqlx::query_as::<_, (Option<GolferId>, i32)>(
            "SELECT golfer_id, shot_number FROM shots WHERE id = $1 FOR UPDATE",
        )
        .bind(shot_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| not_found(e, StoreError::ShotNotFound))?;
    check_shot_references(details, &mut tx).await?;
    let shot_number = if golfer_id == details.golfer_id {
        shot_number
    } else {
        next_shot_number(&details.golfer_id, &mut tx).await?
    };

    sqlx::query(
        "UPDATE shots SET
            golfer_id = $2,
            session_id = $3,
            shot_number = $4,
            hole_number = $5,
            shot_type = $6,
            club_used = $7,
            ball_speed = $8,
            club_head_speed = $9,
            launch_angle = $10,
            spin_rate = $11,
            carry_distance = $12,
            total_distance = $13,
            side_angle = $14,
            is_simulated = $15,
            launch_monitor_id = $16,
            notes = $17,
            \"timestamp\" = COALESCE($18, \"timestamp\"),
            updated_at = $19
        WHERE id = $1",
    )
    .bind(shot_id)
    .bind(details.golfer_id)
    .bind(details.session_id)
    .bind(shot_number)
    .bind(details.hole_number)
    .bind(details.shot_type)
    .bind(non_blank(&details.club_used))
    .bind(details.ball_speed)
    .bind(details.club_head_speed)
    .bind(details.launch_angle)
    .bind(details.spin_rate)
    .bind(details.carry_distance)
    .bind(details.total_distance)
    .bind(details.side_angle)
    .bind(details.is_simulated)
    .bind(non_blank(&details.launch_monitor_id))
    .bind(non_blank(&details.notes))
    .bind(details.timestamp.map(|t| t.to_sqlx()))
    .bind(time_source.now().to_sqlx())
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    get_shot(shot_id, pool).await
}

/// Set or clear one measurement, as edited inline in the shots table.
pub async fn update_shot_metric(
    shot_id: &ShotId,
    details: &UpdateShotMetric,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Shot, StoreError> {
    if let Some(value) = details.value
        && let Err(message) =
            payloads::validation::validate_metric(details.metric, value)
    {
        let mut errors = FieldErrors::new();
        errors.add(details.metric.column(), message);
        return Err(errors.into());
    }

    // The column name comes from a fixed set, never from the request body.
    let result = sqlx::query(&format!(
        "UPDATE shots SET {} = $2, updated_at = $3 WHERE id = $1",
        details.metric.column()
    ))
    .bind(shot_id)
    .bind(details.value)
    .bind(time_source.now().to_sqlx())
    .execute(pool)
    .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ShotNotFound);
    }

    get_shot(shot_id, pool).await
}

pub async fn delete_shot(
    shot_id: &ShotId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM shots WHERE id = $1")
        .bind(shot_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::ShotNotFound);
    }
    Ok(())
}

/// Shots have no children, so `delete_children` only changes the message.
pub async fn bulk_delete_shots(
    details: &BulkDelete<ShotId>,
    pool: &PgPool,
) -> Result<responses::BulkDeleteResult, StoreError> {
    if details.ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let ids: Vec<Uuid> = details.ids.iter().map(|id| id.0).collect();

    let deleted = sqlx::query("DELETE FROM shots WHERE id = ANY($1)")
        .bind(&ids)
        .execute(pool)
        .await?
        .rows_affected();

    tracing::info!(deleted, "deleted shots");
    Ok(responses::BulkDeleteResult {
        message: bulk_delete_message(deleted, "shot", "shots", false),
        deleted_count: deleted,
        children_deleted: false,
    })
}

#[derive(FromRow)]
struct StatisticsRow {
    total_shots: i64,
    average_ball_speed: Option<f64>,
    average_carry_distance: Option<f64>,
    average_total_distance: Option<f64>,
    longest_total_distance: Option<f64>,
    best_smash_factor: Option<f64>,
}

/// Aggregates over every shot matching the filter.
pub async fn shot_statistics(
    filter: &ShotFilter,
    pool: &PgPool,
) -> Result<responses::ShotStatistics, StoreError> {
    let totals_sql = format!(
        "SELECT COUNT(*) AS total_shots,
            AVG(s.ball_speed) AS average_ball_speed,
            AVG(s.carry_distance) AS average_carry_distance,
            AVG(s.total_distance) AS average_total_distance,
            MAX(s.total_distance) AS longest_total_distance,
            MAX(CASE WHEN s.ball_speed > 0 AND s.club_head_speed > 0
                THEN s.ball_speed / s.club_head_speed END) AS best_smash_factor
        {SHOT_JOINS} {SHOT_FILTER}"
    );
    let totals = filter
        .bind_to(sqlx::query_as::<_, StatisticsRow>(&totals_sql))
        .fetch_one(pool)
        .await?;

    let by_type_sql = format!(
        "SELECT s.shot_type, COUNT(*) {SHOT_JOINS} {SHOT_FILTER}
        GROUP BY s.shot_type ORDER BY s.shot_type"
    );
    let shots_by_type = filter
        .bind_to(sqlx::query_as::<_, (ShotType, i64)>(&by_type_sql))
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(|(shot_type, count)| responses::ShotTypeCount { shot_type, count })
        .collect();

    Ok(responses::ShotStatistics {
        total_shots: totals.total_shots,
        average_ball_speed: totals.average_ball_speed,
        average_carry_distance: totals.average_carry_distance,
        average_total_distance: totals.average_total_distance,
        longest_total_distance: totals.longest_total_distance,
        best_smash_factor: totals
            .best_smash_factor
            .map(|s| (s * 100.0).round() / 100.0),
        shots_by_type,
    })
}
