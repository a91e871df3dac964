use super::*;
use jiff_sqlx::ToSqlx;
use payloads::{
    Gender, GolferId, GroupId, SkillLevel, TournamentId,
    requests::{BulkDelete, GolferFilter},
    responses,
    validation::{age_on, generate_golfer_code, group_display_name},
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::time::TimeSource;

#[derive(Debug, Clone, FromRow)]
pub struct GolferRow {
    pub id: GolferId,
    pub golfer_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sqlx(try_from = "OptionalDate")]
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    pub handicap: Option<Decimal>,
    pub skill_level: SkillLevel,
    pub preferred_tee: Option<String>,
    pub group_id: Option<GroupId>,
    pub is_active: bool,
    pub notes: Option<String>,
    #[sqlx(try_from = "SqlxTs")]
    pub created_at: Timestamp,
    #[sqlx(try_from = "SqlxTs")]
    pub updated_at: Timestamp,
    pub group_number: Option<i32>,
    pub group_nickname: Option<String>,
    pub tournament_id: Option<TournamentId>,
    pub tournament_name: Option<String>,
    pub shot_count: i64,
}

impl GolferRow {
    /// Ages depend on the current date, so conversion needs it.
    pub fn into_response(self, today: Date) -> responses::Golfer {
        responses::Golfer {
            golfer_id: self.id,
            full_name: format!("{} {}", self.first_name, self.last_name),
            age: self.date_of_birth.map(|dob| age_on(dob, today)),
            group_name: self.group_number.map(|number| {
                group_display_name(self.group_nickname.as_deref(), number)
            }),
            tournament_id: self.tournament_id,
            tournament_name: self.tournament_name,
            shot_count: self.shot_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
            golfer_details: payloads::Golfer {
                golfer_code: Some(self.golfer_code),
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone: self.phone,
                date_of_birth: self.date_of_birth,
                gender: self.gender,
                handicap: self.handicap,
                skill_level: self.skill_level,
                preferred_tee: self.preferred_tee,
                group_id: self.group_id,
                is_active: self.is_active,
                notes: self.notes,
            },
        }
    }
}

const GOLFER_COLUMNS: &str = "SELECT gf.*,
        g.group_number,
        g.nickname AS group_nickname,
        g.tournament_id,
        t.name AS tournament_name,
        (SELECT COUNT(*) FROM shots s
            WHERE s.golfer_id = gf.id) AS shot_count
    FROM golfers gf
    LEFT JOIN golf_groups g ON g.id = gf.group_id
    LEFT JOIN tournaments t ON t.id = g.tournament_id";

const GOLFERS: ListQuery = ListQuery {
    select: GOLFER_COLUMNS,
    count: "SELECT COUNT(*) FROM golfers gf
        LEFT JOIN golf_groups g ON g.id = gf.group_id",
    filter: "WHERE ($1::uuid IS NULL OR g.tournament_id = $1)
        AND ($2::uuid IS NULL OR gf.group_id = $2)
        AND ($3::skill_level IS NULL OR gf.skill_level = $3)
        AND ($4::bool IS NULL OR gf.is_active = $4)
        AND ($5::bool IS NULL OR (gf.group_id IS NULL) = $5)
        AND ($6::text IS NULL
            OR gf.first_name ILIKE $6
            OR gf.last_name ILIKE $6
            OR (gf.first_name || ' ' || gf.last_name) ILIKE $6
            OR gf.golfer_code ILIKE $6
            OR gf.email ILIKE $6)",
    order: "gf.last_name, gf.first_name, gf.created_at",
};

impl BindFilter for GolferFilter {
    const PARAMS: usize = 6;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        query
            .bind(self.tournament_id)
            .bind(self.group_id)
            .bind(self.skill_level)
            .bind(self.is_active)
            .bind(self.unassigned)
            .bind(search_pattern(&self.search))
    }
}

pub async fn list_golfers(
    filter: &GolferFilter,
    page: &PageRequest,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Paginated<responses::Golfer>, StoreError> {
    let (rows, count) =
        fetch_page::<GolferRow, _>(&GOLFERS, filter, page, pool).await?;
    let today = time_source.today();
    Ok(paginate(
        rows.into_iter().map(|r| r.into_response(today)).collect(),
        count,
        page,
    ))
}

/// Every golfer matching the filter, unpaginated.
pub async fn list_all_golfers(
    filter: &GolferFilter,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<Vec<responses::Golfer>, StoreError> {
    let rows = fetch_all::<GolferRow, _>(&GOLFERS, filter, pool).await?;
    let today = time_source.today();
    Ok(rows.into_iter().map(|r| r.into_response(today)).collect())
}

pub async fn get_golfer(
    golfer_id: &GolferId,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Golfer, StoreError> {
    let row = sqlx::query_as::<_, GolferRow>(&format!(
        "{GOLFER_COLUMNS} WHERE gf.id = $1"
    ))
    .bind(golfer_id)
    .fetch_one(pool)
    .await
    .map_err(|e| not_found(e, StoreError::GolferNotFound))?;
    Ok(row.into_response(time_source.today()))
}

/// Pick a generated code that isn't taken yet, stepping the numeric suffix
/// forward on collisions.
async fn unique_golfer_code(
    first_name: &str,
    last_name: &str,
    time_source: &TimeSource,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<String, StoreError> {
    let now = time_source.now();
    for step in 0..10_000 {
        let code = generate_golfer_code(
            first_name,
            last_name,
            now + jiff::SignedDuration::from_millis(step),
        );
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM golfers WHERE golfer_code = $1)",
        )
        .bind(&code)
        .fetch_one(&mut **tx)
        .await?;
        if !taken {
            return Ok(code);
        }
    }
    Err(anyhow::anyhow!("no free golfer code for {first_name} {last_name}")
        .into())
}

/// Check that a golfer can join a group: golfers already in it always can.
async fn check_group_space(
    group_id: &Option<GroupId>,
    golfer_id: Option<&GolferId>,
    tx: &mut sqlx::Transaction<'_, Postgres>,
) -> Result<(), StoreError> {
    let Some(group_id) = group_id else {
        return Ok(());
    };
    let (display_name, max_golfers, current) =
        lock_group_capacity(group_id, tx).await?;
    if let Some(golfer_id) = golfer_id {
        let already_member = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM golfers WHERE id = $1 AND group_id = $2
            )",
        )
        .bind(golfer_id)
        .bind(group_id)
        .fetch_one(&mut **tx)
        .await?;
        if already_member {
            return Ok(());
        }
    }
    if current >= max_golfers {
        return Err(StoreError::GroupFull {
            group: display_name,
            available: 0,
            requested: 1,
        });
    }
    Ok(())
}

fn map_golfer_code_error(e: sqlx::Error, code: &str) -> StoreError {
    match StoreError::from(e) {
        StoreError::NotUnique(_) => StoreError::GolferCodeNotUnique {
            code: code.to_string(),
        },
        e => e,
    }
}

pub async fn create_golfer(
    details: &payloads::Golfer,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Golfer, StoreError> {
    payloads::validation::validate_golfer(details, time_source.today())?;

    let mut tx = pool.begin().await?;
    check_group_space(&details.group_id, None, &mut tx).await?;
    let code = match non_blank(&details.golfer_code) {
        Some(code) => code.to_uppercase(),
        None => {
            unique_golfer_code(
                &details.first_name,
                &details.last_name,
                time_source,
                &mut tx,
            )
            .await?
        }
    };

    let golfer_id = sqlx::query_scalar::<_, GolferId>(
        "INSERT INTO golfers (
            golfer_code,
            first_name,
            last_name,
            email,
            phone,
            date_of_birth,
            gender,
            handicap,
            skill_level,
            preferred_tee,
            group_id,
            is_active,
            notes,
            created_at,
            updated_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14
        ) RETURNING id",
    )
    .bind(&code)
    .bind(details.first_name.trim())
    .bind(details.last_name.trim())
    .bind(non_blank(&details.email))
    .bind(non_blank(&details.phone))
    .bind(details.date_of_birth.map(|d| d.to_sqlx()))
    .bind(details.gender)
    .bind(details.handicap)
    .bind(details.skill_level)
    .bind(non_blank(&details.preferred_tee))
    .bind(details.group_id)
    .bind(details.is_active)
    .bind(non_blank(&details.notes))
    .bind(time_source.now().to_sqlx())
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| map_golfer_code_error(e, &code))?;
    tx.commit().await?;

    get_golfer(&golfer_id, pool, time_source).await
}

/// Update a golfer. A blank golfer code keeps the existing one.
pub async fn update_golfer(
    golfer_id: &GolferId,
    details: &payloads::Golfer,
    pool: &PgPool,
    time_source: &TimeSource,
) -> Result<responses::Golfer, StoreError> {
    payloads::validation::validate_golfer(details, time_source.today())?;

    let mut tx = pool.begin().await?;
    let existing_code = sqlx::query_scalar::<_, String>(
        "SELECT golfer_code FROM golfers WHERE id = $1 FOR UPDATE",
    )
    .bind(golfer_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| not_found(e, StoreError::GolferNotFound))?;
    check_group_space(&details.group_id, Some(golfer_id), &mut tx).await?;
    let code = non_blank(&details.golfer_code)
        .map(|c| c.to_uppercase())
        .unwrap_or(existing_code);

    sqlx::query(
        "UPDATE golfers SET
            golfer_code = $2,
            first_name = $3,
            last_name = $4,
            email = $5,
            phone = $6,
            date_of_birth = $7,
            gender = $8,
            handicap = $9,
            skill_level = $10,
            preferred_tee = $11,
            group_id = $12,
            is_active = $13,
            notes = $14,
            updated_at = $15
        WHERE id = $1",
    )
    .bind(golfer_id)
    .bind(&code)
    .bind(details.first_name.trim())
    .bind(details.last_name.trim())
    .bind(non_blank(&details.email))
    .bind(non_blank(&details.phone))
    .bind(details.date_of_birth.map(|d| d.to_sqlx()))
    .bind(details.gender)
    .bind(details.handicap)
    .bind(details.skill_level)
    .bind(non_blank(&details.preferred_tee))
    .bind(details.group_id)
    .bind(details.is_active)
    .bind(non_blank(&details.notes))
    .bind(time_source.now().to_sqlx())
    .execute(&mut *tx)
    .await
    .map_err(|e| map_golfer_code_error(e, &code))?;
    tx.commit().await?;

    get_golfer(golfer_id, pool, time_source).await
}

/// Delete a golfer. Their shots remain, without a golfer.
pub async fn delete_golfer(
    golfer_id: &GolferId,
    pool: &PgPool,
) -> Result<(), StoreError> {
    let result = sqlx::query("DELETE FROM golfers WHERE id = $1")
        .bind(golfer_id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::GolferNotFound);
    }
    Ok(())
}

pub async fn bulk_delete_golfers(
    details: &BulkDelete<GolferId>,
    pool: &PgPool,
) -> Result<responses::BulkDeleteResult, StoreError> {
    if details.ids.is_empty() {
        return Err(StoreError::EmptyIdList);
    }
    let ids: Vec<Uuid> = details.ids.iter().map(|id| id.0).collect();

    let mut tx = pool.begin().await?;
    if details.delete_children {
        sqlx::query("DELETE FROM shots WHERE golfer_id = ANY($1)")
            .bind(&ids)
            .execute(&mut *tx)
            .await?;
    }
    let deleted = sqlx::query("DELETE FROM golfers WHERE id = ANY($1)")
        .bind(&ids)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    tracing::info!(
        deleted,
        delete_children = details.delete_children,
        "deleted golfers"
    );
    Ok(responses::BulkDeleteResult {
        message: bulk_delete_message(
            deleted,
            "golfer",
            "golfers",
            details.delete_children,
        ),
        deleted_count: deleted,
        children_deleted: details.delete_children,
    })
}
