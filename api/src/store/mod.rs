//! Database store module for the golf console API
//!
//! ## Design Decisions
//!
//! ### Row types
//! - **Rows stay in the backend**: each entity has a `*Row` type read with
//!   `FromRow`, including the joined names and counts the console displays.
//!   Rows are converted into `payloads::responses` types before leaving the
//!   store.
//! - **Auto-generated UUIDs**: the database generates ids with
//!   `DEFAULT gen_random_uuid()`.
//!
//! ### Listing
//! - **Nullable filter parameters**: every list query is written once with
//!   `$n IS NULL OR ...` conditions, so an unset filter field binds `NULL`
//!   and the same SQL serves every combination of filters. The same `WHERE`
//!   clause drives both the row query and the total count.
//!
//! ### Deletes
//! - **Unassociate by default**: foreign keys are `ON DELETE SET NULL`, so
//!   deleting a record leaves its dependants in place without a parent.
//! - **Cascade on request**: bulk deletes with `delete_children` remove the
//!   whole subtree (tournament → groups → golfers → shots) inside a single
//!   transaction.
//!
//! ### Time Source Dependency
//! - Functions that stamp records take a `TimeSource` so time can be mocked
//!   during tests. A database trigger only fills in `updated_at` for writes
//!   that did not set it themselves.

pub mod golfer;
pub mod group;
pub mod session;
pub mod shot;
pub mod tournament;

pub use golfer::*;
pub use group::*;
pub use session::*;
pub use shot::*;
pub use tournament::*;

use jiff::{Timestamp, civil::Date};
use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTs};
use payloads::{
    requests::PageRequest, responses::Paginated, validation::FieldErrors,
};
use sqlx::{
    FromRow, PgPool, Postgres, postgres::PgArguments, postgres::PgRow,
    query::QueryAs,
};

#[derive(sqlx::Type)]
#[sqlx(transparent)]
struct OptionalTimestamp(Option<SqlxTs>);

impl From<OptionalTimestamp> for Option<Timestamp> {
    fn from(x: OptionalTimestamp) -> Option<Timestamp> {
        x.0.map(|x| x.to_jiff())
    }
}

#[derive(sqlx::Type)]
#[sqlx(transparent)]
struct OptionalDate(Option<SqlxDate>);

impl From<OptionalDate> for Option<Date> {
    fn from(x: OptionalDate) -> Option<Date> {
        x.0.map(|x| x.to_jiff())
    }
}

/// The parts of a filtered list query. `filter` is a `WHERE` clause using
/// positional parameters bound by a [`BindFilter`].
pub(crate) struct ListQuery {
    pub select: &'static str,
    pub count: &'static str,
    pub filter: &'static str,
    pub order: &'static str,
}

/// Binds a filter's fields, in order, to the parameters of a
/// [`ListQuery::filter`].
pub(crate) trait BindFilter {
    const PARAMS: usize;

    fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments>;
}

/// Fetch one page of a filtered list along with the total match count.
pub(crate) async fn fetch_page<R, F>(
    list: &ListQuery,
    filter: &F,
    page: &PageRequest,
    pool: &PgPool,
) -> Result<(Vec<R>, i64), StoreError>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    F: BindFilter,
{
    let count_sql = format!("{} {}", list.count, list.filter);
    let (count,) = filter
        .bind_to(sqlx::query_as::<_, (i64,)>(&count_sql))
        .fetch_one(pool)
        .await?;

    let page_sql = format!(
        "{} {} ORDER BY {} LIMIT ${} OFFSET ${}",
        list.select,
        list.filter,
        list.order,
        F::PARAMS + 1,
        F::PARAMS + 2,
    );
    let rows = filter
        .bind_to(sqlx::query_as::<_, R>(&page_sql))
        .bind(i64::from(page.page_size()))
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    Ok((rows, count))
}

/// Fetch every row matching a filter, in list order.
pub(crate) async fn fetch_all<R, F>(
    list: &ListQuery,
    filter: &F,
    pool: &PgPool,
) -> Result<Vec<R>, StoreError>
where
    R: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    F: BindFilter,
{
    let sql = format!("{} {} ORDER BY {}", list.select, list.filter, list.order);
    Ok(filter
        .bind_to(sqlx::query_as::<_, R>(&sql))
        .fetch_all(pool)
        .await?)
}

/// Assemble a page response; `next` and `previous` are page numbers.
pub(crate) fn paginate<T>(
    results: Vec<T>,
    count: i64,
    page: &PageRequest,
) -> Paginated<T> {
    let current = page.page();
    let seen = page.offset() + results.len() as i64;
    Paginated {
        count,
        next: current
            .checked_add(1)
            .filter(|_| seen < count && !results.is_empty()),
        previous: (current > 1).then_some(current - 1),
        results,
    }
}

/// Wrap a search term for `ILIKE`, escaping the wildcard characters.
pub(crate) fn search_pattern(search: &Option<String>) -> Option<String> {
    let term = search.as_deref()?.trim();
    if term.is_empty() {
        return None;
    }
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Some(format!("%{escaped}%"))
}

/// Blank optional strings are stored as NULL.
pub(crate) fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub(crate) fn bulk_delete_message(
    deleted: u64,
    singular: &str,
    plural: &str,
    children_deleted: bool,
) -> String {
    let noun = if deleted == 1 { singular } else { plural };
    if children_deleted {
        format!("Deleted {deleted} {noun} and their related data")
    } else {
        format!("Deleted {deleted} {noun}")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Tournament not found")]
    TournamentNotFound,
    #[error("Group not found")]
    GroupNotFound,
    #[error("Golfer not found")]
    GolferNotFound,
    #[error("Shot not found")]
    ShotNotFound,
    #[error("Practice session not found")]
    SessionNotFound,
    #[error("{group} is full ({available} spots available, {requested} requested)")]
    GroupFull {
        group: String,
        available: i64,
        requested: i64,
    },
    #[error("{group} already has {current} golfers")]
    GroupCapacityBelowCount { group: String, current: i64 },
    #[error("A golfer with the ID '{code}' already exists")]
    GolferCodeNotUnique { code: String },
    #[error("No ids were given")]
    EmptyIdList,
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Unique constraint violation")]
    NotUnique(#[source] sqlx::Error),
    #[error("Database error")]
    Database(#[source] sqlx::Error),
    #[error("Unexpected error")]
    UnexpectedError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            return StoreError::NotUnique(e);
        }
        StoreError::Database(e)
    }
}

impl From<FieldErrors> for StoreError {
    fn from(e: FieldErrors) -> Self {
        StoreError::Validation(e)
    }
}

/// Map a missing row to the given not-found error.
pub(crate) fn not_found(
    e: sqlx::Error,
    missing: StoreError,
) -> StoreError {
    match e {
        sqlx::Error::RowNotFound => missing,
        e => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_escape_wildcards() {
        assert_eq!(search_pattern(&None), None);
        assert_eq!(search_pattern(&Some("  ".into())), None);
        assert_eq!(
            search_pattern(&Some(" 50%_off ".into())),
            Some("%50\\%\\_off%".into())
        );
    }

    #[test]
    fn page_links() {
        let first = PageRequest::new(1, 2);
        let page = paginate(vec![1, 2], 5, &first);
        assert_eq!((page.previous, page.next), (None, Some(2)));

        let last = PageRequest::new(3, 2);
        let page = paginate(vec![5], 5, &last);
        assert_eq!((page.previous, page.next), (Some(2), None));

        let beyond = PageRequest::new(9, 2);
        let page = paginate(Vec::<i32>::new(), 5, &beyond);
        assert_eq!((page.previous, page.next), (Some(8), None));

        let furthest = PageRequest::new(u32::MAX, 5);
        let page = paginate(Vec::<i32>::new(), 5, &furthest);
        assert_eq!((page.previous, page.next), (Some(u32::MAX - 1), None));
        let page = paginate(vec![1], i64::MAX, &furthest);
        assert_eq!(page.next, None);
    }

    #[test]
    fn delete_messages() {
        assert_eq!(
            bulk_delete_message(1, "group", "groups", false),
            "Deleted 1 group"
        );
        assert_eq!(
            bulk_delete_message(3, "group", "groups", true),
            "Deleted 3 groups and their related data"
        );
    }
}
