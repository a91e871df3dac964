//! Some basic database tests.
//!
//! Though api::store defines its own level of API interface, most tests are
//! at the http route level.
use api::store::{self, StoreError};
use payloads::{
    GolferId, TournamentId,
    requests::{PageRequest, TournamentFilter},
};
use sqlx::Error;
use uuid::Uuid;

use test_helpers::{spawn_app, tournament_details_a, tournament_details_b};

#[tokio::test]
async fn trigger_stamps_untimed_updates() -> Result<(), StoreError> {
    let app = spawn_app().await;
    let tournament = store::create_tournament(
        &tournament_details_a(),
        &app.db_pool,
        &app.time_source,
    )
    .await?;
    assert_eq!(tournament.updated_at, app.time_source.now());

    // an update that doesn't set updated_at gets the database clock
    sqlx::query("UPDATE tournaments SET location = 'Augusta' WHERE id = $1")
        .bind(tournament.tournament_id)
        .execute(&app.db_pool)
        .await?;
    let touched =
        store::get_tournament(&tournament.tournament_id, &app.db_pool).await?;
    assert_eq!(touched.location.as_deref(), Some("Augusta"));
    assert_ne!(touched.updated_at, tournament.updated_at);

    Ok(())
}

#[tokio::test]
async fn pages_past_the_end_are_empty() -> Result<(), StoreError> {
    let app = spawn_app().await;
    for details in [tournament_details_a(), tournament_details_b()] {
        store::create_tournament(&details, &app.db_pool, &app.time_source)
            .await?;
    }

    let page = store::list_tournaments(
        &TournamentFilter::default(),
        &PageRequest::new(5, 10),
        &app.db_pool,
    )
    .await?;
    assert_eq!(page.count, 2);
    assert!(page.results.is_empty());
    assert_eq!((page.previous, page.next), (Some(4), None));

    // page sizes are clamped to at least one row
    let page = store::list_tournaments(
        &TournamentFilter::default(),
        &PageRequest::new(1, 0),
        &app.db_pool,
    )
    .await?;
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.next, Some(2));

    Ok(())
}

#[tokio::test]
async fn missing_records_are_typed_errors() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = store::get_golfer(
        &GolferId(Uuid::new_v4()),
        &app.db_pool,
        &app.time_source,
    )
    .await;
    assert!(matches!(result, Err(StoreError::GolferNotFound)));

    let result =
        store::delete_tournament(&TournamentId(Uuid::new_v4()), &app.db_pool)
            .await;
    assert!(matches!(result, Err(StoreError::TournamentNotFound)));

    Ok(())
}

#[tokio::test]
async fn group_numbers_are_unique_per_tournament() -> Result<(), Error> {
    let app = spawn_app().await;
    let tournament_id = sqlx::query_scalar::<_, TournamentId>(
        "INSERT INTO tournaments (name, start_date, end_date, created_at, updated_at)
        VALUES ('Direct', '2025-05-01', '2025-05-02', NOW(), NOW())
        RETURNING id",
    )
    .fetch_one(&app.db_pool)
    .await?;

    let insert_group = "INSERT INTO golf_groups
        (tournament_id, group_number, max_golfers, created_at, updated_at)
        VALUES ($1, 1, 4, NOW(), NOW())";
    sqlx::query(insert_group)
        .bind(tournament_id)
        .execute(&app.db_pool)
        .await?;
    let duplicate = sqlx::query(insert_group)
        .bind(tournament_id)
        .execute(&app.db_pool)
        .await;
    assert!(matches!(
        duplicate.map_err(StoreError::from),
        Err(StoreError::NotUnique(_))
    ));

    Ok(())
}
