use jiff::Span;
use payloads::requests::{BulkDelete, SessionFilter, ShotFilter};
use reqwest::StatusCode;
use test_helpers::{
    assert_error_contains, session_details, session_shot_details, spawn_app,
};

#[tokio::test]
async fn create_read_update_delete_session() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let session = app.create_test_session().await?;
    assert_eq!(session.session_name, "Range warmup");
    assert_eq!(session.start_time, Some(app.time_source.now()));
    assert_eq!(session.shot_count, 0);

    app.client
        .create_shot(&session_shot_details(session.session_id))
        .await?;
    let fetched = app.client.get_session(&session.session_id).await?;
    assert_eq!(fetched.shot_count, 1);

    app.time_source.advance(Span::new().minutes(45));
    let mut details = session_details();
    details.end_time = Some(app.time_source.now());
    let updated = app
        .client
        .update_session(&session.session_id, &details)
        .await?;
    // the start time is kept when not given
    assert_eq!(updated.start_time, session.start_time);
    assert_eq!(updated.end_time, Some(app.time_source.now()));

    app.client.delete_session(&session.session_id).await?;
    assert_error_contains(
        app.client.get_session(&session.session_id).await,
        StatusCode::NOT_FOUND,
        "Practice session not found",
    );
    // shots outlive their session
    let shots = app.client.list_shots(&ShotFilter::default()).await?;
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].session_id, None);

    Ok(())
}

#[tokio::test]
async fn invalid_sessions_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = session_details();
    details.start_time = Some(app.time_source.now());
    details.end_time = Some(app.time_source.now() - Span::new().hours(1));
    assert_error_contains(
        app.client.create_session(&details).await,
        StatusCode::BAD_REQUEST,
        "End time must be after the start time",
    );

    let mut details = session_details();
    details.session_name = String::new();
    assert_error_contains(
        app.client.create_session(&details).await,
        StatusCode::BAD_REQUEST,
        "Session name is required",
    );

    Ok(())
}

#[tokio::test]
async fn search_sessions() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.create_test_session().await?;
    let mut details = session_details();
    details.session_name = "Bunker drills".into();
    details.notes = None;
    app.client.create_session(&details).await?;

    let found = app
        .client
        .list_sessions(&SessionFilter {
            search: Some("tempo".into()),
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].session_name, "Range warmup");

    let all = app.client.list_sessions(&SessionFilter::default()).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_sessions_with_shots() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let session = app.create_test_session().await?;
    for _ in 0..3 {
        app.client
            .create_shot(&session_shot_details(session.session_id))
            .await?;
    }
    app.create_test_shot(None).await?;

    let result = app
        .client
        .bulk_delete_sessions(&BulkDelete {
            ids: vec![session.session_id],
            delete_children: true,
        })
        .await?;
    assert_eq!(result.message, "Deleted 1 session and their related data");
    assert_eq!(app.count_rows("practice_sessions").await?, 0);
    assert_eq!(app.count_rows("shots").await?, 1);

    Ok(())
}
