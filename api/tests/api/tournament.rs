use jiff::civil::date;
use payloads::requests::{BulkDelete, PageRequest, TournamentFilter};
use reqwest::StatusCode;
use test_helpers::{
    assert_error_contains, assert_status_code, spawn_app,
    tournament_details_a, tournament_details_b,
};

#[tokio::test]
async fn create_read_update_delete_tournament() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let created = app.create_test_tournament().await?;
    assert_eq!(created.tournament_details, tournament_details_a());
    assert_eq!(created.total_groups, 0);
    assert_eq!(created.total_golfers, 0);
    assert_eq!(created.created_at, app.time_source.now());

    let fetched = app.client.get_tournament(&created.tournament_id).await?;
    assert_eq!(fetched, created);

    app.time_source.advance(jiff::Span::new().hours(1));
    let mut details = tournament_details_a();
    details.name = "Spring Classic (rescheduled)".into();
    details.end_date = date(2025, 4, 14);
    let updated = app
        .client
        .update_tournament(&created.tournament_id, &details)
        .await?;
    assert_eq!(updated.name, "Spring Classic (rescheduled)");
    assert_eq!(updated.end_date, date(2025, 4, 14));
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, app.time_source.now());

    app.client.delete_tournament(&created.tournament_id).await?;
    assert_error_contains(
        app.client.get_tournament(&created.tournament_id).await,
        StatusCode::NOT_FOUND,
        "Tournament not found",
    );
    assert_status_code(
        app.client.delete_tournament(&created.tournament_id).await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn invalid_tournaments_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = tournament_details_a();
    details.end_date = date(2025, 4, 1);
    assert_error_contains(
        app.client.create_tournament(&details).await,
        StatusCode::BAD_REQUEST,
        "End date must be on or after the start date",
    );

    let mut details = tournament_details_a();
    details.name = "   ".into();
    assert_error_contains(
        app.client.create_tournament(&details).await,
        StatusCode::BAD_REQUEST,
        "Tournament name is required",
    );

    // a single-day tournament is fine
    let mut details = tournament_details_a();
    details.end_date = details.start_date;
    app.client.create_tournament(&details).await?;

    Ok(())
}

#[tokio::test]
async fn list_tournaments_with_filters_and_pages() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.client.create_tournament(&tournament_details_a()).await?;
    app.client.create_tournament(&tournament_details_b()).await?;
    let mut details = tournament_details_b();
    details.name = "Winter Invitational".into();
    details.start_date = date(2025, 12, 1);
    details.end_date = date(2025, 12, 2);
    details.is_active = true;
    app.client.create_tournament(&details).await?;

    let all = app
        .client
        .list_tournaments(&TournamentFilter::default())
        .await?;
    let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
    // latest start date first
    assert_eq!(
        names,
        vec!["Winter Invitational", "Autumn Open", "Spring Classic"]
    );

    let first = app
        .client
        .tournaments_page(&TournamentFilter::default(), &PageRequest::new(1, 2))
        .await?;
    assert_eq!(first.count, 3);
    assert_eq!(first.results.len(), 2);
    assert_eq!((first.previous, first.next), (None, Some(2)));

    let second = app
        .client
        .tournaments_page(&TournamentFilter::default(), &PageRequest::new(2, 2))
        .await?;
    assert_eq!(second.results.len(), 1);
    assert_eq!((second.previous, second.next), (Some(1), None));
    assert_eq!(second.results[0].name, "Spring Classic");

    let inactive = app
        .client
        .list_tournaments(&TournamentFilter {
            is_active: Some(false),
            ..Default::default()
        })
        .await?;
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].name, "Autumn Open");

    let searched = app
        .client
        .list_tournaments(&TournamentFilter {
            search: Some("pebble".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].name, "Spring Classic");

    Ok(())
}

#[tokio::test]
async fn tournament_lists_its_groups() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let tournament_id = populated.tournament.tournament_id;
    app.create_test_group(Some(tournament_id)).await?;

    let with_groups =
        app.client.get_tournament_with_groups(&tournament_id).await?;
    assert_eq!(with_groups.tournament.total_groups, 2);
    assert_eq!(with_groups.tournament.total_golfers, 2);
    let numbers: Vec<_> =
        with_groups.groups.iter().map(|g| g.group_number).collect();
    assert_eq!(numbers, vec![1, 2]);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_unassociates_children() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;

    let result = app
        .client
        .bulk_delete_tournaments(&BulkDelete {
            ids: vec![populated.tournament.tournament_id],
            delete_children: false,
        })
        .await?;
    assert_eq!(result.deleted_count, 1);
    assert_eq!(result.message, "Deleted 1 tournament");
    assert!(!result.children_deleted);

    let group = app.client.get_group(&populated.group.group_id).await?;
    assert_eq!(group.tournament_id, None);
    assert_eq!(group.tournament_name, None);
    assert_eq!(group.current_golfer_count, 2);
    assert_eq!(app.count_rows("shots").await?, 2);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_with_children_removes_everything() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let other = app.client.create_tournament(&tournament_details_b()).await?;
    let unassigned = app.create_test_golfer("Una", "Signed", None).await?;

    let result = app
        .client
        .bulk_delete_tournaments(&BulkDelete {
            ids: vec![populated.tournament.tournament_id, other.tournament_id],
            delete_children: true,
        })
        .await?;
    assert_eq!(result.deleted_count, 2);
    assert_eq!(
        result.message,
        "Deleted 2 tournaments and their related data"
    );

    assert_eq!(app.count_rows("tournaments").await?, 0);
    assert_eq!(app.count_rows("golf_groups").await?, 0);
    assert_eq!(app.count_rows("shots").await?, 0);
    // golfers outside the tournaments are untouched
    let golfers = app.client.list_golfers(&Default::default()).await?;
    assert_eq!(golfers.len(), 1);
    assert_eq!(golfers[0].golfer_id, unassigned.golfer_id);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_requires_ids() -> anyhow::Result<()> {
    let app = spawn_app().await;
    assert_status_code(
        app.client
            .bulk_delete_tournaments(&BulkDelete {
                ids: vec![],
                delete_children: false,
            })
            .await,
        StatusCode::BAD_REQUEST,
    );
    Ok(())
}

#[tokio::test]
async fn groups_of_deleted_tournaments_are_renumbered() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let unassigned = app.create_test_group(None).await?;
    let first = app.create_test_tournament().await?;
    let second = app
        .client
        .create_tournament(&tournament_details_b())
        .await?;
    app.create_test_group(Some(first.tournament_id)).await?;
    app.create_test_group(Some(second.tournament_id)).await?;
    app.create_test_group(Some(second.tournament_id)).await?;

    app.client.delete_tournament(&first.tournament_id).await?;
    app.client
        .bulk_delete_tournaments(&BulkDelete {
            ids: vec![second.tournament_id],
            delete_children: false,
        })
        .await?;

    let groups = app
        .client
        .list_groups(&payloads::requests::GroupFilter::default())
        .await?;
    assert!(groups.iter().all(|g| g.tournament_id.is_none()));
    let mut numbers: Vec<i32> = groups.iter().map(|g| g.group_number).collect();
    numbers.sort();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(unassigned.group_number, 1);

    // New unassigned groups continue after the released ones
    let next = app.create_test_group(None).await?;
    assert_eq!(next.group_number, 5);

    Ok(())
}
