use payloads::requests::{BulkDelete, GolferFilter, GolferIds, GroupFilter};
use reqwest::StatusCode;
use test_helpers::{
    assert_error_contains, assert_status_code, group_details, spawn_app,
    tournament_details_b,
};

#[tokio::test]
async fn create_read_update_delete_group() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tournament = app.create_test_tournament().await?;

    let first = app.create_test_group(Some(tournament.tournament_id)).await?;
    let second = app.create_test_group(Some(tournament.tournament_id)).await?;
    assert_eq!((first.group_number, second.group_number), (1, 2));
    assert_eq!(first.display_name, "Group 1");
    assert_eq!(first.tournament_name.as_deref(), Some("Spring Classic"));
    assert_eq!(first.available_spots, 4);
    assert!(!first.is_full);

    let mut details = group_details(Some(tournament.tournament_id));
    details.nickname = Some("Morning Wave".into());
    details.max_golfers = 6;
    let updated = app.client.update_group(&first.group_id, &details).await?;
    assert_eq!(updated.display_name, "Morning Wave");
    assert_eq!(updated.group_number, 1);
    assert_eq!(updated.available_spots, 6);

    app.client.delete_group(&first.group_id).await?;
    assert_error_contains(
        app.client.get_group(&first.group_id).await,
        StatusCode::NOT_FOUND,
        "Group not found",
    );

    Ok(())
}

#[tokio::test]
async fn group_size_must_be_in_range() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for max_golfers in [0, 9] {
        let mut details = group_details(None);
        details.max_golfers = max_golfers;
        assert_error_contains(
            app.client.create_group(&details).await,
            StatusCode::BAD_REQUEST,
            "Max golfers must be between 1 and 8",
        );
    }
    Ok(())
}

#[tokio::test]
async fn group_in_unknown_tournament() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tournament = app.create_test_tournament().await?;
    app.client.delete_tournament(&tournament.tournament_id).await?;
    assert_status_code(
        app.client
            .create_group(&group_details(Some(tournament.tournament_id)))
            .await,
        StatusCode::NOT_FOUND,
    );
    Ok(())
}

#[tokio::test]
async fn moving_a_group_renumbers_it() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let spring = app.create_test_tournament().await?;
    let autumn = app.client.create_tournament(&tournament_details_b()).await?;
    app.create_test_group(Some(autumn.tournament_id)).await?;
    let group = app.create_test_group(Some(spring.tournament_id)).await?;
    assert_eq!(group.group_number, 1);

    let moved = app
        .client
        .update_group(&group.group_id, &group_details(Some(autumn.tournament_id)))
        .await?;
    assert_eq!(moved.group_number, 2);
    assert_eq!(moved.tournament_name.as_deref(), Some("Autumn Open"));

    Ok(())
}

#[tokio::test]
async fn assign_and_remove_golfers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut details = group_details(None);
    details.max_golfers = 2;
    let group = app.client.create_group(&details).await?;
    let alice = app.create_test_golfer("Alice", "Anders", None).await?;
    let bob = app.create_test_golfer("Bob", "Barker", None).await?;
    let cara = app.create_test_golfer("Cara", "Cole", None).await?;

    let all_three = GolferIds {
        golfer_ids: vec![alice.golfer_id, bob.golfer_id, cara.golfer_id],
    };
    assert_error_contains(
        app.client.assign_golfers(&group.group_id, &all_three).await,
        StatusCode::BAD_REQUEST,
        "Group 1 is full (2 spots available, 3 requested)",
    );

    let two = GolferIds {
        golfer_ids: vec![alice.golfer_id, bob.golfer_id],
    };
    let result = app.client.assign_golfers(&group.group_id, &two).await?;
    assert_eq!(result.assigned_count, 2);
    assert_eq!(result.message, "Assigned 2 golfers to Group 1");

    let full = app.client.get_group(&group.group_id).await?;
    assert!(full.is_full);
    assert_eq!(full.available_spots, 0);
    assert_eq!(full.current_golfer_count, 2);

    // golfers already in the group don't need a free spot
    let again = app.client.assign_golfers(&group.group_id, &two).await?;
    assert_eq!(again.assigned_count, 0);

    let with_golfers =
        app.client.get_group_with_golfers(&group.group_id).await?;
    let names: Vec<_> = with_golfers
        .golfers
        .iter()
        .map(|g| g.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice Anders", "Bob Barker"]);

    let result = app
        .client
        .remove_golfers(
            &group.group_id,
            &GolferIds {
                golfer_ids: vec![alice.golfer_id],
            },
        )
        .await?;
    assert_eq!(result.message, "Removed 1 golfer from Group 1");

    let unassigned = app
        .client
        .list_golfers(&GolferFilter {
            unassigned: Some(true),
            ..Default::default()
        })
        .await?;
    let mut ids: Vec<_> = unassigned.iter().map(|g| g.golfer_id).collect();
    ids.sort();
    let mut expected = vec![alice.golfer_id, cara.golfer_id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

#[tokio::test]
async fn assigning_unknown_golfers_fails() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let group = app.create_test_group(None).await?;
    let golfer = app.create_test_golfer("Alice", "Anders", None).await?;
    app.client.delete_golfer(&golfer.golfer_id).await?;

    assert_status_code(
        app.client
            .assign_golfers(
                &group.group_id,
                &GolferIds {
                    golfer_ids: vec![golfer.golfer_id],
                },
            )
            .await,
        StatusCode::NOT_FOUND,
    );
    assert_status_code(
        app.client
            .assign_golfers(&group.group_id, &GolferIds { golfer_ids: vec![] })
            .await,
        StatusCode::BAD_REQUEST,
    );
    Ok(())
}

#[tokio::test]
async fn capacity_cannot_drop_below_golfer_count() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;

    let mut details = group_details(Some(populated.tournament.tournament_id));
    details.max_golfers = 1;
    assert_error_contains(
        app.client
            .update_group(&populated.group.group_id, &details)
            .await,
        StatusCode::BAD_REQUEST,
        "Group 1 already has 2 golfers",
    );

    details.max_golfers = 2;
    let updated = app
        .client
        .update_group(&populated.group.group_id, &details)
        .await?;
    assert!(updated.is_full);

    Ok(())
}

#[tokio::test]
async fn deleting_a_group_unassigns_golfers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;

    app.client.delete_group(&populated.group.group_id).await?;

    for golfer in &populated.golfers {
        let golfer = app.client.get_golfer(&golfer.golfer_id).await?;
        assert_eq!(golfer.group_id, None);
        assert_eq!(golfer.group_name, None);
    }
    let tournament = app
        .client
        .get_tournament(&populated.tournament.tournament_id)
        .await?;
    assert_eq!(tournament.total_groups, 0);
    assert_eq!(tournament.total_golfers, 0);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_groups_with_children() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let empty = app.create_test_group(None).await?;

    let result = app
        .client
        .bulk_delete_groups(&BulkDelete {
            ids: vec![populated.group.group_id, empty.group_id],
            delete_children: true,
        })
        .await?;
    assert_eq!(result.deleted_count, 2);
    assert_eq!(app.count_rows("golfers").await?, 0);
    assert_eq!(app.count_rows("shots").await?, 0);
    assert_eq!(app.count_rows("tournaments").await?, 1);

    Ok(())
}

#[tokio::test]
async fn filter_groups() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let mut details = group_details(Some(populated.tournament.tournament_id));
    details.nickname = Some("Late Starters".into());
    app.client.create_group(&details).await?;
    let mut pairs = group_details(None);
    pairs.max_golfers = 2;
    let pairs = app.client.create_group(&pairs).await?;
    let golfer = app.create_test_golfer("Cara", "Cole", None).await?;
    let other = app.create_test_golfer("Dev", "Dunn", None).await?;
    app.client
        .assign_golfers(
            &pairs.group_id,
            &GolferIds {
                golfer_ids: vec![golfer.golfer_id, other.golfer_id],
            },
        )
        .await?;

    let in_tournament = app
        .client
        .list_groups(&GroupFilter {
            tournament_id: Some(populated.tournament.tournament_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(in_tournament.len(), 2);

    let full = app
        .client
        .list_groups(&GroupFilter {
            is_full: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(full.len(), 1);
    assert_eq!(full[0].group_id, pairs.group_id);

    let searched = app
        .client
        .list_groups(&GroupFilter {
            search: Some("late".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].display_name, "Late Starters");

    Ok(())
}

#[tokio::test]
async fn concurrent_creates_get_distinct_numbers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tournament = app.create_test_tournament().await?;
    let details = group_details(Some(tournament.tournament_id));

    let (a, b, c) = tokio::join!(
        app.client.create_group(&details),
        app.client.create_group(&details),
        app.client.create_group(&details),
    );
    let mut numbers = vec![a?.group_number, b?.group_number, c?.group_number];
    numbers.sort();
    assert_eq!(numbers, vec![1, 2, 3]);

    Ok(())
}
