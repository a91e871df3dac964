use payloads::{
    ShotMetric, ShotType,
    requests::{BulkDelete, ShotFilter, UpdateShotMetric},
    responses::ShotTypeCount,
};
use reqwest::StatusCode;
use test_helpers::{
    assert_error_contains, assert_status_code, shot_details, spawn_app,
};

#[tokio::test]
async fn create_read_update_delete_shot() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let alice = &populated.golfers[0];

    let first = &populated.shots[0];
    assert_eq!(first.shot_number, 1);
    assert_eq!(first.smash_factor, Some(1.5));
    assert_eq!(first.golfer_name.as_deref(), Some("Alice Anders"));
    assert_eq!(first.group_name.as_deref(), Some("Group 1"));
    assert_eq!(first.tournament_name.as_deref(), Some("Spring Classic"));
    assert_eq!(first.timestamp, Some(app.time_source.now()));

    let second = app.create_test_shot(Some(alice.golfer_id)).await?;
    assert_eq!(second.shot_number, 2);
    // numbering is per golfer
    assert_eq!(populated.shots[1].shot_number, 1);

    let mut details = shot_details(Some(alice.golfer_id));
    details.shot_type = ShotType::Approach;
    details.club_used = Some("8 Iron".into());
    details.club_head_speed = None;
    let updated = app.client.update_shot(&second.shot_id, &details).await?;
    assert_eq!(updated.shot_type, ShotType::Approach);
    assert_eq!(updated.shot_number, 2);
    assert_eq!(updated.smash_factor, None);
    assert_eq!(updated.timestamp, second.timestamp);

    app.client.delete_shot(&second.shot_id).await?;
    assert_error_contains(
        app.client.get_shot(&second.shot_id).await,
        StatusCode::NOT_FOUND,
        "Shot not found",
    );

    Ok(())
}

#[tokio::test]
async fn moving_a_shot_renumbers_it() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let bob = &populated.golfers[1];

    let moved = app
        .client
        .update_shot(&populated.shots[0].shot_id, &shot_details(Some(bob.golfer_id)))
        .await?;
    assert_eq!(moved.shot_number, 2);
    assert_eq!(moved.golfer_name.as_deref(), Some("Bob Barker"));

    Ok(())
}

#[tokio::test]
async fn invalid_shots_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = shot_details(None);
    details.ball_speed = Some(300.0);
    details.hole_number = Some(19);
    let result = app.client.create_shot(&details).await;
    assert_error_contains(
        result,
        StatusCode::BAD_REQUEST,
        "Ball Speed must be between 0 and 250 mph",
    );
    assert_error_contains(
        app.client.create_shot(&details).await,
        StatusCode::BAD_REQUEST,
        "Hole number must be between 1 and 18",
    );

    let golfer = app.create_test_golfer("Alice", "Anders", None).await?;
    app.client.delete_golfer(&golfer.golfer_id).await?;
    assert_status_code(
        app.client
            .create_shot(&shot_details(Some(golfer.golfer_id)))
            .await,
        StatusCode::NOT_FOUND,
    );

    Ok(())
}

#[tokio::test]
async fn edit_a_single_metric() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let shot = app.create_test_shot(None).await?;

    let updated = app
        .client
        .update_shot_metric(
            &shot.shot_id,
            &UpdateShotMetric {
                metric: ShotMetric::CarryDistance,
                value: Some(251.5),
            },
        )
        .await?;
    assert_eq!(updated.carry_distance, Some(251.5));
    assert_eq!(updated.total_distance, shot.total_distance);

    let cleared = app
        .client
        .update_shot_metric(
            &shot.shot_id,
            &UpdateShotMetric {
                metric: ShotMetric::ClubHeadSpeed,
                value: None,
            },
        )
        .await?;
    assert_eq!(cleared.club_head_speed, None);
    assert_eq!(cleared.smash_factor, None);

    assert_error_contains(
        app.client
            .update_shot_metric(
                &shot.shot_id,
                &UpdateShotMetric {
                    metric: ShotMetric::SideAngle,
                    value: Some(-50.0),
                },
            )
            .await,
        StatusCode::BAD_REQUEST,
        "Side Angle must be between -45 and 45°",
    );

    Ok(())
}

#[tokio::test]
async fn filter_shots() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let loner = app.create_test_golfer("Cara", "Cole", None).await?;
    let mut details = shot_details(Some(loner.golfer_id));
    details.shot_type = ShotType::Putt;
    details.is_simulated = true;
    let putt = app.client.create_shot(&details).await?;
    let anonymous = app.create_test_shot(None).await?;

    let alice_shots = app
        .client
        .list_shots(&ShotFilter {
            golfer_id: Some(populated.golfers[0].golfer_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(alice_shots.len(), 1);
    assert_eq!(alice_shots[0].shot_id, populated.shots[0].shot_id);

    let in_group = app
        .client
        .list_shots(&ShotFilter {
            group_id: Some(populated.group.group_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(in_group.len(), 2);

    let in_tournament = app
        .client
        .list_shots(&ShotFilter {
            tournament_id: Some(populated.tournament.tournament_id),
            ..Default::default()
        })
        .await?;
    assert_eq!(in_tournament.len(), 2);

    let putts = app
        .client
        .list_shots(&ShotFilter {
            shot_type: Some(ShotType::Putt),
            is_simulated: Some(true),
            ..Default::default()
        })
        .await?;
    assert_eq!(putts.len(), 1);
    assert_eq!(putts[0].shot_id, putt.shot_id);

    let unassigned = app
        .client
        .list_shots(&ShotFilter {
            unassigned: Some(true),
            ..Default::default()
        })
        .await?;
    let mut ids: Vec<_> = unassigned.iter().map(|s| s.shot_id).collect();
    ids.sort();
    let mut expected = vec![putt.shot_id, anonymous.shot_id];
    expected.sort();
    assert_eq!(ids, expected);

    Ok(())
}

#[tokio::test]
async fn shot_statistics() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let mut details = shot_details(Some(populated.golfers[0].golfer_id));
    details.shot_type = ShotType::Chip;
    details.ball_speed = Some(50.0);
    details.club_head_speed = Some(40.0);
    details.carry_distance = Some(30.0);
    details.total_distance = Some(35.0);
    app.client.create_shot(&details).await?;

    let stats = app.client.shot_statistics(&ShotFilter::default()).await?;
    assert_eq!(stats.total_shots, 3);
    assert_eq!(stats.longest_total_distance, Some(265.0));
    assert_eq!(stats.average_carry_distance, Some(170.0));
    assert_eq!(stats.best_smash_factor, Some(1.5));
    assert_eq!(
        stats.shots_by_type,
        vec![
            ShotTypeCount {
                shot_type: ShotType::Drive,
                count: 2,
            },
            ShotTypeCount {
                shot_type: ShotType::Chip,
                count: 1,
            },
        ]
    );

    let chips = app
        .client
        .shot_statistics(&ShotFilter {
            shot_type: Some(ShotType::Chip),
            ..Default::default()
        })
        .await?;
    assert_eq!(chips.total_shots, 1);
    assert_eq!(chips.best_smash_factor, Some(1.25));

    let nothing = app
        .client
        .shot_statistics(&ShotFilter {
            shot_type: Some(ShotType::Bunker),
            ..Default::default()
        })
        .await?;
    assert_eq!(nothing.total_shots, 0);
    assert_eq!(nothing.average_ball_speed, None);
    assert!(nothing.shots_by_type.is_empty());

    Ok(())
}

#[tokio::test]
async fn bulk_delete_shots() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let ids: Vec<_> = populated.shots.iter().map(|s| s.shot_id).collect();

    let result = app
        .client
        .bulk_delete_shots(&BulkDelete {
            ids,
            delete_children: true,
        })
        .await?;
    assert_eq!(result.deleted_count, 2);
    assert_eq!(result.message, "Deleted 2 shots");
    assert!(!result.children_deleted);

    let golfer = app.client.get_golfer(&populated.golfers[0].golfer_id).await?;
    assert_eq!(golfer.shot_count, 0);

    Ok(())
}
