use jiff::civil::date;
use payloads::{
    SkillLevel,
    requests::{BulkDelete, GolferFilter},
};
use reqwest::StatusCode;
use rust_decimal::dec;
use test_helpers::{
    assert_error_contains, golfer_details, group_details, spawn_app,
};

#[tokio::test]
async fn create_read_update_delete_golfer() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let tournament = app.create_test_tournament().await?;
    let group = app.create_test_group(Some(tournament.tournament_id)).await?;

    let golfer = app
        .create_test_golfer("Alice", "Anders", Some(group.group_id))
        .await?;
    // 2025-01-01T00:00:00Z ends in 0000 milliseconds
    assert_eq!(golfer.golfer_code.as_deref(), Some("AAND0000"));
    assert_eq!(golfer.full_name, "Alice Anders");
    assert_eq!(golfer.age, Some(34));
    assert_eq!(golfer.handicap, Some(dec!(12.4)));
    assert_eq!(golfer.group_name.as_deref(), Some("Group 1"));
    assert_eq!(golfer.tournament_id, Some(tournament.tournament_id));
    assert_eq!(golfer.tournament_name.as_deref(), Some("Spring Classic"));
    assert_eq!(golfer.shot_count, 0);

    let mut details = golfer_details("Alice", "Anders-Smith", None);
    details.skill_level = SkillLevel::Advanced;
    details.email = Some("  ".into());
    let updated = app.client.update_golfer(&golfer.golfer_id, &details).await?;
    // a blank code keeps the existing one
    assert_eq!(updated.golfer_code.as_deref(), Some("AAND0000"));
    assert_eq!(updated.last_name, "Anders-Smith");
    assert_eq!(updated.skill_level, SkillLevel::Advanced);
    assert_eq!(updated.email, None);
    assert_eq!(updated.group_name, None);

    app.client.delete_golfer(&golfer.golfer_id).await?;
    assert_error_contains(
        app.client.get_golfer(&golfer.golfer_id).await,
        StatusCode::NOT_FOUND,
        "Golfer not found",
    );

    Ok(())
}

#[tokio::test]
async fn golfer_codes_are_unique() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let first = app.create_test_golfer("Alice", "Anders", None).await?;
    let second = app.create_test_golfer("Alan", "Andrews", None).await?;
    assert_eq!(first.golfer_code.as_deref(), Some("AAND0000"));
    assert_eq!(second.golfer_code.as_deref(), Some("AAND0001"));

    let mut details = golfer_details("Cara", "Cole", None);
    details.golfer_code = Some("aand0000".into());
    assert_error_contains(
        app.client.create_golfer(&details).await,
        StatusCode::BAD_REQUEST,
        "A golfer with the ID 'AAND0000' already exists",
    );

    details.golfer_code = Some("CUSTOM1".into());
    let custom = app.client.create_golfer(&details).await?;
    assert_eq!(custom.golfer_code.as_deref(), Some("CUSTOM1"));

    Ok(())
}

#[tokio::test]
async fn invalid_golfers_are_rejected() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let mut details = golfer_details("Alice", "Anders", None);
    details.email = Some("not-an-email".into());
    assert_error_contains(
        app.client.create_golfer(&details).await,
        StatusCode::BAD_REQUEST,
        "Please enter a valid email address",
    );

    let mut details = golfer_details("Alice", "Anders", None);
    details.handicap = Some(dec!(54.1));
    assert_error_contains(
        app.client.create_golfer(&details).await,
        StatusCode::BAD_REQUEST,
        "Handicap must be between -10 and 54",
    );

    let mut details = golfer_details("Alice", "", None);
    details.date_of_birth = Some(date(2030, 1, 1));
    assert_error_contains(
        app.client.create_golfer(&details).await,
        StatusCode::BAD_REQUEST,
        "Date of birth cannot be in the future",
    );
    assert_error_contains(
        app.client.create_golfer(&details).await,
        StatusCode::BAD_REQUEST,
        "Last name is required",
    );

    Ok(())
}

#[tokio::test]
async fn full_groups_reject_new_golfers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut details = group_details(None);
    details.max_golfers = 1;
    let group = app.client.create_group(&details).await?;
    let alice = app
        .create_test_golfer("Alice", "Anders", Some(group.group_id))
        .await?;

    assert_error_contains(
        app.client
            .create_golfer(&golfer_details("Bob", "Barker", Some(group.group_id)))
            .await,
        StatusCode::BAD_REQUEST,
        "Group 1 is full",
    );

    // updating a golfer already in the full group is fine
    let mut details = golfer_details("Alice", "Anders", Some(group.group_id));
    details.notes = Some("Left-handed".into());
    app.client.update_golfer(&alice.golfer_id, &details).await?;

    let bob = app.create_test_golfer("Bob", "Barker", None).await?;
    assert_error_contains(
        app.client
            .update_golfer(
                &bob.golfer_id,
                &golfer_details("Bob", "Barker", Some(group.group_id)),
            )
            .await,
        StatusCode::BAD_REQUEST,
        "Group 1 is full",
    );

    Ok(())
}

#[tokio::test]
async fn filter_golfers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let mut details = golfer_details("Cara", "Cole", None);
    details.skill_level = SkillLevel::Beginner;
    details.is_active = false;
    app.client.create_golfer(&details).await?;

    let in_tournament = app
        .client
        .list_golfers(&GolferFilter {
            tournament_id: Some(populated.tournament.tournament_id),
            ..Default::default()
        })
        .await?;
    let names: Vec<_> =
        in_tournament.iter().map(|g| g.full_name.as_str()).collect();
    assert_eq!(names, vec!["Alice Anders", "Bob Barker"]);

    let beginners = app
        .client
        .list_golfers(&GolferFilter {
            skill_level: Some(SkillLevel::Beginner),
            ..Default::default()
        })
        .await?;
    assert_eq!(beginners.len(), 1);
    assert_eq!(beginners[0].full_name, "Cara Cole");

    let inactive = app
        .client
        .list_golfers(&GolferFilter {
            is_active: Some(false),
            ..Default::default()
        })
        .await?;
    assert_eq!(inactive.len(), 1);

    for search in ["barker", "bob b", "BBAR", "bob.barker@"] {
        let found = app
            .client
            .list_golfers(&GolferFilter {
                search: Some(search.into()),
                ..Default::default()
            })
            .await?;
        assert_eq!(found.len(), 1, "searching for {search:?}");
        assert_eq!(found[0].full_name, "Bob Barker");
    }

    let with_shots = app
        .client
        .get_golfer(&populated.golfers[0].golfer_id)
        .await?;
    assert_eq!(with_shots.shot_count, 1);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_golfers() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let populated = app.create_populated_tournament().await?;
    let [alice, bob] = &populated.golfers[..] else {
        panic!("expected two golfers");
    };

    let result = app
        .client
        .bulk_delete_golfers(&BulkDelete {
            ids: vec![alice.golfer_id],
            delete_children: false,
        })
        .await?;
    assert_eq!(result.message, "Deleted 1 golfer");
    let orphan = app.client.get_shot(&populated.shots[0].shot_id).await?;
    assert_eq!(orphan.golfer_id, None);
    assert_eq!(orphan.golfer_name, None);

    let result = app
        .client
        .bulk_delete_golfers(&BulkDelete {
            ids: vec![bob.golfer_id],
            delete_children: true,
        })
        .await?;
    assert_eq!(result.message, "Deleted 1 golfer and their related data");
    // only the orphaned shot from the first delete remains
    assert_eq!(app.count_rows("shots").await?, 1);
    assert_eq!(app.count_rows("golfers").await?, 0);

    Ok(())
}
