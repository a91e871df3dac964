//! Mock golf data for the development server
//!
//! The dataset is meant to make every console screen worth looking at:
//! - Two tournaments, one active and one finished
//! - Named and numbered groups, one of them full
//! - Assigned and unassigned golfers across skill levels
//! - Tournament shots with launch-monitor data, plus a practice session

use crate::TestApp;
use anyhow::Result;
use jiff::{Span, civil::date};
use payloads::{
    Gender, GolferId, GroupId, ShotType, SkillLevel, TournamentId, responses,
};
use rust_decimal::Decimal;

pub struct DevDataset {
    pub spring_classic: responses::Tournament,
    pub autumn_open: responses::Tournament,
    pub groups: Vec<responses::Group>,
    pub golfers: Vec<responses::Golfer>,
    pub unassigned_golfers: Vec<responses::Golfer>,
    pub session: responses::Session,
    pub shot_count: usize,
}

impl DevDataset {
    pub async fn create(app: &TestApp) -> Result<Self> {
        tracing::info!("🏆 Creating tournaments");
        let spring_classic = app
            .client
            .create_tournament(&payloads::Tournament {
                name: "Spring Classic".into(),
                description: Some("Season opener, four rounds".into()),
                start_date: date(2025, 4, 10),
                end_date: date(2025, 4, 13),
                location: Some("Pebble Beach Golf Links".into()),
                is_active: true,
            })
            .await?;
        let autumn_open = app
            .client
            .create_tournament(&payloads::Tournament {
                name: "Autumn Open".into(),
                description: None,
                start_date: date(2024, 10, 2),
                end_date: date(2024, 10, 5),
                location: Some("Pinehurst No. 2".into()),
                is_active: false,
            })
            .await?;

        tracing::info!("👥 Creating groups");
        let mut groups = Vec::new();
        for (tournament_id, nickname, max_golfers) in [
            (spring_classic.tournament_id, Some("Early Birds"), 4),
            (spring_classic.tournament_id, None, 4),
            (spring_classic.tournament_id, Some("Pairs"), 2),
            (autumn_open.tournament_id, None, 4),
        ] {
            groups.push(create_group(app, tournament_id, nickname, max_golfers).await?);
        }

        tracing::info!("🏌️ Creating golfers");
        let roster = [
            ("Jordan", "Spieth", SkillLevel::Professional, Some(Gender::Male), "2.1"),
            ("Nelly", "Korda", SkillLevel::Professional, Some(Gender::Female), "0.5"),
            ("Sam", "Rivers", SkillLevel::Advanced, Some(Gender::Other), "8.4"),
            ("Priya", "Patel", SkillLevel::Intermediate, Some(Gender::Female), "15.2"),
            ("Marcus", "Lee", SkillLevel::Intermediate, None, "18.0"),
            ("Ana", "Souza", SkillLevel::Beginner, Some(Gender::Female), "32.7"),
            ("Tom", "Becker", SkillLevel::Advanced, Some(Gender::Male), "6.3"),
            ("Lena", "Fischer", SkillLevel::Beginner, None, "41.0"),
        ];
        // first two groups get three golfers each, "Pairs" gets two
        let placement = [0, 0, 0, 1, 1, 1, 2, 2];
        let mut golfers = Vec::new();
        for ((first, last, skill, gender, handicap), group) in
            roster.into_iter().zip(placement)
        {
            golfers.push(
                create_golfer(
                    app,
                    (first, last),
                    skill,
                    gender,
                    handicap,
                    Some(groups[group].group_id),
                )
                .await?,
            );
        }

        let mut unassigned_golfers = Vec::new();
        for (first, last) in [("Chris", "Walker"), ("Dana", "Kim")] {
            unassigned_golfers.push(
                create_golfer(
                    app,
                    (first, last),
                    SkillLevel::Intermediate,
                    None,
                    "20.0",
                    None,
                )
                .await?,
            );
        }

        tracing::info!("🎯 Recording shots");
        let mut shot_count = 0;
        for (i, golfer) in golfers.iter().enumerate() {
            for hole in 1..=3 {
                create_shot(app, golfer.golfer_id, hole, i).await?;
                shot_count += 1;
            }
        }

        tracing::info!("📈 Creating a practice session");
        let session = app
            .client
            .create_session(&payloads::Session {
                session_name: "Tuesday range session".into(),
                start_time: Some(app.time_source.now() - Span::new().hours(2)),
                end_time: Some(app.time_source.now() - Span::new().hours(1)),
                notes: Some("Simulator bay 3".into()),
            })
            .await?;
        for club in ["Driver", "7 Iron", "Sand Wedge"] {
            app.client
                .create_shot(&payloads::Shot {
                    golfer_id: Some(unassigned_golfers[0].golfer_id),
                    session_id: Some(session.session_id),
                    shot_type: ShotType::Other,
                    club_used: Some(club.into()),
                    ball_speed: Some(120.0),
                    club_head_speed: Some(85.0),
                    carry_distance: Some(160.0),
                    is_simulated: true,
                    launch_monitor_id: Some("SIM-03".into()),
                    ..Default::default()
                })
                .await?;
            shot_count += 1;
        }

        tracing::info!("✅ Development dataset created");
        Ok(DevDataset {
            spring_classic,
            autumn_open,
            groups,
            golfers,
            unassigned_golfers,
            session,
            shot_count,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!(
            "   🏆 {} ({}) and {} ({})",
            self.spring_classic.name,
            self.spring_classic.tournament_id,
            self.autumn_open.name,
            self.autumn_open.tournament_id
        );
        for group in &self.groups {
            tracing::info!(
                "   👥 {} in {}",
                group.display_name,
                group.tournament_name.as_deref().unwrap_or("no tournament")
            );
        }
        tracing::info!(
            "   🏌️ {} golfers in groups, {} unassigned",
            self.golfers.len(),
            self.unassigned_golfers.len()
        );
        tracing::info!(
            "   🎯 {} shots, including the {:?} session",
            self.shot_count,
            self.session.session_name
        );
    }
}

async fn create_group(
    app: &TestApp,
    tournament_id: TournamentId,
    nickname: Option<&str>,
    max_golfers: i32,
) -> Result<responses::Group> {
    Ok(app
        .client
        .create_group(&payloads::Group {
            tournament_id: Some(tournament_id),
            nickname: nickname.map(Into::into),
            max_golfers,
        })
        .await?)
}

async fn create_golfer(
    app: &TestApp,
    (first_name, last_name): (&str, &str),
    skill_level: SkillLevel,
    gender: Option<Gender>,
    handicap: &str,
    group_id: Option<GroupId>,
) -> Result<responses::Golfer> {
    let details = payloads::Golfer {
        skill_level,
        gender,
        handicap: Some(handicap.parse::<Decimal>()?),
        ..crate::golfer_details(first_name, last_name, group_id)
    };
    Ok(app.client.create_golfer(&details).await?)
}

/// A drive with numbers that vary a little per golfer and hole.
async fn create_shot(
    app: &TestApp,
    golfer_id: GolferId,
    hole_number: i32,
    golfer_index: usize,
) -> Result<responses::Shot> {
    let spread = (golfer_index * 3 + hole_number as usize) as f64;
    Ok(app
        .client
        .create_shot(&payloads::Shot {
            golfer_id: Some(golfer_id),
            hole_number: Some(hole_number),
            shot_type: ShotType::Drive,
            club_used: Some("Driver".into()),
            ball_speed: Some(140.0 + spread),
            club_head_speed: Some(95.0 + spread / 2.0),
            launch_angle: Some(11.0 + spread / 10.0),
            spin_rate: Some(2400.0 + spread * 20.0),
            carry_distance: Some(225.0 + spread * 2.0),
            total_distance: Some(250.0 + spread * 2.0),
            side_angle: Some(spread / 4.0 - 3.0),
            launch_monitor_id: Some("LM-01".into()),
            ..Default::default()
        })
        .await?)
}
