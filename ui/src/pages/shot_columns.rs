//! Table columns shared by the Shots screen and the practice session view.

use list_view::{CellValue, Column};
use payloads::{ShotMetric, responses::Shot};
use yew::prelude::*;

use crate::components::{EditableCell, TableColumn};
use crate::hooks::ShotsHandle;
use crate::utils::format::{format_metric, or_dash};
use crate::utils::time::format_timestamp;

fn metric_label(metric: ShotMetric) -> &'static str {
    match metric {
        ShotMetric::BallSpeed => "Ball Speed",
        ShotMetric::ClubHeadSpeed => "Club Speed",
        ShotMetric::LaunchAngle => "Launch",
        ShotMetric::SpinRate => "Spin",
        ShotMetric::CarryDistance => "Carry",
        ShotMetric::TotalDistance => "Total",
        ShotMetric::SideAngle => "Side",
    }
}

fn metric_value(metric: ShotMetric) -> fn(&Shot) -> CellValue {
    match metric {
        ShotMetric::BallSpeed => |s: &Shot| s.ball_speed.into(),
        ShotMetric::ClubHeadSpeed => |s: &Shot| s.club_head_speed.into(),
        ShotMetric::LaunchAngle => |s: &Shot| s.launch_angle.into(),
        ShotMetric::SpinRate => |s: &Shot| s.spin_rate.into(),
        ShotMetric::CarryDistance => |s: &Shot| s.carry_distance.into(),
        ShotMetric::TotalDistance => |s: &Shot| s.total_distance.into(),
        ShotMetric::SideAngle => |s: &Shot| s.side_angle.into(),
    }
}

fn metric_column(metric: ShotMetric) -> Column<Shot> {
    Column::new(metric.column(), metric_label(metric), metric_value(metric))
}

/// Shot number, golfer, type and club.
fn leading_columns() -> Vec<TableColumn<Shot>> {
    vec![
        TableColumn::new(Column::new("shot_number", "#", |s: &Shot| {
            s.shot_number.into()
        })),
        TableColumn::new(Column::new("golfer", "Golfer", |s: &Shot| {
            s.golfer_name.as_deref().into()
        }))
        .render_with(|s: Shot| html! { {or_dash(s.golfer_name.as_deref())} }),
        TableColumn::new(Column::new("shot_type", "Type", |s: &Shot| {
            s.shot_type.to_string().into()
        })),
        TableColumn::new(Column::new("club", "Club", |s: &Shot| {
            s.club_used.as_deref().into()
        }))
        .render_with(|s: Shot| html! { {or_dash(s.club_used.as_deref())} }),
    ]
}

/// Smash factor and timestamp.
fn trailing_columns() -> Vec<TableColumn<Shot>> {
    vec![
        TableColumn::new(Column::new("smash_factor", "Smash", |s: &Shot| {
            s.smash_factor.into()
        }))
        .render_with(|s: Shot| match s.smash_factor {
            Some(smash) => html! { {format!("{smash:.2}")} },
            None => html! { {"N/A"} },
        }),
        TableColumn::new(
            Column::new("timestamp", "Time", |s: &Shot| {
                s.timestamp.map(|t| t.as_second()).into()
            })
            .unsearchable(),
        )
        .render_with(|s: Shot| {
            let time = s.timestamp.map(format_timestamp);
            html! {
                <span class="whitespace-nowrap">{or_dash(time.as_deref())}</span>
            }
        }),
    ]
}

/// Read-only columns for the Shots screen.
pub fn shot_columns() -> Vec<TableColumn<Shot>> {
    let metrics = ShotMetric::ALL.into_iter().map(|metric| {
        TableColumn::new(metric_column(metric)).render_with(move |s: Shot| {
            html! { {format_metric(s.metric(metric), metric.unit())} }
        })
    });
    leading_columns()
        .into_iter()
        .chain(metrics)
        .chain(trailing_columns())
        .collect()
}

/// Columns whose measurements can be edited in place.
pub fn editable_shot_columns(shots: &ShotsHandle) -> Vec<TableColumn<Shot>> {
    let metrics = ShotMetric::ALL.into_iter().map(|metric| {
        let update_metric = shots.update_metric.clone();
        TableColumn::new(metric_column(metric)).render_with(move |s: Shot| {
            let shot_id = s.shot_id;
            let on_save = update_metric.reform(move |value: f64| {
                (shot_id, metric, Some(value), Callback::noop())
            });
            html! {
                <EditableCell
                    value={s.metric(metric)}
                    suffix={metric.unit()}
                    {on_save}
                />
            }
        })
    });
    leading_columns()
        .into_iter()
        .chain(metrics)
        .chain(trailing_columns())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use list_view::ListState;
    use payloads::ShotId;
    use uuid::Uuid;

    fn shot(ball_speed: f64) -> Shot {
        Shot {
            shot_id: ShotId(Uuid::new_v4()),
            shot_details: payloads::Shot {
                ball_speed: Some(ball_speed),
                ..Default::default()
            },
            shot_number: 1,
            smash_factor: None,
            golfer_name: Some("Ana Ruiz".into()),
            group_name: None,
            tournament_name: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn metric_columns_are_keyed_by_database_column() {
        let keys: Vec<_> = ShotMetric::ALL
            .into_iter()
            .map(|metric| metric_column(metric).key)
            .collect();
        assert_eq!(keys.len(), 7);
        assert!(keys.contains(&"ball_speed"));
        assert!(keys.contains(&"side_angle"));
    }

    #[test]
    fn search_matches_measurements() {
        let rows = vec![shot(165.25), shot(98.5)];
        let columns: Vec<_> =
            shot_columns().into_iter().map(|c| c.column).collect();
        let mut state = ListState::default();
        state.set_query("165.25");
        let page = state.apply(&rows, &columns);
        assert_eq!(page.filtered_count, 1);
        assert_eq!(page.rows[0].ball_speed, Some(165.25));
    }
}
