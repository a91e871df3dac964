use payloads::{
    requests::{SessionFilter, ShotFilter, TournamentFilter},
    responses::{Session, ShotStatistics, Tournament},
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::get_api_client;
use crate::hooks::{use_fetch, use_title};
use crate::utils::format::{format_metric, pluralize};
use crate::utils::time::{format_date, format_timestamp};

const RECENT_COUNT: usize = 5;

#[derive(Clone, PartialEq)]
struct Overview {
    tournaments: Vec<Tournament>,
    sessions: Vec<Session>,
    statistics: ShotStatistics,
}

fn stat_card(label: &str, value: String) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-4 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <p class="text-xs uppercase tracking-wide text-neutral-500 dark:text-neutral-400">
                {label}
            </p>
            <p class="mt-1 text-2xl font-semibold text-neutral-900 dark:text-neutral-100">
                {value}
            </p>
        </div>
    }
}

fn panel(title: &str, route: Route, body: Html) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 p-6 rounded-lg shadow-md border border-neutral-200 dark:border-neutral-700">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                    {title}
                </h2>
                <Link<Route>
                    to={route}
                    classes="text-sm text-neutral-600 dark:text-neutral-400 hover:underline"
                >
                    {"View all"}
                </Link<Route>>
            </div>
            {body}
        </div>
    }
}

fn statistics_cards(stats: &ShotStatistics) -> Html {
    let smash = stats
        .best_smash_factor
        .map(|s| format!("{s:.2}"))
        .unwrap_or_else(|| "N/A".to_string());
    html! {
        <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
            {stat_card("Total Shots", stats.total_shots.to_string())}
            {stat_card("Avg Ball Speed", format_metric(stats.average_ball_speed, " mph"))}
            {stat_card("Avg Carry", format_metric(stats.average_carry_distance, " yds"))}
            {stat_card("Avg Total", format_metric(stats.average_total_distance, " yds"))}
            {stat_card("Longest", format_metric(stats.longest_total_distance, " yds"))}
            {stat_card("Best Smash", smash)}
        </div>
    }
}

fn shots_by_type(stats: &ShotStatistics) -> Html {
    if stats.shots_by_type.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No shots recorded yet"}</p>
        };
    }
    let total = stats.total_shots.max(1) as f64;
    html! {
        <ul class="space-y-3">
            {for stats.shots_by_type.iter().map(|row| {
                let width = format!("width: {:.0}%", row.count as f64 / total * 100.0);
                html! {
                    <li>
                        <div class="flex justify-between text-sm text-neutral-700 dark:text-neutral-300">
                            <span>{row.shot_type.to_string()}</span>
                            <span>{row.count}</span>
                        </div>
                        <div class="mt-1 h-2 rounded bg-neutral-100 dark:bg-neutral-700">
                            <div class="h-2 rounded bg-green-600" style={width}></div>
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}

fn recent_sessions(sessions: &[Session]) -> Html {
    if sessions.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No practice sessions yet"}</p>
        };
    }
    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {for sessions.iter().take(RECENT_COUNT).map(|session| html! {
                <li class="py-2 flex justify-between text-sm">
                    <span class="text-neutral-900 dark:text-neutral-100">
                        {&session.session_name}
                    </span>
                    <span class="text-neutral-500">
                        {match session.start_time {
                            Some(start) => format_timestamp(start),
                            None => pluralize(
                                usize::try_from(session.shot_count).unwrap_or(0),
                                "shot",
                                "shots",
                            ),
                        }}
                    </span>
                </li>
            })}
        </ul>
    }
}

fn active_tournaments(tournaments: &[Tournament]) -> Html {
    let active = tournaments
        .iter()
        .filter(|t| t.is_active)
        .take(RECENT_COUNT)
        .collect::<Vec<_>>();
    if active.is_empty() {
        return html! {
            <p class="text-sm text-neutral-500">{"No active tournaments"}</p>
        };
    }
    html! {
        <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
            {for active.into_iter().map(|t| html! {
                <li class="py-2 flex justify-between text-sm">
                    <span class="text-neutral-900 dark:text-neutral-100">{&t.name}</span>
                    <span class="text-neutral-500">
                        {format!(
                            "{} · {}",
                            format_date(t.start_date),
                            pluralize(usize::try_from(t.total_golfers).unwrap_or(0), "golfer", "golfers"),
                        )}
                    </span>
                </li>
            })}
        </ul>
    }
}

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");
    let overview = use_fetch((), || async {
        let client = get_api_client();
        let tournament_filter = TournamentFilter::default();
        let session_filter = SessionFilter::default();
        let shot_filter = ShotFilter::default();
        let (tournaments, sessions, statistics) = futures::join!(
            client.list_tournaments(&tournament_filter),
            client.list_sessions(&session_filter),
            client.shot_statistics(&shot_filter),
        );
        let to_string = |e: payloads::ClientError| e.to_string();
        Ok(Overview {
            tournaments: tournaments.map_err(to_string)?,
            sessions: sessions.map_err(to_string)?,
            statistics: statistics.map_err(to_string)?,
        })
    });

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Dashboard"}
                </h1>
                <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                    {"Launch monitor totals across every recorded shot."}
                </p>
            </div>
            {overview.render("dashboard", |overview, _, _| html! {
                <div class="space-y-8">
                    {statistics_cards(&overview.statistics)}
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        {panel("Shots by Type", Route::Shots, shots_by_type(&overview.statistics))}
                        {panel("Recent Sessions", Route::Sessions, recent_sessions(&overview.sessions))}
                        {panel("Active Tournaments", Route::Tournaments, active_tournaments(&overview.tournaments))}
                    </div>
                </div>
            })}
        </div>
    }
}
