//! Development server for golf console UI work
//!
//! Starts a persistent API server on a fresh database filled with a realistic
//! dataset. The records are created with mocked time, which is then kept in
//! step with real time so new records get sensible timestamps.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use std::time::Duration;
use test_helpers::mock::DevDataset;
use tokio::time::interval;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting golf console development server");
    let app = test_helpers::spawn_app_on_port(8000).await;
    app.time_source.set(Timestamp::now());

    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    start_time_sync_task(&app);

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    dataset.print_summary();
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}

/// Keep the mocked clock following real time.
fn start_time_sync_task(app: &test_helpers::TestApp) {
    let time_source = app.time_source.clone();

    tokio::spawn(async move {
        let mut interval = interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            time_source.set(Timestamp::now());
        }
    });
}
