//! Development server for library console UI development
//!
//! Serves the mock book, loan and recommendation services with a seeded
//! catalogue, so the UI can be run against something realistic without the
//! real backend.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use payloads::ApiConfig;
use test_helpers::backend::MockConfig;
use test_helpers::mock::DevDataset;
use test_helpers::telemetry;
use tracing::info;

/// The console's default base URL points here.
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting library development server");
    let app = test_helpers::spawn_app_with(MockConfig::local(port)).await;
    info!("✅ Mock services running on {}", app.base_url());

    info!("📊 Setting up development data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: {}", app.base_url());
    info!(
        "   UI:  cd ui && LIBRARY_API_BASE_URL={} trunk serve",
        app.base_url()
    );
    info!(
        "   Current LIBRARY_API_BASE_URL: {}",
        ApiConfig::from_env().base_url()
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
