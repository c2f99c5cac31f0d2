use anyhow::Result;
use jobmate_ai::{start_web_server, ProviderConfig};
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("jobmate_ai=INFO,rocket::server=OFF")),
        )
        .init();

    let config = ProviderConfig::from_env();

    if config.api_key.is_none() {
        warn!("GROQ_API_KEY is not set; completion endpoints will fail until it is provided");
    }

    start_web_server(config).await
}
