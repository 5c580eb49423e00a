use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use smsdispatch::config::AppConfig;
use smsdispatch::services::dispatch::SmsDispatcher;
use smsdispatch::services::messaging::twilio::TwilioSmsProvider;
use smsdispatch::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let credentials = config.twilio_credentials()?;

    tracing::info!(
        api_base = %config.twilio_api_base,
        from = %credentials.from_number,
        "using Twilio messaging provider"
    );
    let messaging = TwilioSmsProvider::new(&credentials, config.twilio_api_base.clone());
    let dispatcher = SmsDispatcher::new(Box::new(messaging), credentials.from_number.clone());

    let state = Arc::new(AppState { dispatcher });

    let app = smsdispatch::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
