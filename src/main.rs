use mentorhub_api::auth::{JwksCache, TokenVerifier};
use mentorhub_api::config::AppConfig;
use mentorhub_api::state::AppState;
use mentorhub_api::supabase::SupabaseClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SUPABASE_URL, AUTH0_DOMAIN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentorhub_api=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.debug {
        tracing::info!("debug mode enabled");
    }

    let supabase = SupabaseClient::new(&config.supabase_url, &config.supabase_key)?;
    let verifier = TokenVerifier::new(JwksCache::new(config.jwks_url()), config.issuer());

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(config, supabase, verifier);
    let app = mentorhub_api::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("mentorhub-api listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
