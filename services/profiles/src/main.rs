use tracing::{error, info};

use staffdesk_core::tracing::init_tracing;
use staffdesk_profiles::config::ProfilesConfig;
use staffdesk_profiles::router::build_router;
use staffdesk_profiles::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = match ProfilesConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let store = config
        .connect_store()
        .await
        .expect("failed to initialize profile store");
    info!(backend = store.name(), "profile store ready");

    let state = AppState::new(store);

    if config.listing_auto_refresh {
        let listing = state.listing.clone();
        tokio::spawn(async move {
            let state = listing.refresh().await;
            info!(count = state.profiles.len(), "initial listing loaded");
        });
    }

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.profiles_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("profiles service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
