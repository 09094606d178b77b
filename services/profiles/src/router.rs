use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use staffdesk_core::health::health_routes;
use staffdesk_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::profile::{get_form, get_profiles, refresh_profiles, submit_profile};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .merge(health_routes::<AppState>())
        // Profiles
        .route("/profiles/form", get(get_form))
        .route("/profiles", get(get_profiles))
        .route("/profiles", post(submit_profile))
        .route("/profiles/refresh", post(refresh_profiles))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
