use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::form::{FormOptions, ProfileFormDefaults, form_options, validate_profile_form};
use crate::error::ProfilesServiceError;
use crate::state::AppState;
use crate::usecase::profile::SubmitProfileUseCase;
use crate::view::listing::{ListingView, render_listing};
use crate::view::notification::Notification;

// ── GET /profiles/form ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct FormResponse {
    pub defaults: ProfileFormDefaults,
    pub options: FormOptions,
}

pub async fn get_form() -> Json<FormResponse> {
    Json(FormResponse {
        defaults: ProfileFormDefaults::for_date(chrono::Utc::now().date_naive()),
        options: form_options(),
    })
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SubmitResponse {
    pub notification: Notification,
    pub listing: ListingView,
}

pub async fn submit_profile(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitResponse>), ProfilesServiceError> {
    let Ok(Json(Value::Object(candidate))) = body else {
        return Err(ProfilesServiceError::MalformedForm);
    };
    let input = validate_profile_form(&candidate).map_err(|fields| {
        tracing::debug!(fields = fields.len(), "profile form rejected");
        ProfilesServiceError::Validation(fields)
    })?;

    let usecase = SubmitProfileUseCase {
        store: state.profile_store(),
    };
    usecase.execute(input).await?;

    // Only a successful insert refreshes the listing.
    let listing = state.listing.refresh_after_write().await;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            notification: Notification::submitted(),
            listing: render_listing(&listing),
        }),
    ))
}

// ── GET /profiles ────────────────────────────────────────────────────────────

pub async fn get_profiles(State(state): State<AppState>) -> Json<ListingView> {
    Json(render_listing(&state.listing.snapshot()))
}

// ── POST /profiles/refresh ───────────────────────────────────────────────────

pub async fn refresh_profiles(State(state): State<AppState>) -> Json<ListingView> {
    Json(render_listing(&state.listing.refresh().await))
}
