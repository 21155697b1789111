mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    http::{header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::AppState;

pub use handlers::{generate_study_content, health, not_found};
pub use models::{
    ErrorResponse, Flashcard, GenerationRequest, GenerationResult, HealthResponse,
    MultipleChoiceItem, OpenItem, StudyItem, StudySetType,
};

/// Headers the hosted function runtime lets browsers send.
const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type, \
    x-supabase-client-platform, x-supabase-client-platform-version, \
    x-supabase-client-runtime, x-supabase-client-runtime-version";

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(
            ALLOWED_HEADERS
                .split(", ")
                .map(HeaderName::from_static)
                .collect::<Vec<_>>(),
        )
}

/// `CorsLayer` only lists allowed headers on preflight; every other response gets the same list.
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/generate-study-content", post(generate_study_content))
        .route(
            "/functions/v1/generate-study-content",
            post(generate_study_content),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer())
        .layer(allow_headers_layer())
}
