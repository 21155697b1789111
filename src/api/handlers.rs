use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::Instrument;

use crate::{error::Error, normalize, prompt, AppState};

use super::models::{ErrorResponse, GenerationRequest, HealthResponse};

pub async fn generate_study_content(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(request) = payload.map_err(|rejection| Error::InvalidRequest {
        message: rejection.body_text(),
    })?;

    let span = tracing::info_span!(
        "generate_study_content",
        kind = request.kind.as_str(),
        num_questions = %request.num_questions(),
        title = request.title(),
        is_file = request.is_file,
    );

    async move {
        let system = prompt::system_prompt(request.kind, &request.num_questions());
        let user = prompt::user_prompt(&request);

        let content = state.chat.complete(&system, &user).await?;
        let parsed = normalize::parse_content(&content)?;

        tracing::info!("study content generated");
        Ok(Json(parsed))
    }
    .instrument(span)
    .await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
