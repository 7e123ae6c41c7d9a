//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs the question id and outcome.

use std::sync::Arc;
use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{Html, IntoResponse, Redirect, Response},
  Json,
};
use tracing::{error, info, instrument};

use crate::error::AppError;
use crate::protocol::*;
use crate::render::render_page;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state), fields(seed = ?q.seed))]
pub async fn http_get_practice_page(
  State(state): State<Arc<AppState>>,
  Query(q): Query<PracticeQuery>,
) -> Result<Html<String>, AppError> {
  let question = state.practice(q.seed)?;
  info!(target: "practice", id = %question.id, per_se = question.entity.per_se, foreign = question.entity.foreign, "HTML practice served");
  Ok(Html(render_page(&question, &state.settings.site.canonical_url)))
}

#[instrument(level = "info", skip(state), fields(seed = ?q.seed))]
pub async fn http_get_practice_json(
  State(state): State<Arc<AppState>>,
  Query(q): Query<PracticeQuery>,
) -> Response {
  match state.practice(q.seed) {
    Ok(question) => {
      info!(target: "practice", id = %question.id, per_se = question.entity.per_se, foreign = question.entity.foreign, "JSON practice served");
      Json(to_out(&question, &state.settings.site.canonical_url)).into_response()
    }
    Err(e) => {
      error!(target: "practice", error = %e, "Practice generation failed");
      (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorOut { error: "could not generate a practice question".into() })).into_response()
    }
  }
}

/// Unknown paths go to the resources page.
#[instrument(level = "debug", skip(state))]
pub async fn http_not_found(State(state): State<Arc<AppState>>) -> Redirect {
  Redirect::temporary(&state.settings.site.not_found_redirect)
}
