//! Error types: reference-data problems (fatal at startup), generation failures
//! (only reachable with unvalidated data), and the HTTP-facing `AppError`.

use std::path::PathBuf;

use axum::{
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum DataError {
  #[error("failed to read reference file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse reference file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("reference category '{0}' is empty in every jurisdiction")]
  EmptyCategory(&'static str),

  #[error("no entity-name pool for language '{language}' (needed by {jurisdiction})")]
  MissingNamePool { language: String, jurisdiction: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
  #[error("gave up sampling '{category}' after {attempts} attempts")]
  RetriesExhausted { category: &'static str, attempts: usize },

  #[error("entity-name pool for language '{language}' is empty")]
  EmptyNamePool { language: String },

  #[error("reference pool '{0}' is empty")]
  EmptyPool(&'static str),
}

/// Request-level error. Details go to the log; the client gets a generic page.
#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Generation(#[from] GenerationError),
}

const ERROR_PAGE: &str = "<!doctype html><html><head><title>Something went wrong</title></head>\
<body><p>Sorry, a practice question could not be generated. Please try again later.</p></body></html>";

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    error!(target: "practice", error = %self, "Practice generation failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
  }
}
