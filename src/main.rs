//! Check-the-Box · Entity Classification Practice
//!
//! - Axum HTML page + JSON API serving randomized multiple-choice questions on the
//!   U.S. check-the-box entity classification rules
//! - Built-in reference tables, or JSON tables from disk
//!
//! Important env variables:
//!   PORT                : u16 (default 3000)
//!   CTB_CONFIG_PATH     : path to TOML settings (answer styles, site URLs, sampling cap)
//!   REFERENCE_DATA_DIR  : directory with country_data.json, us_data.json, states.json,
//!                         animalsbycountry.json, names.json
//!   LOG_LEVEL           : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT          : "pretty" (default) or "json"

mod telemetry;
mod util;
mod error;
mod domain;
mod config;
mod reference;
mod seeds;
mod sampler;
mod question;
mod answer;
mod logic;
mod state;
mod protocol;
mod render;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Settings + validated reference data. Bad data stops startup.
  let state = match AppState::from_env() {
    Ok(s) => Arc::new(s),
    Err(e) => {
      error!(target: "check_the_box", error = %e, "Reference data is unusable; refusing to start");
      return Err(e.into());
    }
  };

  let app = build_router(state);

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "check_the_box", %addr, "HTTP server listening");
  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!(target: "check_the_box", error = %e, "Failed to listen for shutdown signal");
  }
  info!(target: "check_the_box", "Shutdown signal received");
}
