//! Loading service settings (answer styles, site URLs, sampling caps) from TOML.
//!
//! Every section is optional; missing keys fall back to `Default`.
//!
//! ```toml
//! [templates]
//! correct_style = "background-color: rgba(193, 254, 93, 0.5);"
//!
//! [site]
//! not_found_redirect = "https://example.com/resources"
//!
//! [sampling]
//! max_attempts = 500
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct Settings {
  #[serde(default)]
  pub templates: Templates,
  #[serde(default)]
  pub site: Site,
  #[serde(default)]
  pub sampling: Sampling,
}

/// Inline styles wrapped around every explanation paragraph.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Templates {
  pub correct_style: String,
  pub incorrect_style: String,
}

impl Default for Templates {
  fn default() -> Self {
    Self {
      correct_style: "background-color: rgba(193, 254, 93, 0.5);".into(),
      incorrect_style: "background-color: rgba(254, 113, 93, 0.5);".into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Site {
  pub canonical_url: String,
  /// Where unknown paths are sent.
  pub not_found_redirect: String,
}

impl Default for Site {
  fn default() -> Self {
    Self {
      canonical_url: "https://www.andrewmitchel.com/resources/practice/check_the_box".into(),
      not_found_redirect: "https://www.andrewmitchel.com/resources.php".into(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Sampling {
  /// Cap for every resampling loop. Reaching it means the reference data is broken.
  pub max_attempts: usize,
}

impl Default for Sampling {
  fn default() -> Self {
    Self { max_attempts: 1000 }
  }
}

/// Attempt to load `Settings` from CTB_CONFIG_PATH. On any IO/parsing error, returns None.
pub fn load_settings_from_env() -> Option<Settings> {
  let path = std::env::var("CTB_CONFIG_PATH").ok()?;
  load_settings_from_path(Path::new(&path))
}

pub fn load_settings_from_path(path: &Path) -> Option<Settings> {
  let shown = path.display();
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<Settings>(&s) {
      Ok(cfg) => {
        info!(target: "check_the_box", path = %shown, "Loaded settings (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "check_the_box", path = %shown, error = %e, "Failed to parse TOML settings");
        None
      }
    },
    Err(e) => {
      error!(target: "check_the_box", path = %shown, error = %e, "Failed to read TOML settings file");
      None
    }
  }
}
