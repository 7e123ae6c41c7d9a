//! Application state: settings and validated reference data, built once at startup and
//! shared read-only by every request.

use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, instrument};

use crate::config::{load_settings_from_env, Settings};
use crate::error::{DataError, GenerationError};
use crate::logic::{generate_practice, PracticeQuestion};
use crate::reference::ReferenceData;
use crate::seeds::builtin_reference_data;

#[derive(Clone, Debug)]
pub struct AppState {
    pub settings: Settings,
    pub reference: ReferenceData,
}

impl AppState {
    /// Build state from env: load settings, load and validate reference data.
    ///
    /// Reference data that fails validation is fatal; the caller should not start serving.
    #[instrument(level = "info", skip_all)]
    pub fn from_env() -> Result<Self, DataError> {
        let settings = load_settings_from_env().unwrap_or_default();
        let data_dir = std::env::var("REFERENCE_DATA_DIR").ok().map(PathBuf::from);
        Self::load(settings, data_dir.as_deref())
    }

    /// Reference data comes from `data_dir` when given, otherwise the built-in tables.
    pub fn load(settings: Settings, data_dir: Option<&Path>) -> Result<Self, DataError> {
        let reference = match data_dir {
            Some(dir) => ReferenceData::load_dir(dir)?,
            None => {
                info!(target: "check_the_box", "REFERENCE_DATA_DIR not set. Using built-in reference data.");
                builtin_reference_data()
            }
        };

        Self::new(settings, reference)
    }

    pub fn new(settings: Settings, reference: ReferenceData) -> Result<Self, DataError> {
        reference.validate()?;
        reference.log_inventory();
        info!(target: "check_the_box", max_attempts = settings.sampling.max_attempts, "Sampling configured");
        Ok(Self { settings, reference })
    }

    /// Generate one question. A seed makes the content reproducible.
    pub fn practice(&self, seed: Option<u64>) -> Result<PracticeQuestion, GenerationError> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        generate_practice(&mut rng, &self.reference, &self.settings)
    }
}
