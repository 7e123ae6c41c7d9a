//! Reference data store: jurisdictions, U.S. tables, and name pools.
//!
//! Loaded once at startup, either from the built-in seeds or from a directory of JSON
//! files (REFERENCE_DATA_DIR), then validated so that every category the sampler draws
//! from is non-empty somewhere. Field names follow the JSON files on disk.

use std::{
  collections::HashMap,
  fs,
  path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};
use tracing::{info, instrument};

use crate::domain::EntityType;
use crate::error::DataError;

/// Language whose name pool is used for U.S. entities.
pub const US_LANGUAGE: &str = "English";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EntityOption {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub abbreviation: String,
}

impl EntityOption {
  pub fn new(name: &str, abbreviation: &str) -> Self {
    Self { name: name.into(), abbreviation: abbreviation.into() }
  }

  pub fn is_usable(&self) -> bool {
    !self.name.is_empty()
  }

  pub fn to_entity_type(&self) -> EntityType {
    EntityType { long_form: self.name.clone(), short_form: self.abbreviation.clone() }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Country {
  pub country_name: String,
  /// Empty when the country has no per se corporation form (e.g. BVI).
  #[serde(rename = "per se corporation", default)]
  pub per_se_corporation: String,
  #[serde(rename = "per se corporation abbreviation", default)]
  pub per_se_abbreviation: String,
  pub language: String,
  #[serde(rename = "eligible with limited liability", default)]
  pub eligible_limited: Vec<EntityOption>,
  #[serde(rename = "eligible with unlimited liability", default)]
  pub eligible_unlimited: Vec<EntityOption>,
}

impl Country {
  pub fn has_per_se(&self) -> bool {
    !self.per_se_corporation.is_empty()
  }

  pub fn per_se_type(&self) -> EntityType {
    EntityType {
      long_form: self.per_se_corporation.clone(),
      short_form: self.per_se_abbreviation.clone(),
    }
  }

  pub fn eligible(&self, limited: bool) -> &[EntityOption] {
    if limited { &self.eligible_limited } else { &self.eligible_unlimited }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UsData {
  #[serde(rename = "per se corporation")]
  pub per_se_corporation: String,
  #[serde(rename = "per se corporation abbreviations")]
  pub per_se_abbreviations: Vec<String>,
  #[serde(rename = "eligible with limited liability")]
  pub eligible_limited: Vec<EntityOption>,
  #[serde(rename = "eligible with unlimited liability")]
  pub eligible_unlimited: Vec<EntityOption>,
}

impl UsData {
  pub fn eligible(&self, limited: bool) -> &[EntityOption] {
    if limited { &self.eligible_limited } else { &self.eligible_unlimited }
  }
}

/// First names used for the two example owners.
#[derive(Clone, Debug, Deserialize)]
pub struct PeopleNames {
  pub female_names: Vec<String>,
  pub male_names: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ReferenceData {
  pub countries: Vec<Country>,
  pub us: UsData,
  pub states: Vec<String>,
  /// Entity display names (animals) keyed by language.
  pub animals_by_language: HashMap<String, Vec<String>>,
  pub people: PeopleNames,
}

impl ReferenceData {
  /// Read the five JSON files from `dir`.
  #[instrument(level = "info", skip_all, fields(dir = %dir.display()))]
  pub fn load_dir(dir: &Path) -> Result<Self, DataError> {
    let data = Self {
      countries: read_json(&dir.join("country_data.json"))?,
      us: read_json(&dir.join("us_data.json"))?,
      states: read_json(&dir.join("states.json"))?,
      animals_by_language: read_json(&dir.join("animalsbycountry.json"))?,
      people: read_json(&dir.join("names.json"))?,
    };
    info!(target: "check_the_box", dir = %dir.display(), "Loaded reference data from disk");
    Ok(data)
  }

  /// Check every category the sampler can land in. A failure here would otherwise show
  /// up as resampling that never succeeds.
  pub fn validate(&self) -> Result<(), DataError> {
    if !self.countries.iter().any(Country::has_per_se) {
      return Err(DataError::EmptyCategory("foreign per se corporation"));
    }
    if !self.countries.iter().any(|c| c.eligible_limited.iter().any(EntityOption::is_usable)) {
      return Err(DataError::EmptyCategory("foreign eligible entity with limited liability"));
    }
    if !self.countries.iter().any(|c| c.eligible_unlimited.iter().any(EntityOption::is_usable)) {
      return Err(DataError::EmptyCategory("foreign eligible entity with unlimited liability"));
    }
    if self.us.per_se_corporation.is_empty() || self.us.per_se_abbreviations.is_empty() {
      return Err(DataError::EmptyCategory("U.S. per se corporation"));
    }
    if !self.us.eligible_limited.iter().all(EntityOption::is_usable) || self.us.eligible_limited.is_empty() {
      return Err(DataError::EmptyCategory("U.S. eligible entity with limited liability"));
    }
    if !self.us.eligible_unlimited.iter().all(EntityOption::is_usable) || self.us.eligible_unlimited.is_empty() {
      return Err(DataError::EmptyCategory("U.S. eligible entity with unlimited liability"));
    }
    if self.states.is_empty() {
      return Err(DataError::EmptyCategory("U.S. states"));
    }
    if self.people.female_names.is_empty() {
      return Err(DataError::EmptyCategory("female names"));
    }
    if self.people.male_names.is_empty() {
      return Err(DataError::EmptyCategory("male names"));
    }

    let us = std::iter::once((US_LANGUAGE, "United States"));
    let abroad = self.countries.iter().map(|c| (c.language.as_str(), c.country_name.as_str()));
    for (language, jurisdiction) in us.chain(abroad) {
      let has_pool = self.animals_by_language.get(language).is_some_and(|pool| !pool.is_empty());
      if !has_pool {
        return Err(DataError::MissingNamePool {
          language: language.to_string(),
          jurisdiction: jurisdiction.to_string(),
        });
      }
    }
    Ok(())
  }

  /// Startup inventory, one line per category.
  pub fn log_inventory(&self) {
    let per_se = self.countries.iter().filter(|c| c.has_per_se()).count();
    let limited = self.countries.iter().filter(|c| c.eligible_limited.iter().any(EntityOption::is_usable)).count();
    let unlimited = self.countries.iter().filter(|c| c.eligible_unlimited.iter().any(EntityOption::is_usable)).count();
    info!(
      target: "check_the_box",
      countries = self.countries.len(),
      with_per_se = per_se,
      with_eligible_limited = limited,
      with_eligible_unlimited = unlimited,
      states = self.states.len(),
      languages = self.animals_by_language.len(),
      "Reference data inventory"
    );
  }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
  let raw = fs::read_to_string(path).map_err(|source| DataError::Io { path: PathBuf::from(path), source })?;
  serde_json::from_str(&raw).map_err(|source| DataError::Parse { path: PathBuf::from(path), source })
}
