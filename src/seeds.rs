//! Built-in reference tables.
//!
//! Guarantees the service is useful without REFERENCE_DATA_DIR. Kept small; the
//! on-disk tables carry the full country list.

use std::collections::HashMap;

use crate::reference::{Country, EntityOption, PeopleNames, ReferenceData, UsData};

fn country(
  name: &str,
  per_se: (&str, &str),
  language: &str,
  limited: Vec<EntityOption>,
  unlimited: Vec<EntityOption>,
) -> Country {
  Country {
    country_name: name.into(),
    per_se_corporation: per_se.0.into(),
    per_se_abbreviation: per_se.1.into(),
    language: language.into(),
    eligible_limited: limited,
    eligible_unlimited: unlimited,
  }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_countries() -> Vec<Country> {
  vec![
    country(
      "Germany",
      ("Aktiengesellschaft", "AG"),
      "German",
      vec![EntityOption::new("Gesellschaft mit beschränkter Haftung", "GmbH")],
      vec![
        EntityOption::new("Offene Handelsgesellschaft", "OHG"),
        EntityOption::new("Kommanditgesellschaft", "KG"),
      ],
    ),
    country(
      "France",
      ("Société Anonyme", "SA"),
      "French",
      vec![
        EntityOption::new("Société à Responsabilité Limitée", "SARL"),
        EntityOption::new("Société par Actions Simplifiée", "SAS"),
      ],
      vec![
        EntityOption::new("Société Civile Immobilière", "SCI"),
        EntityOption::new("Société Civile", "SC"),
        EntityOption::new("Société en Nom Collectif", "SNC"),
      ],
    ),
    country(
      "Mexico",
      ("Sociedad Anónima", "SA"),
      "Spanish",
      vec![EntityOption::new("Sociedad de Responsabilidad Limitada", "S. de R.L.")],
      vec![EntityOption::new("Sociedad en Nombre Colectivo", "SNC")],
    ),
    country(
      "Spain",
      ("Sociedad Anónima", "SA"),
      "Spanish",
      vec![EntityOption::new("Sociedad de Responsabilidad Limitada", "SL")],
      vec![EntityOption::new("Sociedad Comanditaria Simple", "S. en C.")],
    ),
    // No limited-liability eligible form.
    country(
      "Canada",
      ("Corporation", "Corp."),
      "English",
      vec![EntityOption::new("", "")],
      vec![
        EntityOption::new("Unlimited Liability Company", "ULC"),
        EntityOption::new("General Partnership", "GP"),
      ],
    ),
    country(
      "United Kingdom",
      ("Public Limited Company", "PLC"),
      "English",
      vec![
        EntityOption::new("Private Limited Company", "Ltd"),
        EntityOption::new("Limited Liability Partnership", "LLP"),
      ],
      vec![EntityOption::new("Limited Partnership", "LP")],
    ),
    country(
      "Japan",
      ("Kabushiki Kaisha", "KK"),
      "Japanese",
      vec![EntityOption::new("Godo Kaisha", "GK")],
      vec![EntityOption::new("Gomei Kaisha", "GMK")],
    ),
    // No per se corporation form.
    country(
      "British Virgin Islands",
      ("", ""),
      "English",
      vec![EntityOption::new("BVI Business Company", "Ltd.")],
      vec![],
    ),
  ]
}

pub fn builtin_us_data() -> UsData {
  UsData {
    per_se_corporation: "corporation".into(),
    per_se_abbreviations: strings(&["Inc.", "Corp.", "Incorporated"]),
    eligible_limited: vec![
      EntityOption::new("limited liability company", "LLC"),
      EntityOption::new("limited liability partnership", "LLP"),
    ],
    eligible_unlimited: vec![
      EntityOption::new("general partnership", "GP"),
      EntityOption::new("limited partnership", "LP"),
    ],
  }
}

pub fn builtin_states() -> Vec<String> {
  strings(&[
    "Delaware", "New York", "California", "Texas", "Illinois", "Florida", "Nevada", "Ohio",
    "Washington", "Georgia", "Oregon", "Massachusetts",
  ])
}

pub fn builtin_animals() -> HashMap<String, Vec<String>> {
  HashMap::from([
    ("English".to_string(), strings(&["Tiger", "Badger", "Falcon", "Otter", "Heron", "Moose", "Bison"])),
    ("German".to_string(), strings(&["Fuchs", "Adler", "Wolf", "Dachs", "Luchs"])),
    ("French".to_string(), strings(&["Renard", "Aigle", "Loup", "Hibou", "Castor"])),
    ("Spanish".to_string(), strings(&["Jaguar", "Águila", "Lobo", "Tortuga", "Colibrí"])),
    ("Japanese".to_string(), strings(&["Kitsune", "Tanuki", "Tsuru", "Kame", "Saru"])),
  ])
}

pub fn builtin_people() -> PeopleNames {
  PeopleNames {
    female_names: strings(&["Alice", "Beatriz", "Chloe", "Dana", "Emiko", "Fatima", "Greta"]),
    male_names: strings(&["Aaron", "Bruno", "Carlos", "Dmitri", "Ethan", "Felix", "Hiroshi"]),
  }
}

pub fn builtin_reference_data() -> ReferenceData {
  ReferenceData {
    countries: builtin_countries(),
    us: builtin_us_data(),
    states: builtin_states(),
    animals_by_language: builtin_animals(),
    people: builtin_people(),
  }
}
