//! Entity sampler: draws an internally consistent profile, resolves it against the
//! reference data, and assembles a `BusinessEntity`.
//!
//! Each step returns a new value; nothing is patched in place. Every loop that
//! resamples is capped and fails with `GenerationError::RetriesExhausted`.

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument};

use crate::domain::{BusinessEntity, EntityType, Placement, Profile};
use crate::error::GenerationError;
use crate::reference::{ReferenceData, US_LANGUAGE};

/// Sample a complete entity.
#[instrument(level = "debug", skip(rng, data))]
pub fn sample<R: Rng + ?Sized>(
  rng: &mut R,
  data: &ReferenceData,
  max_attempts: usize,
) -> Result<BusinessEntity, GenerationError> {
  let drawn = draw_profile(rng, max_attempts)?;
  let placement = place(rng, data, &drawn, max_attempts)?;
  let profile = drawn.reconcile(&placement.entity_type);
  let name = pick_name(rng, data, &placement.language)?;

  if profile != drawn {
    debug!(target: "practice", suffix = %placement.entity_type.short_form, "Forced multi-member for entity type");
  }
  Ok(BusinessEntity::assemble(profile, placement, name))
}

/// Draw the five classification booleans.
///
/// Per se corporations always have limited liability; their member count and question
/// kind are drawn but never change the answer.
pub fn draw_profile<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> Result<Profile, GenerationError> {
  if rng.gen::<bool>() {
    return Ok(Profile {
      foreign: rng.gen(),
      per_se: true,
      all_members_limited_liability: true,
      single_member: rng.gen(),
      default_question: rng.gen(),
    });
  }

  retry(rng, "eligible entity profile", max_attempts, |rng| {
    let p = Profile {
      foreign: rng.gen(),
      per_se: false,
      all_members_limited_liability: rng.gen(),
      single_member: rng.gen(),
      default_question: rng.gen(),
    };
    (!p.is_suppressed()).then_some(p)
  })
}

/// Resolve jurisdiction, language and entity type for a profile.
pub fn place<R: Rng + ?Sized>(
  rng: &mut R,
  data: &ReferenceData,
  profile: &Profile,
  max_attempts: usize,
) -> Result<Placement, GenerationError> {
  let limited = profile.all_members_limited_liability;

  match (profile.per_se, profile.foreign) {
    // Some countries (e.g. BVI) have no per se form.
    (true, true) => retry(rng, "foreign per se corporation", max_attempts, |rng| {
      let c = data.countries.choose(rng)?;
      c.has_per_se().then(|| Placement {
        jurisdiction: c.country_name.clone(),
        language: c.language.clone(),
        entity_type: c.per_se_type(),
      })
    }),

    (true, false) => {
      let state = choose(rng, &data.states, "U.S. states")?;
      let suffix = choose(rng, &data.us.per_se_abbreviations, "U.S. per se corporation abbreviations")?;
      Ok(Placement {
        jurisdiction: state.clone(),
        language: US_LANGUAGE.to_string(),
        entity_type: EntityType {
          long_form: data.us.per_se_corporation.clone(),
          short_form: suffix.clone(),
        },
      })
    }

    (false, true) => {
      let category = if limited {
        "foreign eligible entity with limited liability"
      } else {
        "foreign eligible entity with unlimited liability"
      };
      retry(rng, category, max_attempts, |rng| {
        let c = data.countries.choose(rng)?;
        let option = c.eligible(limited).choose(rng)?;
        option.is_usable().then(|| Placement {
          jurisdiction: c.country_name.clone(),
          language: c.language.clone(),
          entity_type: option.to_entity_type(),
        })
      })
    }

    (false, false) => {
      let category = if limited {
        "U.S. eligible entity with limited liability"
      } else {
        "U.S. eligible entity with unlimited liability"
      };
      let state = choose(rng, &data.states, "U.S. states")?;
      let option = choose(rng, data.us.eligible(limited), category)?;
      Ok(Placement {
        jurisdiction: state.clone(),
        language: US_LANGUAGE.to_string(),
        entity_type: option.to_entity_type(),
      })
    }
  }
}

/// Draw the entity's display name from the pool for `language`.
pub fn pick_name<R: Rng + ?Sized>(rng: &mut R, data: &ReferenceData, language: &str) -> Result<String, GenerationError> {
  data
    .animals_by_language
    .get(language)
    .and_then(|pool| pool.choose(rng))
    .cloned()
    .ok_or_else(|| GenerationError::EmptyNamePool { language: language.to_string() })
}

pub(crate) fn choose<'a, R: Rng + ?Sized, T>(
  rng: &mut R,
  items: &'a [T],
  category: &'static str,
) -> Result<&'a T, GenerationError> {
  items.choose(rng).ok_or(GenerationError::EmptyPool(category))
}

fn retry<R, T, F>(rng: &mut R, category: &'static str, max_attempts: usize, mut attempt: F) -> Result<T, GenerationError>
where
  R: Rng + ?Sized,
  F: FnMut(&mut R) -> Option<T>,
{
  for _ in 0..max_attempts {
    if let Some(found) = attempt(rng) {
      return Ok(found);
    }
  }
  Err(GenerationError::RetriesExhausted { category, attempts: max_attempts })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{MULTI_MEMBER_ONLY_SUFFIXES, SINGLE_MEMBER_UNLIMITED_SUFFIXES};
  use crate::reference::EntityOption;
  use crate::seeds::builtin_reference_data;
  use proptest::arbitrary::any;
  use proptest::{prop_assert, prop_assert_eq, prop_assert_ne, proptest};
  use rand::{rngs::StdRng, SeedableRng};

  const SAMPLES: u64 = 4000;

  fn entities() -> Vec<BusinessEntity> {
    let data = builtin_reference_data();
    (0..SAMPLES)
      .map(|seed| sample(&mut StdRng::seed_from_u64(seed), &data, 1000).unwrap())
      .collect()
  }

  fn eligible_profile(foreign: bool, limited: bool, single: bool) -> Profile {
    Profile {
      foreign,
      per_se: false,
      all_members_limited_liability: limited,
      single_member: single,
      default_question: true,
    }
  }

  // ---------------------------------------------------------------
  // Invariants over arbitrary seeds
  // ---------------------------------------------------------------

  proptest! {
    #[test]
    fn per_se_entities_always_have_limited_liability(seed in any::<u64>()) {
      let e = sample(&mut StdRng::seed_from_u64(seed), &builtin_reference_data(), 1000).unwrap();
      if e.per_se {
        prop_assert!(e.all_members_limited_liability, "{:?}", e);
      }
    }

    #[test]
    fn partnership_suffixes_are_never_single_member(seed in any::<u64>()) {
      let e = sample(&mut StdRng::seed_from_u64(seed), &builtin_reference_data(), 1000).unwrap();
      if MULTI_MEMBER_ONLY_SUFFIXES.contains(&e.type_short_form.as_str()) {
        prop_assert!(!e.single_member, "{:?}", e);
      }
    }

    #[test]
    fn suppressed_profile_is_never_sampled(seed in any::<u64>()) {
      let e = sample(&mut StdRng::seed_from_u64(seed), &builtin_reference_data(), 1000).unwrap();
      prop_assert!(!e.profile().is_suppressed(), "{:?}", e);
    }

    #[test]
    fn foreign_unlimited_single_member_only_for_capable_forms(seed in any::<u64>()) {
      let e = sample(&mut StdRng::seed_from_u64(seed), &builtin_reference_data(), 1000).unwrap();
      if !e.per_se && e.foreign && !e.all_members_limited_liability && e.single_member {
        prop_assert!(SINGLE_MEMBER_UNLIMITED_SUFFIXES.contains(&e.type_short_form.as_str()), "{:?}", e);
      }
    }

    #[test]
    fn placement_matches_reference_tables(seed in any::<u64>()) {
      let data = builtin_reference_data();
      let e = sample(&mut StdRng::seed_from_u64(seed), &data, 1000).unwrap();
      prop_assert!(data.animals_by_language[&e.language].contains(&e.name), "{:?}", e);
      prop_assert!(!e.type_long_form.is_empty(), "{:?}", e);
      if e.foreign {
        prop_assert!(data.countries.iter().any(|c| c.country_name == e.jurisdiction), "{:?}", e);
      } else {
        prop_assert!(data.states.contains(&e.jurisdiction), "{:?}", e);
        prop_assert_eq!(e.language.as_str(), US_LANGUAGE);
      }
      if e.per_se && e.foreign {
        prop_assert_ne!(e.jurisdiction.as_str(), "British Virgin Islands");
      }
    }

    #[test]
    fn same_seed_same_entity(seed in any::<u64>()) {
      let data = builtin_reference_data();
      let a = sample(&mut StdRng::seed_from_u64(seed), &data, 1000).unwrap();
      let b = sample(&mut StdRng::seed_from_u64(seed), &data, 1000).unwrap();
      prop_assert_eq!(a, b);
    }
  }

  #[test]
  fn every_attribute_branch_is_reached() {
    let all = entities();
    assert!(all.iter().any(|e| e.per_se && e.foreign));
    assert!(all.iter().any(|e| e.per_se && !e.foreign));
    assert!(all.iter().any(|e| !e.per_se && e.foreign && e.all_members_limited_liability && e.single_member));
    assert!(all.iter().any(|e| !e.per_se && e.foreign && !e.all_members_limited_liability && e.single_member));
    assert!(all.iter().any(|e| !e.per_se && e.foreign && !e.all_members_limited_liability && !e.single_member));
    assert!(all.iter().any(|e| !e.per_se && !e.foreign && e.all_members_limited_liability && e.single_member));
    assert!(all.iter().any(|e| !e.per_se && !e.foreign && !e.all_members_limited_liability));
    assert!(all.iter().any(|e| e.default_question));
    assert!(all.iter().any(|e| !e.default_question));
  }

  // ---------------------------------------------------------------
  // Single steps
  // ---------------------------------------------------------------

  #[test]
  fn us_unlimited_path_never_yields_single_member_gp_or_lp() {
    // The profile filter already drops this tuple; reconcile must hold on its own too.
    let data = builtin_reference_data();
    let drawn = eligible_profile(false, false, true);
    for seed in 0..200 {
      let placement = place(&mut StdRng::seed_from_u64(seed), &data, &drawn, 10).unwrap();
      assert!(["GP", "LP"].contains(&placement.entity_type.short_form.as_str()));
      assert!(!drawn.reconcile(&placement.entity_type).single_member);
    }
  }

  #[test]
  fn domestic_per_se_uses_us_tables() {
    let data = builtin_reference_data();
    let p = Profile { per_se: true, ..eligible_profile(false, true, false) };
    let placement = place(&mut StdRng::seed_from_u64(7), &data, &p, 10).unwrap();
    assert_eq!(placement.entity_type.long_form, "corporation");
    assert!(data.us.per_se_abbreviations.contains(&placement.entity_type.short_form));
  }

  #[test]
  fn foreign_limited_skips_placeholder_options() {
    let data = builtin_reference_data();
    let p = eligible_profile(true, true, true);
    for seed in 0..300 {
      let placement = place(&mut StdRng::seed_from_u64(seed), &data, &p, 1000).unwrap();
      assert!(!placement.entity_type.long_form.is_empty());
      assert_ne!(placement.jurisdiction, "Canada");
    }
  }

  #[test]
  fn exhausted_retries_fail_with_category() {
    let mut data = builtin_reference_data();
    for c in &mut data.countries {
      c.per_se_corporation.clear();
    }
    let p = Profile { per_se: true, ..eligible_profile(true, true, false) };
    let err = place(&mut StdRng::seed_from_u64(1), &data, &p, 25).unwrap_err();
    assert_eq!(
      err,
      GenerationError::RetriesExhausted { category: "foreign per se corporation", attempts: 25 }
    );
  }

  #[test]
  fn empty_us_list_is_an_empty_pool_error() {
    let mut data = builtin_reference_data();
    data.us.eligible_unlimited = Vec::<EntityOption>::new();
    let p = eligible_profile(false, false, false);
    let err = place(&mut StdRng::seed_from_u64(1), &data, &p, 25).unwrap_err();
    assert_eq!(err, GenerationError::EmptyPool("U.S. eligible entity with unlimited liability"));
  }

  #[test]
  fn unknown_language_is_an_empty_name_pool() {
    let data = builtin_reference_data();
    let err = pick_name(&mut StdRng::seed_from_u64(1), &data, "Klingon").unwrap_err();
    assert_eq!(err, GenerationError::EmptyNamePool { language: "Klingon".into() });
  }

  #[test]
  fn zero_attempts_fails_eligible_profile_draw() {
    // First coin flip must land on "eligible".
    let seed = (0..100u64)
      .find(|s| !StdRng::seed_from_u64(*s).gen::<bool>())
      .unwrap();
    let err = draw_profile(&mut StdRng::seed_from_u64(seed), 0).unwrap_err();
    assert_eq!(err, GenerationError::RetriesExhausted { category: "eligible entity profile", attempts: 0 });
  }
}
