//! One practice question end to end: sample → compose → answer key, plus the two
//! example owners shown in the diagram. Shared by the HTML page and the JSON API.

use rand::Rng;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::answer::{build_answer_key, AnswerKey};
use crate::config::Settings;
use crate::domain::{BusinessEntity, FollowUp};
use crate::error::GenerationError;
use crate::question::compose;
use crate::reference::{PeopleNames, ReferenceData};
use crate::sampler::{choose, sample};

#[derive(Clone, Debug)]
pub struct PracticeQuestion {
  pub id: String,
  pub problem: String,
  pub follow_up: FollowUp,
  pub answer_key: AnswerKey,
  pub entity: BusinessEntity,
  pub people: (String, String),
}

/// Two example owners: one of each gender, order chosen at random.
pub fn example_people<R: Rng + ?Sized>(rng: &mut R, names: &PeopleNames) -> Result<(String, String), GenerationError> {
  let female_first = rng.gen::<bool>();
  let female = choose(rng, &names.female_names, "female names")?.clone();
  let male = choose(rng, &names.male_names, "male names")?.clone();
  Ok(if female_first { (female, male) } else { (male, female) })
}

#[instrument(level = "info", skip_all)]
pub fn generate_practice<R: Rng + ?Sized>(
  rng: &mut R,
  data: &ReferenceData,
  settings: &Settings,
) -> Result<PracticeQuestion, GenerationError> {
  let people = example_people(rng, &data.people)?;
  let entity = sample(rng, data, settings.sampling.max_attempts)?;
  let question = compose(&entity);
  let answer_key = build_answer_key(&entity, &settings.templates);

  let id = Uuid::new_v4().to_string();
  debug!(
    target: "practice",
    %id,
    per_se = entity.per_se,
    foreign = entity.foreign,
    jurisdiction = %entity.jurisdiction,
    suffix = %entity.type_short_form,
    correct = ?answer_key.correct().map(|e| e.slot),
    "Practice question generated"
  );

  Ok(PracticeQuestion {
    id,
    problem: question.problem,
    follow_up: question.follow_up,
    answer_key,
    entity,
    people,
  })
}
