//! Public JSON structs for the HTTP API (serde ready).

use serde::{Deserialize, Serialize};

use crate::answer::AnswerSlot;
use crate::domain::FollowUp;
use crate::logic::PracticeQuestion;

#[derive(Debug, Deserialize, Default)]
pub struct PracticeQuery {
  /// Fixed seed for a reproducible question.
  pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct AnswerOut {
  pub slot: AnswerSlot,
  pub answer: String,
  pub explanation: String,
  pub correct: bool,
}

/// Entity metadata for the ownership diagram.
#[derive(Debug, Serialize)]
pub struct EntityOut {
  pub name: String,
  pub suffix: String,
  #[serde(rename = "typeName")]
  pub type_name: String,
  pub jurisdiction: String,
  pub foreign: bool,
  #[serde(rename = "perSe")]
  pub per_se: bool,
  #[serde(rename = "singleMember")]
  pub single_member: bool,
  #[serde(rename = "allMembersLimitedLiability")]
  pub all_members_limited_liability: bool,
}

#[derive(Debug, Serialize)]
pub struct PracticeOut {
  pub id: String,
  pub problem: String,
  #[serde(rename = "followUp")]
  pub follow_up: FollowUp,
  pub answers: Vec<AnswerOut>,
  pub entity: EntityOut,
  pub people: [String; 2],
  pub canonical: String,
}

pub fn to_out(q: &PracticeQuestion, canonical: &str) -> PracticeOut {
  let e = &q.entity;
  PracticeOut {
    id: q.id.clone(),
    problem: q.problem.clone(),
    follow_up: q.follow_up,
    answers: q
      .answer_key
      .entries
      .iter()
      .map(|a| AnswerOut {
        slot: a.slot,
        answer: a.answer.clone(),
        explanation: a.explanation.clone(),
        correct: a.correct,
      })
      .collect(),
    entity: EntityOut {
      name: e.name.clone(),
      suffix: e.type_short_form.clone(),
      type_name: e.type_long_form.clone(),
      jurisdiction: e.jurisdiction.clone(),
      foreign: e.foreign,
      per_se: e.per_se,
      single_member: e.single_member,
      all_members_limited_liability: e.all_members_limited_liability,
    },
    people: [q.people.0.clone(), q.people.1.clone()],
    canonical: canonical.to_string(),
  }
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub error: String,
}
