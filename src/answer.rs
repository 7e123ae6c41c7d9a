//! Answer key builder.
//!
//! Four fixed candidate slots; exactly one is correct for any entity. The correct slot
//! is a pure function of the entity's profile (`correct_slot`), and every slot gets an
//! HTML explanation: affirming for the correct one, a pointer to the regulation for
//! the others.

use serde::Serialize;

use crate::config::Templates;
use crate::domain::{BusinessEntity, Classification, FollowUp, Profile};
use crate::util::{capitalize_first, escape_html, indefinite_article};

const REG_2_B_URL: &str = "https://www.law.cornell.edu/cfr/text/26/301.7701-2#b";
const REG_3_URL: &str = "https://www.law.cornell.edu/cfr/text/26/301.7701-3";
const REG_3_B_URL: &str = "https://www.law.cornell.edu/cfr/text/26/301.7701-3#b";
const REG_3_B_2_URL: &str = "https://www.law.cornell.edu/cfr/text/26/301.7701-3#b_2";

pub const FOREIGN_PER_SE_CITATION: &str = "Treas. Reg. §301.7701-2(b)(8)";
pub const DOMESTIC_PER_SE_CITATION: &str = "Treas. Reg. §301.7701-2(b)(1)";
pub const FOREIGN_STATUS_CITATION: &str = "Treas. Reg. §301.7701-3(b)(2)(i)";
pub const DOMESTIC_STATUS_CITATION: &str = "Treas. Reg. §301.7701-3(b)(1)";

/// Fixed candidate positions, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSlot {
  PerSeNegative,
  DisregardedEntity,
  Partnership,
  Corporation,
}

impl AnswerSlot {
  pub const ALL: [AnswerSlot; 4] = [
    AnswerSlot::PerSeNegative,
    AnswerSlot::DisregardedEntity,
    AnswerSlot::Partnership,
    AnswerSlot::Corporation,
  ];

  pub fn classification(self) -> Option<Classification> {
    match self {
      AnswerSlot::PerSeNegative => None,
      AnswerSlot::DisregardedEntity => Some(Classification::DisregardedEntity),
      AnswerSlot::Partnership => Some(Classification::Partnership),
      AnswerSlot::Corporation => Some(Classification::Corporation),
    }
  }
}

impl From<Classification> for AnswerSlot {
  fn from(c: Classification) -> Self {
    match c {
      Classification::DisregardedEntity => AnswerSlot::DisregardedEntity,
      Classification::Partnership => AnswerSlot::Partnership,
      Classification::Corporation => AnswerSlot::Corporation,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerEntry {
  pub slot: AnswerSlot,
  pub answer: String,
  pub explanation: String,
  pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerKey {
  pub entries: Vec<AnswerEntry>,
}

impl AnswerKey {
  pub fn correct(&self) -> Option<&AnswerEntry> {
    self.entries.iter().find(|e| e.correct)
  }

  /// Answer text → explanation, in slot order.
  pub fn judgments(&self) -> Vec<(&str, &str)> {
    self.entries.iter().map(|e| (e.answer.as_str(), e.explanation.as_str())).collect()
  }
}

/// Classification an eligible entity has under the asked-about regime.
///
/// Foreign entities default to corporation when every member has limited liability and
/// may elect out of it; otherwise they default by member count and may elect corporation.
/// Domestic entities default by member count and may always elect corporation.
pub fn classification(profile: &Profile) -> Classification {
  let by_members = if profile.single_member {
    Classification::DisregardedEntity
  } else {
    Classification::Partnership
  };
  let limited = profile.all_members_limited_liability;

  match (profile.foreign, profile.follow_up()) {
    (true, FollowUp::DefaultStatus) => if limited { Classification::Corporation } else { by_members },
    (true, FollowUp::ElectiveStatus) => if limited { by_members } else { Classification::Corporation },
    (false, FollowUp::DefaultStatus) => by_members,
    (false, FollowUp::ElectiveStatus) => Classification::Corporation,
  }
}

pub fn correct_slot(entity: &BusinessEntity) -> AnswerSlot {
  if entity.per_se {
    AnswerSlot::PerSeNegative
  } else {
    classification(&entity.profile()).into()
  }
}

/// The four candidate answers, in slot order.
pub fn possible_answers(entity: &BusinessEntity) -> [String; 4] {
  let follow_up = entity.follow_up();
  AnswerSlot::ALL.map(|slot| candidate_text(entity, follow_up, slot))
}

fn candidate_text(entity: &BusinessEntity, follow_up: FollowUp, slot: AnswerSlot) -> String {
  match slot.classification() {
    None => format!(
      "No, because {} {} organized in {} is a per se corporation.",
      indefinite_article(&entity.type_long_form),
      entity.type_long_form,
      entity.jurisdiction
    ),
    Some(c) => format!(
      "Yes, and its {} status is {} {}.",
      follow_up.status_word(),
      indefinite_article(c.label()),
      c.label()
    ),
  }
}

pub fn build_answer_key(entity: &BusinessEntity, templates: &Templates) -> AnswerKey {
  let correct = correct_slot(entity);
  let answers = possible_answers(entity);

  let entries = AnswerSlot::ALL
    .into_iter()
    .zip(answers)
    .map(|(slot, answer)| {
      let is_correct = slot == correct;
      let explanation = if is_correct {
        paragraph(&templates.correct_style, &format!("That is correct. {}", affirmation(entity)))
      } else {
        paragraph(&templates.incorrect_style, &corrective_hint(entity, slot))
      };
      AnswerEntry { slot, answer, explanation, correct: is_correct }
    })
    .collect();

  AnswerKey { entries }
}

fn paragraph(style: &str, body: &str) -> String {
  format!("<p style=\"{style}\">{body}</p>")
}

fn link(url: &str, text: &str) -> String {
  format!("<a href=\"{url}\">{text}</a>")
}

fn general_explanation() -> String {
  format!(
    "Under {}, an entity is eligible to elect its business classification if and only if it is not classified \
as a corporation under {}--that is, if and only if it is not a per se corporation.",
    link(REG_3_URL, "Treas. Reg. §301.7701-3(a)"),
    link(REG_2_B_URL, "Treas. Reg. §301.7701-2(b)")
  )
}

fn per_se_hint() -> String {
  format!(
    "Consider what constitutes a per se corporation, as described in {}.",
    link(REG_2_B_URL, "Treas. Reg. §301.7701-2(b)")
  )
}

/// Body of the explanation for the correct slot. Reference data is escaped here; the
/// result is inserted into pages as-is.
fn affirmation(entity: &BusinessEntity) -> String {
  let article = indefinite_article(&entity.type_long_form);
  let type_name = escape_html(&entity.type_long_form);
  let general = general_explanation();

  if entity.per_se {
    let citation = if entity.foreign { FOREIGN_PER_SE_CITATION } else { DOMESTIC_PER_SE_CITATION };
    return format!(
      "{general} {} {type_name} organized in {} is a per se corporation under {}.",
      capitalize_first(article),
      escape_html(&entity.jurisdiction),
      link(REG_2_B_URL, citation)
    );
  }

  let not_per_se = format!(
    "{} {type_name} is not a per se corporation under this regulation and is therefore eligible to check the box.",
    capitalize_first(article)
  );
  let outcome = classification(&entity.profile()).label();
  let outcome_article = indefinite_article(outcome);

  let rule = match (entity.foreign, entity.follow_up()) {
    (true, FollowUp::DefaultStatus) => format!(
      "{} states that a foreign entity in which {} and that {} defaults to {outcome_article} {outcome}.",
      link(REG_3_B_URL, FOREIGN_STATUS_CITATION),
      entity.liability_clause(),
      entity.member_clause()
    ),
    // Member count does not matter when electing into a corporation.
    (true, FollowUp::ElectiveStatus) if !entity.all_members_limited_liability => format!(
      "{} states that a foreign entity in which {} may elect to be {outcome_article} {outcome}.",
      link(REG_3_B_2_URL, FOREIGN_STATUS_CITATION),
      entity.liability_clause()
    ),
    (true, FollowUp::ElectiveStatus) => format!(
      "{} states that a foreign entity in which {} and that {} may elect to be {outcome_article} {outcome}.",
      link(REG_3_B_2_URL, FOREIGN_STATUS_CITATION),
      entity.liability_clause(),
      entity.member_clause()
    ),
    (false, FollowUp::DefaultStatus) => format!(
      "{} states a domestic (U.S.) entity which {} defaults to {outcome_article} {outcome}.",
      link(REG_3_B_URL, DOMESTIC_STATUS_CITATION),
      entity.member_clause()
    ),
    (false, FollowUp::ElectiveStatus) => format!(
      "{} states a domestic (U.S.) entity which is not a per se corporation may, regardless of its number of \
members, elect into {outcome_article} {outcome}.",
      link(REG_3_B_URL, DOMESTIC_STATUS_CITATION)
    ),
  };

  format!("{general} {not_per_se} {rule}")
}

/// Body of the explanation for a wrong slot. Points at the rule without naming the answer.
fn corrective_hint(entity: &BusinessEntity, slot: AnswerSlot) -> String {
  if entity.per_se || slot == AnswerSlot::PerSeNegative {
    return per_se_hint();
  }
  const BOTH: &str = "Focus on how many members the entity has and whether any member has unlimited liability.";
  match (entity.foreign, entity.follow_up()) {
    (true, FollowUp::DefaultStatus) => format!(
      "Consider the default status discussed in {}. {BOTH}",
      link(REG_3_B_URL, FOREIGN_STATUS_CITATION)
    ),
    (true, FollowUp::ElectiveStatus) => format!(
      "Consider the elective status discussed in {}. {BOTH}",
      link(REG_3_URL, "Treas. Reg. §301.7701-3(a) and (b)")
    ),
    (false, FollowUp::DefaultStatus) => format!(
      "Consider the default status discussed in {}. Focus on how many members the entity has.",
      link(REG_3_B_URL, DOMESTIC_STATUS_CITATION)
    ),
    (false, FollowUp::ElectiveStatus) => format!(
      "Consider the elective status discussed in {} for domestic (U.S.) entities.",
      link(REG_3_URL, "Treas. Reg. §301.7701-3(a)(1)")
    ),
  }
}
