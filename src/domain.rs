//! Domain models: the sampled attribute profile, the resolved placement, and the
//! immutable `BusinessEntity` assembled from them.

use serde::Serialize;

/// Suffixes that denote partnership forms; never single-member.
pub const MULTI_MEMBER_ONLY_SUFFIXES: [&str; 3] = ["LLP", "GP", "LP"];

/// Foreign unlimited-liability forms that may have a single member (e.g. Canadian ULCs,
/// French SCIs). Any other foreign unlimited form is multi-member.
pub const SINGLE_MEMBER_UNLIMITED_SUFFIXES: [&str; 3] = ["ULC", "SC", "SCI"];

/// The five booleans that drive both the question and its answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
  pub foreign: bool,
  pub per_se: bool,
  pub all_members_limited_liability: bool,
  pub single_member: bool,
  pub default_question: bool,
}

impl Profile {
  /// Domestic, single-member, unlimited liability eligible entities are not posed.
  pub fn is_suppressed(&self) -> bool {
    !self.per_se && !self.foreign && self.single_member && !self.all_members_limited_liability
  }

  /// Return a copy with the member count made consistent with the chosen entity type.
  pub fn reconcile(self, entity_type: &EntityType) -> Profile {
    let suffix = entity_type.short_form.as_str();
    let partnership_form = MULTI_MEMBER_ONLY_SUFFIXES.contains(&suffix);
    let foreign_unlimited_multi = !self.per_se
      && self.foreign
      && !self.all_members_limited_liability
      && !SINGLE_MEMBER_UNLIMITED_SUFFIXES.contains(&suffix);

    if partnership_form || foreign_unlimited_multi {
      Profile { single_member: false, ..self }
    } else {
      self
    }
  }

  pub fn follow_up(&self) -> FollowUp {
    if self.default_question { FollowUp::DefaultStatus } else { FollowUp::ElectiveStatus }
  }
}

/// Full name and abbreviation/suffix of an entity form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntityType {
  pub long_form: String,
  pub short_form: String,
}

/// Where the entity is organized and as what.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
  pub jurisdiction: String,
  pub language: String,
  pub entity_type: EntityType,
}

/// Which of the two follow-up questions is asked. Electing is the negation of default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUp {
  DefaultStatus,
  ElectiveStatus,
}

impl FollowUp {
  pub fn is_elective(self) -> bool {
    matches!(self, FollowUp::ElectiveStatus)
  }

  /// Word used inside candidate answers: "Yes, and its {word} status is ...".
  pub fn status_word(self) -> &'static str {
    if self.is_elective() { "elective" } else { "default" }
  }
}

/// Tax classification an eligible entity can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
  DisregardedEntity,
  Partnership,
  Corporation,
}

impl Classification {
  pub fn label(self) -> &'static str {
    match self {
      Classification::DisregardedEntity => "disregarded entity",
      Classification::Partnership => "partnership",
      Classification::Corporation => "corporation",
    }
  }
}

/// One generated entity. Built once per request, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BusinessEntity {
  pub foreign: bool,
  pub per_se: bool,
  pub all_members_limited_liability: bool,
  pub single_member: bool,
  pub default_question: bool,
  pub name: String,
  pub type_long_form: String,
  pub type_short_form: String,
  pub jurisdiction: String,
  pub language: String,
}

impl BusinessEntity {
  pub fn assemble(profile: Profile, placement: Placement, name: String) -> Self {
    Self {
      foreign: profile.foreign,
      per_se: profile.per_se,
      all_members_limited_liability: profile.all_members_limited_liability,
      single_member: profile.single_member,
      default_question: profile.default_question,
      name,
      type_long_form: placement.entity_type.long_form,
      type_short_form: placement.entity_type.short_form,
      jurisdiction: placement.jurisdiction,
      language: placement.language,
    }
  }

  pub fn profile(&self) -> Profile {
    Profile {
      foreign: self.foreign,
      per_se: self.per_se,
      all_members_limited_liability: self.all_members_limited_liability,
      single_member: self.single_member,
      default_question: self.default_question,
    }
  }

  pub fn follow_up(&self) -> FollowUp {
    self.profile().follow_up()
  }

  /// "Tiger, SA"
  pub fn display_name(&self) -> String {
    format!("{}, {}", self.name, self.type_short_form)
  }

  /// Liability sentence used in the problem text. Per se entities name the entity.
  pub fn liability_sentence(&self) -> String {
    if self.per_se {
      format!("All members of {} have limited liability.", self.name)
    } else {
      self.general_liability_sentence().to_string()
    }
  }

  pub fn general_liability_sentence(&self) -> &'static str {
    if self.all_members_limited_liability {
      "All members of the entity have limited liability."
    } else {
      "At least one member of the entity has unlimited liability."
    }
  }

  pub fn member_sentence(&self) -> &'static str {
    if self.single_member { "has only one member." } else { "has more than one member." }
  }

  /// "all members of the entity have limited liability"
  pub fn liability_clause(&self) -> String {
    crate::util::to_clause(self.general_liability_sentence())
  }

  /// "has only one member"
  pub fn member_clause(&self) -> String {
    crate::util::to_clause(self.member_sentence())
  }
}
