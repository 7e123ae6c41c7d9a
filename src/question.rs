//! Question composer: the problem sentence plus one of two fixed follow-up questions.

use serde::Serialize;

use crate::domain::{BusinessEntity, FollowUp};
use crate::util::indefinite_article;

pub const DEFAULT_STATUS_QUESTION: &str =
  "If so, what is its default status if there is no election under the check-the-box rules?";

pub const ELECTIVE_STATUS_QUESTION: &str = "If so, what type of entity will it be if there is an election \
under the check-the-box rules (that is, if the entity does not take default status under the check-the-box rules)?";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComposedQuestion {
  pub problem: String,
  pub follow_up: FollowUp,
}

pub fn follow_up_text(follow_up: FollowUp) -> &'static str {
  match follow_up {
    FollowUp::DefaultStatus => DEFAULT_STATUS_QUESTION,
    FollowUp::ElectiveStatus => ELECTIVE_STATUS_QUESTION,
  }
}

/// Describe the entity and ask whether it may check the box.
pub fn compose(entity: &BusinessEntity) -> ComposedQuestion {
  let follow_up = entity.follow_up();
  let display = entity.display_name();
  let problem = format!(
    "{display} is organized in {jurisdiction} as {article} {kind}. {name} {members} {liability} \
Is {display} eligible to check the box? {question}",
    jurisdiction = entity.jurisdiction,
    article = indefinite_article(&entity.type_long_form),
    kind = entity.type_long_form,
    name = entity.name,
    members = entity.member_sentence(),
    liability = entity.liability_sentence(),
    question = follow_up_text(follow_up),
  );
  ComposedQuestion { problem, follow_up }
}
