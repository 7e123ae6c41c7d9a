//! HTML page for a practice question.
//!
//! Explanations are already HTML; everything else interpolated here is escaped.

use crate::logic::PracticeQuestion;
use crate::util::{escape_html, fill_template};

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Check-the-Box Practice</title>
<link rel="canonical" href="{canonical}">
</head>
<body>
<main id="practice" data-question-id="{id}">
<h1>Check-the-Box Practice</h1>
<p class="problem">{problem}</p>
<section class="answers">
{answers}
</section>
<figure class="diagram" data-entity="{entity_name}" data-suffix="{suffix}" data-jurisdiction="{jurisdiction}" data-foreign="{foreign}" data-single-member="{single_member}">
<figcaption>{owners}</figcaption>
</figure>
<p><a href="?">Next Question</a></p>
</main>
</body>
</html>
"#;

const ANSWER_TEMPLATE: &str = r#"<details class="answer"><summary>{answer}</summary>{explanation}</details>"#;

pub fn render_page(q: &PracticeQuestion, canonical: &str) -> String {
  let answers = q
    .answer_key
    .judgments()
    .into_iter()
    .map(|(answer, explanation)| {
      let answer = escape_html(answer);
      fill_template(ANSWER_TEMPLATE, &[("answer", answer.as_str()), ("explanation", explanation)])
    })
    .collect::<Vec<_>>()
    .join("\n");

  let e = &q.entity;
  let (first, second) = &q.people;
  let owners = if e.single_member {
    format!("{} owns all of {}.", first, e.display_name())
  } else {
    format!("{} and {} are members of {}.", first, second, e.display_name())
  };

  let canonical = escape_html(canonical);
  let id = escape_html(&q.id);
  let problem = escape_html(&q.problem);
  let entity_name = escape_html(&e.name);
  let suffix = escape_html(&e.type_short_form);
  let jurisdiction = escape_html(&e.jurisdiction);
  let owners = escape_html(&owners);

  // Answers go in last; explanations are trusted HTML and must not be re-scanned for keys.
  let page = fill_template(
    PAGE_TEMPLATE,
    &[
      ("canonical", canonical.as_str()),
      ("id", id.as_str()),
      ("problem", problem.as_str()),
      ("entity_name", entity_name.as_str()),
      ("suffix", suffix.as_str()),
      ("jurisdiction", jurisdiction.as_str()),
      ("foreign", if e.foreign { "true" } else { "false" }),
      ("single_member", if e.single_member { "true" } else { "false" }),
      ("owners", owners.as_str()),
    ],
  );
  fill_template(&page, &[("answers", answers.as_str())])
}
