//! Small utility helpers used across modules.

/// Very small and safe string templating.
/// Replaces occurrences of `{key}` in the template with provided values.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
  let mut out = tpl.to_string();
  for (k, v) in pairs {
    let needle = format!("{{{}}}", k);
    out = out.replace(&needle, v);
  }
  out
}

/// "an" before a vowel letter, "a" otherwise.
///
/// A leading '8' also takes "an" ("an 8-member ..."), since it is read as "eight".
pub fn indefinite_article(word: &str) -> &'static str {
  match word.chars().next() {
    Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | '8') => "an",
    _ => "a",
  }
}

/// Uppercase the first character, leave the rest alone.
pub fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Drop one trailing '.' and lowercase the first character, turning a sentence into a clause.
pub fn to_clause(sentence: &str) -> String {
  let body = sentence.strip_suffix('.').unwrap_or(sentence);
  let mut chars = body.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}
