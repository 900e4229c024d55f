//! Answer extraction from free-form agent output
//!
//! Agents are asked to wrap their choice in `<answer>...</answer>`. Tags and
//! token are matched case-insensitively; the token must be letters only and
//! may be padded with whitespace inside the tags.

pub const ANSWER_OPEN: &str = "<answer>";
pub const ANSWER_CLOSE: &str = "</answer>";

/// First tagged letters-only token in `text`, lower-cased
///
/// Returns `None` when no well-formed tag pair is present.
pub fn find_tagged_token(text: &str) -> Option<String> {
    let lowered = text.to_ascii_lowercase();
    let mut from = 0;

    while let Some(offset) = lowered[from..].find(ANSWER_OPEN) {
        let body_start = from + offset + ANSWER_OPEN.len();
        if let Some(token) = token_before_close(&lowered[body_start..]) {
            return Some(token.to_string());
        }
        from = body_start;
    }

    None
}

/// Match `\s*[a-z]+\s*</answer>` at the start of `rest`
fn token_before_close(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    let letters = trimmed
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(trimmed.len());
    if letters == 0 {
        return None;
    }
    let (token, tail) = trimmed.split_at(letters);
    tail.trim_start().starts_with(ANSWER_CLOSE).then_some(token)
}

/// The chosen action, if the tagged token is one of `valid_labels`
///
/// A tagged token outside the menu is treated like a missing answer.
pub fn extract_answer<S: AsRef<str>>(text: &str, valid_labels: &[S]) -> Option<String> {
    let token = find_tagged_token(text)?;
    valid_labels
        .iter()
        .any(|label| label.as_ref() == token)
        .then_some(token)
}

/// Whether `text` follows the answer format at all
pub fn has_answer_tag(text: &str) -> bool {
    find_tagged_token(text).is_some()
}
