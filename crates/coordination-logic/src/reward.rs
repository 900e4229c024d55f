//! Reward summarization from a finished transcript
//!
//! Reads back the payload published by [`crate::GameResult::final_observation`]
//! and turns it into a scalar score. Never fails: anything unreadable scores 0.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::answer::has_answer_tag;

/// Marker identifying a final-payload message
pub const COMPLETE_MARKER: &str = "game_complete";

/// Role in a conversation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in a transcript
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Payoff of the most recent finished game in `messages`, or 0.0
///
/// Scans user messages newest first. A message counts when it carries the
/// completion marker and its first embedded JSON object has a numeric
/// `payoff`; anything else is skipped.
pub fn score_from_transcript(messages: &[Message]) -> f64 {
    messages
        .iter()
        .rev()
        .filter(|m| m.role == Role::User)
        .find_map(|m| payoff_from_content(&m.content))
        .unwrap_or(0.0)
}

fn payoff_from_content(content: &str) -> Option<f64> {
    if !content.to_lowercase().contains(COMPLETE_MARKER) {
        return None;
    }
    let start = content.find('{')?;
    let payload = serde_json::Deserializer::from_str(&content[start..])
        .into_iter::<Value>()
        .next()?
        .ok()?;
    payload.get("payoff")?.as_f64()
}

/// Share of assistant messages that follow the answer format
///
/// 0.0 when the transcript has no assistant messages.
pub fn format_score(messages: &[Message]) -> f64 {
    let replies: Vec<&Message> = messages.iter().filter(|m| m.role == Role::Assistant).collect();
    if replies.is_empty() {
        return 0.0;
    }
    let well_formed = replies.iter().filter(|m| has_answer_tag(&m.content)).count();
    well_formed as f64 / replies.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::run_game;
    use crate::params::GameParams;

    #[test]
    fn test_scores_final_payload() {
        let messages = vec![
            Message::system("rules"),
            Message::user("Choose your action. Available actions: qahf, trxc"),
            Message::assistant("<answer>qahf</answer>"),
            Message::user(
                "Game Complete!\n\n{\"game_complete\": true, \"coordinated\": true, \
                 \"player_1_action\": \"qahf\", \"player_2_action\": \"qahf\", \"payoff\": 1.0}",
            ),
        ];
        assert_eq!(score_from_transcript(&messages), 1.0);
    }

    #[test]
    fn test_no_payload_scores_zero() {
        let messages = vec![
            Message::user("Choose your action. Available actions: qahf, trxc"),
            Message::assistant("<answer>qahf</answer>"),
        ];
        assert_eq!(score_from_transcript(&messages), 0.0);
        assert_eq!(score_from_transcript(&[]), 0.0);
    }

    #[test]
    fn test_round_trips_engine_output() {
        let params = GameParams::new(2, 0.75, 0.25).unwrap();
        let state = run_game(params, 0, "<answer>qahf</answer>", "<answer>trxc</answer>").unwrap();
        let messages = vec![Message::user(state.final_observation().unwrap())];
        assert_eq!(score_from_transcript(&messages), 0.25);
    }

    #[test]
    fn test_malformed_payload_keeps_scanning() {
        let messages = vec![
            Message::user("GAME_COMPLETE {\"payoff\": 0.5}"),
            Message::user("game_complete {not json"),
        ];
        assert_eq!(score_from_transcript(&messages), 0.5);
    }

    #[test]
    fn test_missing_payoff_keeps_scanning() {
        let messages = vec![
            Message::user("game_complete {\"payoff\": 1.0}"),
            Message::user("game_complete {\"coordinated\": false}"),
            Message::user("game_complete {\"payoff\": \"high\"}"),
        ];
        assert_eq!(score_from_transcript(&messages), 1.0);
    }

    #[test]
    fn test_newest_payload_wins() {
        let messages = vec![
            Message::user("game_complete {\"payoff\": 1.0}"),
            Message::user("game_complete {\"payoff\": 0.0}"),
        ];
        assert_eq!(score_from_transcript(&messages), 0.0);
    }

    #[test]
    fn test_only_user_messages_count() {
        let messages = vec![Message::assistant("game_complete {\"payoff\": 1.0}")];
        assert_eq!(score_from_transcript(&messages), 0.0);
    }

    #[test]
    fn test_first_object_is_parsed() {
        let messages = vec![Message::user("game_complete {\"payoff\": 0.5} trailing {\"payoff\": 9}")];
        assert_eq!(score_from_transcript(&messages), 0.5);
    }

    #[test]
    fn test_format_score() {
        let messages = vec![
            Message::system("rules"),
            Message::assistant("<answer>qahf</answer>"),
            Message::assistant("qahf"),
        ];
        assert_eq!(format_score(&messages), 0.5);
        assert_eq!(format_score(&[Message::user("hi")]), 0.0);
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }
}
