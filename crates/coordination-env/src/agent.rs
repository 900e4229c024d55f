//! The seam between the episode driver and whatever produces agent replies

use coordination_logic::{Message, Player};

use crate::error::AgentError;

/// Something that answers a conversation on behalf of one player
///
/// Called once per episode per player, player 1 first. `messages` holds only
/// that player's own history.
pub trait Agent {
    fn respond(&mut self, player: Player, messages: &[Message]) -> Result<String, AgentError>;
}

/// Agent that replays fixed replies in order
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    replies: Vec<String>,
    next: usize,
    seen: Vec<Vec<Message>>,
}

impl ScriptedAgent {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            next: 0,
            seen: Vec::new(),
        }
    }

    /// Conversations this agent was asked to answer
    pub fn seen(&self) -> &[Vec<Message>] {
        &self.seen
    }
}

impl Agent for ScriptedAgent {
    fn respond(&mut self, _player: Player, messages: &[Message]) -> Result<String, AgentError> {
        self.seen.push(messages.to_vec());
        let reply = self
            .replies
            .get(self.next)
            .cloned()
            .ok_or_else(|| AgentError::new(format!("script exhausted after {} replies", self.next)))?;
        self.next += 1;
        Ok(reply)
    }
}
