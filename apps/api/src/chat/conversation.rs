//! Conversation state for one chat session.
//!
//! The trailing assistant message grows in place as deltas arrive; every
//! other message is immutable once appended. Turn progress is an explicit
//! state machine driven by delta arrival and the terminal sentinel, so
//! rendering code never has to re-derive "is the last message a streaming
//! assistant message" from the list itself.

use crate::models::message::{ChatMessage, Role};

/// Lifecycle of one assistant turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TurnState {
    /// No request in flight.
    #[default]
    Idle,
    /// Request sent, nothing received yet.
    AwaitingFirstToken,
    /// At least one delta applied; the trailing assistant message is live.
    Streaming,
    /// Terminal sentinel observed; the assistant message is final.
    Complete,
}

#[derive(Debug, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    turn: TurnState,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Appends a user message and resets the turn for the next reply.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::user(content));
        self.turn = TurnState::Idle;
    }

    /// Marks a request as sent. The assistant message itself is not created
    /// until the first delta arrives.
    pub fn begin_assistant_turn(&mut self) {
        self.turn = TurnState::AwaitingFirstToken;
    }

    /// Applies one text delta to the in-progress assistant message,
    /// creating it on the first fragment of the turn.
    pub fn apply_delta(&mut self, delta: &str) {
        match self.turn {
            TurnState::AwaitingFirstToken => {
                self.messages.push(ChatMessage::assistant(delta));
                self.turn = TurnState::Streaming;
            }
            TurnState::Streaming => {
                if let Some(last) = self.messages.last_mut() {
                    last.content.push_str(delta);
                }
            }
            // A delta outside an active turn is a protocol violation by the
            // caller; ignore rather than corrupt earlier messages.
            TurnState::Idle | TurnState::Complete => {}
        }
    }

    /// Finalizes the turn. The trailing assistant message, if one was
    /// started, is immutable from here on.
    pub fn complete_turn(&mut self) {
        self.turn = TurnState::Complete;
    }

    /// Content of the trailing assistant message, if the last turn produced one.
    pub fn last_assistant(&self) -> Option<&str> {
        self.messages
            .last()
            .filter(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }
}
