//! Session state machine: Idle → Awaiting → Answered | Failed.
//!
//! One tagged value replaces the original UI's independent state cells, and
//! each submission carries a ticket so a slow response from an earlier
//! question can never overwrite a newer one.

use crate::messages::{Answer, VideoRef, THINKING_TEXT};

/// Where the session is in the ask/answer cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No question asked yet.
    Idle,
    /// A request is in flight for `question`.
    Awaiting { question: String },
    /// The last question was answered.
    Answered { question: String, answer: Answer },
    /// The last question failed; `message` is the user-visible literal.
    Failed { question: String, message: String },
}

/// Identifies one submission. Resolving with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Client-side session: the input being typed plus the ask/answer state.
#[derive(Debug)]
pub struct Session {
    input: String,
    state: SessionState,
    seq: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: SessionState::Idle,
            seq: 0,
        }
    }

    /// Replace the pending question text. No validation; empty is allowed
    /// here and rejected at submit time.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Submit the current input.
    ///
    /// Blank or whitespace-only input is a no-op: no ticket, no state change,
    /// input left as typed. Otherwise the trimmed question is frozen for
    /// display, the input cleared, and the session moves to `Awaiting`.
    pub fn submit(&mut self) -> Option<(Ticket, String)> {
        let question = self.input.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_string();
        self.input.clear();
        self.seq += 1;
        self.state = SessionState::Awaiting {
            question: question.clone(),
        };
        Some((Ticket(self.seq), question))
    }

    /// Apply the outcome of the submission identified by `ticket`.
    ///
    /// Returns `false` (leaving state untouched) when the ticket is stale,
    /// i.e. a newer submission has happened since it was issued.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<Answer, String>) -> bool {
        if ticket.0 != self.seq {
            return false;
        }
        let question = match &self.state {
            SessionState::Awaiting { question } => question.clone(),
            _ => return false,
        };
        self.state = match outcome {
            Ok(answer) => SessionState::Answered { question, answer },
            Err(message) => SessionState::Failed { question, message },
        };
        true
    }

    /// Text for the answer area: the pending indicator while awaiting, then
    /// the answer or the failure literal. Never stale data mid-request.
    pub fn display_text(&self) -> &str {
        match &self.state {
            SessionState::Idle => "",
            SessionState::Awaiting { .. } => THINKING_TEXT,
            SessionState::Answered { answer, .. } => &answer.text,
            SessionState::Failed { message, .. } => message,
        }
    }

    /// The video reference of the current answer, if any.
    pub fn video(&self) -> Option<&VideoRef> {
        match &self.state {
            SessionState::Answered { answer, .. } => answer.reference.as_ref(),
            _ => None,
        }
    }

    /// The question currently on display (frozen at submit time).
    pub fn asked_question(&self) -> Option<&str> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Awaiting { question }
            | SessionState::Answered { question, .. }
            | SessionState::Failed { question, .. } => Some(question),
        }
    }
}
