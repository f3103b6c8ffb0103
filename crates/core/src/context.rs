//! Conversation context — the bounded history of prior exchanges.
//!
//! The context is a plain value owned by the caller's session and passed
//! `&mut` into each engine operation. There is no process-wide singleton:
//! exclusive access is enforced by the borrow checker, so interleaved
//! appends from concurrent completions cannot occur.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Maximum number of stored lines (10 exchanges of user + AI).
pub const MAX_CONTEXT_LINES: usize = 20;

/// Who produced a context line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
}

impl Speaker {
    /// The prefix used when rendering the line into a prompt.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Ai => "AI",
        }
    }
}

/// A single line of conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextLine {
    pub speaker: Speaker,
    pub text: String,
}

/// Bounded, ordered log of prior prompt/response pairs.
///
/// `append` adds one exchange (two lines); once the log exceeds
/// [`MAX_CONTEXT_LINES`] the oldest lines are evicted first. State is
/// never persisted — it lives and dies with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Unique session identifier.
    pub id: String,

    /// Ordered lines, newest last.
    lines: Vec<ContextLine>,

    /// When this context was created.
    pub created_at: DateTime<Utc>,

    /// When the last exchange was appended.
    pub updated_at: DateTime<Utc>,
}

impl ConversationContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append one completed exchange, then trim to the cap.
    pub fn append(&mut self, user_text: impl Into<String>, ai_text: impl Into<String>) {
        self.lines.push(ContextLine {
            speaker: Speaker::User,
            text: user_text.into(),
        });
        self.lines.push(ContextLine {
            speaker: Speaker::Ai,
            text: ai_text.into(),
        });
        self.updated_at = Utc::now();

        if self.lines.len() > MAX_CONTEXT_LINES {
            let excess = self.lines.len() - MAX_CONTEXT_LINES;
            self.lines.drain(..excess);
            debug!(
                session = %self.id,
                kept = self.lines.len(),
                "Trimmed conversation history to cap"
            );
        }
    }

    /// Number of stored lines (not exchanges).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether any exchange has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The stored lines, oldest first.
    pub fn lines(&self) -> &[ContextLine] {
        &self.lines
    }

    /// Render all lines in order with `User:` / `AI:` prefixes, for
    /// inclusion in subsequent prompts.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{}: {}", l.speaker.prefix(), l.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConversationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_records_both_lines() {
        let mut ctx = ConversationContext::new();
        ctx.append("What suits me?", "Let's find out.");
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.lines()[0].speaker, Speaker::User);
        assert_eq!(ctx.lines()[1].speaker, Speaker::Ai);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let mut ctx = ConversationContext::new();
        for i in 0..11 {
            ctx.append(format!("question {i}"), format!("answer {i}"));
        }
        // 11 exchanges = 22 lines, trimmed to exactly 20 (10 exchanges)
        assert_eq!(ctx.len(), MAX_CONTEXT_LINES);
        // Exchange 0 is gone, exchange 1 is now the front
        assert_eq!(ctx.lines()[0].text, "question 1");
        assert_eq!(ctx.lines()[19].text, "answer 10");
    }

    #[test]
    fn render_alternates_prefixes() {
        let mut ctx = ConversationContext::new();
        ctx.append("hello", "hi there");
        assert_eq!(ctx.render(), "User: hello\nAI: hi there");
    }

    #[test]
    fn render_empty_context() {
        let ctx = ConversationContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.render(), "");
    }

    #[test]
    fn updated_at_advances_on_append() {
        let mut ctx = ConversationContext::new();
        let created = ctx.created_at;
        ctx.append("a", "b");
        assert!(ctx.updated_at >= created);
    }
}
