//! Hashtag generation session.

use std::time::{Duration, Instant};

use crate::app::session::RequestToken;
use crate::domain::{AppError, HashtagRequest, prompt};
use crate::ports::ClipboardWriter;

/// Fixed user-facing message shown when hashtag generation fails.
pub const HASHTAG_FAILURE_MESSAGE: &str =
    "Sorry, we couldn't generate hashtags at this moment. Please try again.";

/// Validation message for an empty topic; shown without contacting the
/// generator.
pub const TOPIC_VALIDATION_MESSAGE: &str = "Please enter a topic.";

/// How long the copy affordance stays in its confirmed state.
pub const COPIED_WINDOW: Duration = Duration::from_secs(2);

/// Observable state of a hashtag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HashtagState {
    #[default]
    Idle,
    Loading,
    /// Trimmed response text, stored verbatim. No markup conversion: the
    /// list is displayed as plain text for copying.
    Ready(String),
    Failed(&'static str),
}

/// State machine for the hashtag generator, with an orthogonal Copied flag.
#[derive(Debug, Default)]
pub struct HashtagSession {
    state: HashtagState,
    validation_message: Option<&'static str>,
    copied_until: Option<Instant>,
    seq: u64,
}

impl HashtagSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HashtagState {
        &self.state
    }

    /// Validation message from the last rejected submission, if any.
    pub fn validation_message(&self) -> Option<&'static str> {
        self.validation_message
    }

    /// Submit a topic.
    ///
    /// A valid topic enters Loading and yields the token plus the assembled
    /// prompt. An empty or whitespace-only topic records a validation
    /// message, leaves the current state untouched, and yields nothing; the
    /// generator must not be called in that case.
    pub fn submit(&mut self, topic: &str) -> Option<(RequestToken, String)> {
        let Some(request) = HashtagRequest::new(topic) else {
            self.validation_message = Some(TOPIC_VALIDATION_MESSAGE);
            return None;
        };

        self.validation_message = None;
        self.copied_until = None;
        self.seq += 1;
        self.state = HashtagState::Loading;
        Some((RequestToken::new(self.seq), prompt::hashtag_prompt(&request)))
    }

    /// Apply a generation outcome; stale tokens are discarded.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<String, AppError>) -> bool {
        if !token.matches(self.seq) {
            return false;
        }
        self.state = match outcome {
            Ok(raw) => HashtagState::Ready(raw.trim().to_string()),
            Err(_) => HashtagState::Failed(HASHTAG_FAILURE_MESSAGE),
        };
        true
    }

    /// Copy the generated list to the clipboard.
    ///
    /// On success the Copied flag is raised for [`COPIED_WINDOW`] from `now`.
    /// Clipboard failure is ignored beyond leaving the flag down; the
    /// generation state is unaffected either way.
    pub fn copy<C: ClipboardWriter>(&mut self, clipboard: &mut C, now: Instant) -> bool {
        let HashtagState::Ready(text) = &self.state else {
            return false;
        };
        if clipboard.write_text(text).is_ok() {
            self.copied_until = Some(now + COPIED_WINDOW);
            true
        } else {
            false
        }
    }

    /// Whether the copy confirmation is still showing at `now`.
    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.is_some_and(|until| now < until)
    }
}
