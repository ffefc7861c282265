//! Guide generation session.

use crate::app::session::RequestToken;
use crate::domain::markup::{self, Block};
use crate::domain::{AppError, GuideRequest, prompt};

/// Fixed user-facing message shown when guide generation fails. The boundary
/// error detail never reaches session state.
pub const GUIDE_FAILURE_MESSAGE: &str =
    "Sorry, we couldn't generate the guide at this moment. Please try again later.";

/// Observable state of a guide session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GuideState {
    #[default]
    Idle,
    Loading,
    /// Converted display blocks for the generated guide.
    Ready(Vec<Block>),
    /// Terminal failure with the fixed user-facing message.
    Failed(&'static str),
}

/// State machine for one guide view.
///
/// Opening fires the request immediately; there is no separate "start" step.
/// Closing discards everything, so reopening the same guide runs a full new
/// request cycle.
#[derive(Debug, Default)]
pub struct GuideSession {
    state: GuideState,
    seq: u64,
}

impl GuideSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GuideState {
        &self.state
    }

    /// Open a guide view: enter Loading and hand back the token plus the
    /// assembled prompt to send to the generator.
    pub fn open(&mut self, request: &GuideRequest) -> (RequestToken, String) {
        self.seq += 1;
        self.state = GuideState::Loading;
        (RequestToken::new(self.seq), prompt::guide_prompt(request))
    }

    /// Apply a generation outcome.
    ///
    /// Returns `false` and changes nothing when the token is stale, i.e. a
    /// newer request or a close happened after this one was issued.
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<String, AppError>) -> bool {
        if !token.matches(self.seq) {
            return false;
        }
        self.state = match outcome {
            Ok(raw) => GuideState::Ready(markup::convert(&raw)),
            Err(_) => GuideState::Failed(GUIDE_FAILURE_MESSAGE),
        };
        true
    }

    /// Close the view, discarding generated content and invalidating any
    /// request still in flight.
    pub fn close(&mut self) {
        self.seq += 1;
        self.state = GuideState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::markup::Span;

    use super::*;

    fn request() -> GuideRequest {
        GuideRequest::new("Algorithm Secrets", "How the feed ranks reels")
    }

    #[test]
    fn open_enters_loading_and_builds_the_prompt() {
        let mut session = GuideSession::new();
        assert_eq!(*session.state(), GuideState::Idle);

        let (_token, prompt) = session.open(&request());
        assert_eq!(*session.state(), GuideState::Loading);
        assert!(prompt.contains("Algorithm Secrets"));
    }

    #[test]
    fn success_stores_converted_blocks() {
        let mut session = GuideSession::new();
        let (token, _prompt) = session.open(&request());

        assert!(session.resolve(token, Ok("## Intro\nThis matters.".to_string())));
        let GuideState::Ready(blocks) = session.state() else {
            panic!("expected Ready, got {:?}", session.state());
        };
        assert_eq!(blocks[0], Block::Heading { level: 2, spans: vec![Span::plain("Intro")] });
        assert_eq!(blocks[1], Block::Paragraph(vec![Span::plain("This matters.")]));
    }

    #[test]
    fn failure_stores_the_fixed_message_only() {
        let mut session = GuideSession::new();
        let (token, _prompt) = session.open(&request());

        session.resolve(token, Err(AppError::Generation("socket reset by peer".to_string())));
        assert_eq!(*session.state(), GuideState::Failed(GUIDE_FAILURE_MESSAGE));
    }

    #[test]
    fn stale_outcome_is_discarded_when_it_arrives_late() {
        let mut session = GuideSession::new();
        let (first, _) = session.open(&request());
        let (second, _) = session.open(&request());

        assert!(session.resolve(second, Ok("second wins".to_string())));
        // The first request's response arrives after the second completed.
        assert!(!session.resolve(first, Ok("first, too late".to_string())));

        let GuideState::Ready(blocks) = session.state() else {
            panic!("expected Ready");
        };
        assert_eq!(*blocks, vec![Block::Paragraph(vec![Span::plain("second wins")])]);
    }

    #[test]
    fn stale_outcome_before_the_newer_completion_is_also_discarded() {
        let mut session = GuideSession::new();
        let (first, _) = session.open(&request());
        let (second, _) = session.open(&request());

        assert!(!session.resolve(first, Ok("first".to_string())));
        assert_eq!(*session.state(), GuideState::Loading);

        assert!(session.resolve(second, Err(AppError::Generation("down".to_string()))));
        assert_eq!(*session.state(), GuideState::Failed(GUIDE_FAILURE_MESSAGE));
    }

    #[test]
    fn close_discards_state_and_invalidates_inflight_requests() {
        let mut session = GuideSession::new();
        let (token, _) = session.open(&request());
        session.close();

        assert_eq!(*session.state(), GuideState::Idle);
        assert!(!session.resolve(token, Ok("late".to_string())));
        assert_eq!(*session.state(), GuideState::Idle);

        // Reopening runs a fresh cycle from Loading.
        let (token, _) = session.open(&request());
        assert_eq!(*session.state(), GuideState::Loading);
        assert!(session.resolve(token, Ok("fresh".to_string())));
    }
}
