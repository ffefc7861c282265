//! Request session state machines.
//!
//! Each session owns one visible result slot: Idle → Loading → terminal
//! {Ready, Failed}. Starting a new request supersedes the previous one, and
//! completions are guarded by a monotonically increasing request token so a
//! stale response arriving after a newer request began is discarded
//! deterministically instead of racing on a state overwrite.

mod guide;
mod hashtags;

pub use guide::{GUIDE_FAILURE_MESSAGE, GuideSession, GuideState};
pub use hashtags::{
    COPIED_WINDOW, HASHTAG_FAILURE_MESSAGE, HashtagSession, HashtagState, TOPIC_VALIDATION_MESSAGE,
};

/// Token identifying one generation attempt within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestToken {
    fn new(seq: u64) -> Self {
        Self(seq)
    }

    fn matches(self, seq: u64) -> bool {
        self.0 == seq
    }
}
