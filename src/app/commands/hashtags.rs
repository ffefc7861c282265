use std::time::Instant;

use crate::app::AppContext;
use crate::app::session::{
    HASHTAG_FAILURE_MESSAGE, HashtagSession, HashtagState, TOPIC_VALIDATION_MESSAGE,
};
use crate::domain::AppError;
use crate::ports::{ClipboardWriter, TextGenerator};

/// Outcome of the hashtags command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashtagCommandOutcome {
    /// The assembled prompt, without the boundary having been contacted.
    DryRun(String),
    /// The generated list, stored verbatim, and whether it was copied.
    Generated { hashtags: String, copied: bool },
}

/// Execute the hashtags command: validate the topic, run the single
/// generation attempt, and optionally copy the result to the clipboard.
pub fn execute<G, C>(
    ctx: &mut AppContext<G, C>,
    topic: &str,
    copy: bool,
    dry_run: bool,
) -> Result<HashtagCommandOutcome, AppError>
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    let mut session = HashtagSession::new();
    let Some((token, prompt)) = session.submit(topic) else {
        let message = session.validation_message().unwrap_or(TOPIC_VALIDATION_MESSAGE);
        return Err(AppError::Validation(message.to_string()));
    };

    if dry_run {
        return Ok(HashtagCommandOutcome::DryRun(prompt));
    }

    let outcome = ctx.generator().generate(&prompt);
    if let Err(err) = &outcome {
        eprintln!("Hashtag generation failed: {err}");
    }
    session.resolve(token, outcome);

    let hashtags = match session.state() {
        HashtagState::Ready(text) => text.clone(),
        _ => return Err(AppError::Generation(HASHTAG_FAILURE_MESSAGE.to_string())),
    };

    let copied = copy && session.copy(ctx.clipboard_mut(), Instant::now());
    Ok(HashtagCommandOutcome::Generated { hashtags, copied })
}

#[cfg(test)]
mod tests {
    use crate::app::session::TOPIC_VALIDATION_MESSAGE;
    use crate::ports::{FailingTextGenerator, NoopClipboard, StaticTextGenerator};

    use super::*;

    #[test]
    fn blank_topic_fails_validation_without_reaching_the_generator() {
        let generator = StaticTextGenerator::new("#unused");
        let mut ctx = AppContext::new(generator, NoopClipboard::default());

        let err = execute(&mut ctx, "  \t ", false, false).unwrap_err();
        assert_eq!(err.to_string(), TOPIC_VALIDATION_MESSAGE);
        assert_eq!(ctx.generator().calls(), 0);
    }

    #[test]
    fn generated_list_is_returned_verbatim_and_copied_on_request() {
        let generator = StaticTextGenerator::new("  #fitness, #motivation, #fyp\n");
        let mut ctx = AppContext::new(generator, NoopClipboard::default());

        let outcome = execute(&mut ctx, "fitness motivation", true, false).unwrap();
        assert_eq!(
            outcome,
            HashtagCommandOutcome::Generated {
                hashtags: "#fitness, #motivation, #fyp".to_string(),
                copied: true,
            }
        );
        assert_eq!(ctx.clipboard().last_written(), Some("#fitness, #motivation, #fyp"));
    }

    #[test]
    fn copy_is_skipped_when_not_requested() {
        let generator = StaticTextGenerator::new("#fitness");
        let mut ctx = AppContext::new(generator, NoopClipboard::default());

        let outcome = execute(&mut ctx, "fitness", false, false).unwrap();
        assert_eq!(
            outcome,
            HashtagCommandOutcome::Generated { hashtags: "#fitness".to_string(), copied: false }
        );
        assert!(ctx.clipboard().last_written().is_none());
    }

    #[test]
    fn generation_failure_surfaces_the_fixed_message() {
        let mut ctx = AppContext::new(FailingTextGenerator, NoopClipboard::default());
        let err = execute(&mut ctx, "fitness", false, false).unwrap_err();
        assert_eq!(err.to_string(), HASHTAG_FAILURE_MESSAGE);
    }
}
