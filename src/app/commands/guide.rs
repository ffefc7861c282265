use crate::app::AppContext;
use crate::app::session::{GUIDE_FAILURE_MESSAGE, GuideSession, GuideState};
use crate::domain::markup::Block;
use crate::domain::{AppError, GuideRequest};
use crate::ports::{ClipboardWriter, TextGenerator};

/// Outcome of the guide command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideCommandOutcome {
    /// The assembled prompt, without the boundary having been contacted.
    DryRun(String),
    /// Converted display blocks for the generated guide.
    Generated(Vec<Block>),
}

/// Execute the guide command: open a session, run the single generation
/// attempt, and return the terminal outcome.
pub fn execute<G, C>(
    ctx: &AppContext<G, C>,
    request: &GuideRequest,
    dry_run: bool,
) -> Result<GuideCommandOutcome, AppError>
where
    G: TextGenerator,
    C: ClipboardWriter,
{
    let mut session = GuideSession::new();
    let (token, prompt) = session.open(request);

    if dry_run {
        return Ok(GuideCommandOutcome::DryRun(prompt));
    }

    let outcome = ctx.generator().generate(&prompt);
    if let Err(err) = &outcome {
        // Detail goes to stderr only; the user sees the fixed message.
        eprintln!("Guide generation failed: {err}");
    }
    session.resolve(token, outcome);

    match session.state() {
        GuideState::Ready(blocks) => Ok(GuideCommandOutcome::Generated(blocks.clone())),
        _ => Err(AppError::Generation(GUIDE_FAILURE_MESSAGE.to_string())),
    }
}
