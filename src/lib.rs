//! reelkit: generate bonus marketing guides and viral hashtag lists for a
//! digital-content bundle, via the Gemini API.
//!
//! The core pipeline is prompt template → one generation request → markup
//! conversion (guide path) or trim (hashtag path) → display. Access to the
//! generators is gated by a static purchaser allow-list.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::AppContext;
use app::commands::{guide, hashtags};
use ports::NoopClipboard;
use services::{ArboardClipboard, HttpGeminiClient};

pub use app::commands::guide::GuideCommandOutcome;
pub use app::commands::hashtags::HashtagCommandOutcome;
pub use app::render::render_blocks;
pub use domain::{AccessGate, AppConfig, AppError, GuideRequest};

/// Verify a purchaser email against the configured allow-list.
pub fn unlock(config: &AppConfig, email: &str) -> Result<(), AppError> {
    AccessGate::new(&config.access.allowed_emails).verify(email)
}

/// Generate a bonus guide for the given request.
///
/// With `dry_run` the assembled prompt is returned and the boundary is never
/// contacted, so no API key is needed.
pub fn generate_guide(
    config: &AppConfig,
    request: &GuideRequest,
    dry_run: bool,
) -> Result<GuideCommandOutcome, AppError> {
    if dry_run {
        let ctx = AppContext::new(ports::StaticTextGenerator::default(), NoopClipboard::default());
        return guide::execute(&ctx, request, true);
    }

    let generator = HttpGeminiClient::from_env(&config.gemini)?;
    let ctx = AppContext::new(generator, NoopClipboard::default());
    guide::execute(&ctx, request, false)
}

/// Generate a hashtag list for the given topic, optionally copying it to the
/// system clipboard.
pub fn generate_hashtags(
    config: &AppConfig,
    topic: &str,
    copy: bool,
    dry_run: bool,
) -> Result<HashtagCommandOutcome, AppError> {
    if dry_run {
        let mut ctx =
            AppContext::new(ports::StaticTextGenerator::default(), NoopClipboard::default());
        return hashtags::execute(&mut ctx, topic, false, true);
    }

    let generator = HttpGeminiClient::from_env(&config.gemini)?;
    if copy {
        match ArboardClipboard::new() {
            Ok(clipboard) => {
                let mut ctx = AppContext::new(generator, clipboard);
                return hashtags::execute(&mut ctx, topic, true, false);
            }
            Err(err) => {
                // No system clipboard available: generate anyway, just
                // without the copy affordance.
                eprintln!("Clipboard unavailable: {err}");
            }
        }
    }

    let mut ctx = AppContext::new(generator, NoopClipboard::default());
    hashtags::execute(&mut ctx, topic, false, false)
}
