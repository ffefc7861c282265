//! Text-generation boundary port.

use std::cell::Cell;

use crate::domain::AppError;

/// Port for the external text-generation boundary.
///
/// One fully assembled prompt in, the full response text out. Implementations
/// make exactly one attempt per call: no retries, no streaming, no caching,
/// so repeated identical prompts may (intentionally) produce different text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// Canned generator for tests and offline exercises. Records how often it
/// was called so callers can assert the boundary was (or was not) reached.
#[derive(Debug, Clone, Default)]
pub struct StaticTextGenerator {
    response: String,
    calls: Cell<usize>,
}

impl StaticTextGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into(), calls: Cell::new(0) }
    }

    /// Number of `generate` calls observed.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TextGenerator for StaticTextGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.response.clone())
    }
}

/// Generator that always fails, for exercising failure paths.
#[derive(Debug, Clone, Default)]
pub struct FailingTextGenerator;

impl TextGenerator for FailingTextGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, AppError> {
        Err(AppError::Generation("boundary unavailable".to_string()))
    }
}
