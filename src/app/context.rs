use crate::ports::{ClipboardWriter, TextGenerator};

/// Application context holding boundary adapters for command execution.
pub struct AppContext<G: TextGenerator, C: ClipboardWriter> {
    generator: G,
    clipboard: C,
}

impl<G: TextGenerator, C: ClipboardWriter> AppContext<G, C> {
    /// Create a new application context.
    pub fn new(generator: G, clipboard: C) -> Self {
        Self { generator, clipboard }
    }

    /// Get a reference to the text generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a reference to the clipboard writer.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }
}
