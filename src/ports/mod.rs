mod clipboard_writer;
mod text_generator;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use text_generator::{FailingTextGenerator, StaticTextGenerator, TextGenerator};
