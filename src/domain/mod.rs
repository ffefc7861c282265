pub mod access;
pub mod config;
pub mod error;
pub mod markup;
pub mod prompt;
pub mod request;

pub use access::AccessGate;
pub use config::{AccessConfig, AppConfig, GeminiApiConfig};
pub use error::AppError;
pub use markup::{Block, Span, Style, convert};
pub use request::{GuideRequest, HashtagRequest};
