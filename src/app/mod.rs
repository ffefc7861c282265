pub mod commands;
pub mod context;
pub mod render;
pub mod session;

pub use context::AppContext;
