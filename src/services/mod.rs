mod clipboard_arboard;
mod gemini_client_http;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
