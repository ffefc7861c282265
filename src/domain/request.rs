//! Generation request models.

/// A bonus-guide generation request.
///
/// Constructed once per generation attempt and consumed by the guide
/// session; never persisted. The title is displayed by the caller and is
/// also embedded in the prompt so the model has the full context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideRequest {
    /// Guide title as shown to the user.
    pub title: String,
    /// One-line description of what the guide should cover.
    pub description: String,
}

impl GuideRequest {
    /// Create a new guide request.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

/// A hashtag-list generation request.
///
/// The topic is guaranteed non-empty after trimming; construction is the
/// validation point, so a `HashtagRequest` that exists is always sendable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagRequest {
    topic: String,
}

impl HashtagRequest {
    /// Build a request from raw user input.
    ///
    /// Returns `None` when the topic is empty after trimming.
    pub fn new(topic: &str) -> Option<Self> {
        let topic = topic.trim();
        if topic.is_empty() { None } else { Some(Self { topic: topic.to_string() }) }
    }

    /// The trimmed reel topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashtag_request_trims_topic() {
        let request = HashtagRequest::new("  fitness motivation  ").unwrap();
        assert_eq!(request.topic(), "fitness motivation");
    }

    #[test]
    fn hashtag_request_rejects_empty_and_whitespace() {
        assert!(HashtagRequest::new("").is_none());
        assert!(HashtagRequest::new("   \t ").is_none());
    }
}
