//! Purchaser allow-list gate for the bonus generators.

use crate::domain::AppError;

/// Case-insensitive membership check against a fixed purchaser allow-list.
///
/// This is deliberately not authentication: it is the same trimmed,
/// lowercased string comparison the bonus page performs before exposing the
/// generators.
#[derive(Debug, Clone)]
pub struct AccessGate {
    allowed: Vec<String>,
}

impl AccessGate {
    /// Build a gate from allow-list entries; entries are normalized once.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed =
            allowed.into_iter().map(|email| email.as_ref().trim().to_lowercase()).collect();
        Self { allowed }
    }

    /// Whether the gate admits everyone. An empty allow-list disables gating.
    pub fn is_open(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Check a submitted email, trimmed and case-insensitively.
    pub fn verify(&self, submitted: &str) -> Result<(), AppError> {
        let normalized = submitted.trim().to_lowercase();
        if self.is_open() || self.allowed.contains(&normalized) {
            Ok(())
        } else {
            Err(AppError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AccessGate {
        AccessGate::new(["buyer@example.com", "Second@Example.com"])
    }

    #[test]
    fn verify_is_case_insensitive_and_trims() {
        assert!(gate().verify("  BUYER@example.COM ").is_ok());
        assert!(gate().verify("second@example.com").is_ok());
    }

    #[test]
    fn verify_rejects_unknown_emails() {
        let err = gate().verify("stranger@example.com").unwrap_err();
        assert!(matches!(err, AppError::AccessDenied));
        assert!(err.to_string().contains("purchase the bundle"));
    }

    #[test]
    fn empty_allow_list_admits_everyone() {
        let gate = AccessGate::new(Vec::<String>::new());
        assert!(gate.is_open());
        assert!(gate.verify("anyone@example.com").is_ok());
    }
}
