//! Wrapper for sensitive strings.

use serde::{Deserialize, Serialize};

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when sending it upstream.
/// Serialization writes the raw value so request bodies stay usable.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to the remote source.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(••••••••)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_does_not_leak() {
        let secret = Secret::new("hunter22");

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("hunter22"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("hunter22"));

        assert_eq!(secret.expose(), "hunter22");
    }

    #[test]
    fn secret_serializes_raw_value() {
        let json = serde_json::to_string(&Secret::new("pw")).unwrap();
        assert_eq!(json, "\"pw\"");
    }

    #[test]
    fn len_counts_characters() {
        assert_eq!(Secret::new("pässwörd").len(), 8);
    }
}
