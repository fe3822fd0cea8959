//! Secure credential handling using the secrecy crate
//!
//! The SurveyMonkey access token grants read access to every survey on the
//! account, so it is held in a `Secret<SecretValue>` for the process lifetime:
//! memory is zeroed on drop, Debug output is redacted, and access requires an
//! explicit `expose_secret()` call.
//!
//! # Example
//!
//! ```rust
//! use surveyor::config::{SecretString, SecretValue};
//! use secrecy::{Secret, ExposeSecret};
//!
//! let token: SecretString = Secret::new(SecretValue::from("sm-token".to_string()));
//!
//! // Access the secret only when building a request
//! let header = format!("Bearer {}", token.expose_secret());
//!
//! // Debug output is redacted
//! let debug_output = format!("{:?}", token);
//! assert!(!debug_output.contains("sm-token"));
//! assert!(debug_output.contains("REDACTED"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Debug, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<SecretValue> for String {
    fn from(mut s: SecretValue) -> Self {
        std::mem::take(&mut s.0)
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Type alias for a secret string used throughout the configuration
pub type SecretString = Secret<SecretValue>;

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret: SecretString = Secret::new(SecretValue::from("tok-123".to_string()));
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("tok-123"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_expose() {
        let secret: SecretString = Secret::new(SecretValue::from("tok-123".to_string()));
        assert_eq!(secret.expose_secret().as_ref(), "tok-123");
        assert!(!secret.expose_secret().is_empty());
    }

    #[test]
    fn test_secret_deserializes_from_plain_string() {
        let secret: SecretString = serde_json::from_str("\"tok-123\"").unwrap();
        assert_eq!(secret.expose_secret().as_ref(), "tok-123");
    }
}
