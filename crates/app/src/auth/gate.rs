//! Shared-secret access gate.

use secrecy::{ExposeSecret, SecretString};

/// Outcome of checking a presented API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// No key was presented.
    Missing,
    /// A key was presented but it is not the configured secret.
    Invalid,
    Valid,
}

/// Compares presented API keys against the configured secret.
#[derive(Debug)]
pub struct AccessGate {
    secret: SecretString,
}

impl AccessGate {
    #[must_use]
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Decide whether the raw `presented` key grants access. An empty key counts as
    /// missing; bytes that are not UTF-8 can never match and are invalid.
    pub fn check(&self, presented: Option<&[u8]>) -> AccessDecision {
        let Some(presented) = presented.filter(|key| !key.is_empty()) else {
            return AccessDecision::Missing;
        };

        if constant_time_eq(presented, self.secret.expose_secret().as_bytes()) {
            AccessDecision::Valid
        } else {
            AccessDecision::Invalid
        }
    }
}

/// Byte equality whose running time depends only on the input lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0_u8, |diff, (x, y)| diff | (x ^ y)) == 0
}
