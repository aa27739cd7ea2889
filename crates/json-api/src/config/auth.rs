//! Auth Config

use clap::{Args, builder::NonEmptyStringValueParser};
use secrecy::SecretString;

/// Shared-secret settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// API key clients must present in the `x-api-key` header
    #[arg(
        long,
        env = "API_KEY",
        hide_env_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub api_key: String,
}

impl AuthConfig {
    #[must_use]
    pub fn secret(&self) -> SecretString {
        SecretString::from(self.api_key.clone())
    }
}
