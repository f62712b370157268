//! Environment variable credential loader.
//!
//! The API key is a process-wide secret read exactly once at startup and
//! immutable for the process lifetime. Absence is fatal before any
//! interactive capability is offered.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use scholar_types::error::CredentialError;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// A bearer credential read once from the process environment.
///
/// Wrapped in [`SecretString`] so the key is never exposed through Debug
/// formatting or accidental logging.
#[derive(Debug)]
pub struct ApiCredential {
    secret: SecretString,
}

impl ApiCredential {
    /// Read the Gemini API key from [`GEMINI_API_KEY_VAR`].
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Missing`] when the variable is unset,
    /// empty, or not valid Unicode.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_env_var(GEMINI_API_KEY_VAR)
    }

    /// Read a credential from a named environment variable.
    pub fn from_env_var(name: &str) -> Result<Self, CredentialError> {
        match std::env::var(name) {
            Ok(val) if !val.trim().is_empty() => {
                debug!(var = name, "credential loaded from environment");
                Ok(Self {
                    secret: SecretString::from(val),
                })
            }
            // Empty, unset, and non-Unicode all count as missing: secrets
            // must be non-empty valid strings.
            _ => Err(CredentialError::Missing(name.to_string())),
        }
    }

    /// Expose the raw key for handing to the HTTP client.
    pub fn expose(&self) -> &str {
        self.secret.expose_secret()
    }
}
