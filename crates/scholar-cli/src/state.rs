//! Application state: the configured dispatcher.
//!
//! The credential is read exactly once here, before any command handler
//! runs. A missing or empty credential fails initialization, so no dispatch
//! path exists without one.

use anyhow::Result;

use scholar_core::agent::ResponseDispatcher;
use scholar_infra::llm::OpenAiCompatibleProvider;
use scholar_infra::llm::openai_compat::config::DEFAULT_GEMINI_MODEL;
use scholar_infra::secret::ApiCredential;
use scholar_infra::secret::env::OPENAI_API_KEY_VAR;

use crate::cli::ProviderArg;

/// Default model for the OpenAI provider path.
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Holds the configured dispatcher for the lifetime of one invocation.
pub struct AppState {
    pub dispatcher: ResponseDispatcher<OpenAiCompatibleProvider>,
}

impl AppState {
    /// Load the credential and build the completion provider.
    ///
    /// # Errors
    ///
    /// Fails with `CredentialError::Missing` when the provider's API key
    /// variable is unset or empty. Fatal: callers halt before offering any
    /// interaction.
    pub fn init(provider: ProviderArg, model_override: Option<&str>) -> Result<Self> {
        let provider = match provider {
            ProviderArg::Gemini => {
                let credential = ApiCredential::from_env()?;
                let model = model_override.unwrap_or(DEFAULT_GEMINI_MODEL);
                OpenAiCompatibleProvider::gemini(credential.expose(), model)
            }
            ProviderArg::Openai => {
                let credential = ApiCredential::from_env_var(OPENAI_API_KEY_VAR)?;
                let model = model_override.unwrap_or(DEFAULT_OPENAI_MODEL);
                OpenAiCompatibleProvider::openai(credential.expose(), model)
            }
        };

        Ok(Self {
            dispatcher: ResponseDispatcher::new(provider),
        })
    }

    /// The model the provider falls back to for each request.
    pub fn model(&self) -> &str {
        self.dispatcher.provider().default_model()
    }
}
