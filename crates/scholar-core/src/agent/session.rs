//! Agent session: one configured agent, one `ask` operation.
//!
//! An `AgentSession` pairs an [`AgentConfig`] with a borrowed provider and
//! exposes a single round-trip `ask`. The underlying call is async, but the
//! public contract is call once, await once, get a fully resolved result.
//! OTel GenAI spans instrument the provider call.

use tracing::{Instrument, debug, info_span};

use scholar_types::agent::{AgentConfig, CompletionResult};
use scholar_types::llm::{CompletionRequest, LlmError, Message, MessageRole};

use crate::llm::LlmProvider;

/// Output-token budget for one completion. The original front-end left this
/// to the endpoint default; a fixed cap keeps answers bounded.
const DEFAULT_MAX_TOKENS: u32 = 2048;

/// One configured conversational agent bound to a provider.
///
/// Reconstructing the session with a new [`AgentConfig`] replaces the active
/// instructions for all subsequent asks. The UI issues at most one ask at a
/// time, so no concurrent-session isolation is needed.
pub struct AgentSession<'p, P: LlmProvider> {
    config: AgentConfig,
    provider: &'p P,
}

impl<'p, P: LlmProvider> AgentSession<'p, P> {
    /// Create a session with the given config and provider.
    pub fn new(config: AgentConfig, provider: &'p P) -> Self {
        Self { config, provider }
    }

    /// The active agent configuration.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Send one prompt and await the fully resolved result.
    ///
    /// Exactly one round trip: no retry, no timeout beyond the transport's,
    /// no streaming. Upstream failures propagate unchanged.
    pub async fn ask(&self, prompt: &str) -> Result<CompletionResult, LlmError> {
        let request = self.build_request(prompt);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.agent.name = %self.config.name,
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            model = %response.model,
            "completion finished"
        );

        Ok(CompletionResult {
            final_output: response.content,
            usage: response.usage,
        })
    }

    /// Assemble the one-shot request: instructions as the system directive,
    /// the prompt as a single user message, model left to the provider.
    fn build_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![Message {
                role: MessageRole::User,
                content: prompt.to_string(),
            }],
            system: Some(self.config.instructions.clone()),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::dispatcher::tests::RecordingProvider;
    use scholar_types::llm::{CompletionResponse, Usage};

    fn config() -> AgentConfig {
        AgentConfig {
            name: "Research Agent".to_string(),
            instructions: "Be factual.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ask_builds_single_user_message_with_system() {
        let provider = RecordingProvider::replying("the answer");
        let session = AgentSession::new(config(), &provider);

        let result = session.ask("What is entropy?").await.unwrap();
        assert_eq!(result.final_output, "the answer");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.system.as_deref(), Some("Be factual."));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[0].content, "What is entropy?");
        assert!(request.model.is_empty());
    }

    #[tokio::test]
    async fn test_ask_surfaces_usage() {
        let provider = RecordingProvider::with_response(CompletionResponse {
            id: "resp-1".to_string(),
            content: "ok".to_string(),
            model: "gemini-2.0-flash".to_string(),
            usage: Usage {
                input_tokens: 12,
                output_tokens: 34,
            },
        });
        let session = AgentSession::new(config(), &provider);

        let result = session.ask("hi").await.unwrap();
        assert_eq!(result.usage.input_tokens, 12);
        assert_eq!(result.usage.output_tokens, 34);
    }

    #[tokio::test]
    async fn test_upstream_error_propagates_unchanged() {
        let provider = RecordingProvider::failing("upstream down");
        let session = AgentSession::new(config(), &provider);

        let err = session.ask("hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Provider { message } if message == "upstream down"));
    }
}
