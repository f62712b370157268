//! Top-level response dispatcher.
//!
//! One dispatch is one full request/response cycle triggered by a single user
//! action: resolve the instruction for the selected style, build the task
//! prompt for the selected tool, ask the agent once, hand the text back.
//! Stateless -- nothing survives between dispatches.

use tracing::debug;

use scholar_types::agent::{AgentConfig, ResponseStyle, ToolSelection};
use scholar_types::error::{DispatchError, PromptError};

use crate::agent::session::AgentSession;
use crate::document::clip_to_context_window;
use crate::llm::LlmProvider;
use crate::prompt::{builder, catalog};

/// Name presented to the completion endpoint alongside the style directive.
pub const AGENT_NAME: &str = "Research Agent";

/// Coordinates prompt construction and the single agent round trip.
pub struct ResponseDispatcher<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> ResponseDispatcher<P> {
    /// Create a dispatcher around a completion provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run one full dispatch cycle and return the generated text.
    ///
    /// Blank input never reaches the agent: the action is suppressed with
    /// [`PromptError::EmptyPayload`], mirroring the front-end guard that
    /// disables the trigger when the field is empty. Document payloads for
    /// PDF summarization are clipped to the context-window limit before
    /// template application. Upstream errors pass through unchanged.
    pub async fn dispatch(
        &self,
        style: ResponseStyle,
        tool: ToolSelection,
        raw_input: &str,
    ) -> Result<String, DispatchError> {
        if raw_input.trim().is_empty() {
            return Err(PromptError::EmptyPayload.into());
        }

        let config = AgentConfig {
            name: AGENT_NAME.to_string(),
            instructions: catalog::instruction_for(style).to_string(),
        };

        let prompt = match tool {
            ToolSelection::None => raw_input.to_string(),
            ToolSelection::PdfSummarization => {
                builder::build_prompt(tool, clip_to_context_window(raw_input))?
            }
            ToolSelection::KeywordExtraction
            | ToolSelection::ApaReferenceGeneration
            | ToolSelection::ConceptExplanation => builder::build_prompt(tool, raw_input)?,
        };

        debug!(%style, %tool, prompt_chars = prompt.chars().count(), "dispatching");

        let session = AgentSession::new(config, &self.provider);
        let result = session.ask(&prompt).await?;
        Ok(result.final_output)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    use scholar_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
    };

    /// Test double that records every request and replies with a canned
    /// response or a canned upstream error.
    pub(crate) struct RecordingProvider {
        requests: Mutex<Vec<CompletionRequest>>,
        response: Option<CompletionResponse>,
        error_message: Option<String>,
    }

    impl RecordingProvider {
        pub(crate) fn replying(content: &str) -> Self {
            Self::with_response(CompletionResponse {
                id: "test".to_string(),
                content: content.to_string(),
                model: "test-model".to_string(),
                usage: Usage::default(),
            })
        }

        pub(crate) fn with_response(response: CompletionResponse) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: Some(response),
                error_message: None,
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: None,
                error_message: Some(message.to_string()),
            }
        }

        pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.error_message {
                Some(message) => Err(LlmError::Provider {
                    message: message.clone(),
                }),
                None => Ok(self.response.clone().expect("response configured")),
            }
        }
    }

    #[tokio::test]
    async fn test_question_path_sends_raw_input_verbatim() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("42"));
        let output = dispatcher
            .dispatch(
                ResponseStyle::Simple,
                ToolSelection::None,
                "What is quantum entanglement?",
            )
            .await
            .unwrap();

        assert_eq!(output, "42");
        let requests = dispatcher.provider().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[0].content, "What is quantum entanglement?");
    }

    #[tokio::test]
    async fn test_instructions_follow_selected_style() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("ok"));
        dispatcher
            .dispatch(
                ResponseStyle::ExplainLikeImFive,
                ToolSelection::None,
                "why is the sky blue",
            )
            .await
            .unwrap();

        let requests = dispatcher.provider().requests();
        assert_eq!(
            requests[0].system.as_deref(),
            Some(catalog::instruction_for(ResponseStyle::ExplainLikeImFive))
        );
    }

    #[tokio::test]
    async fn test_tool_path_applies_template() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("keywords"));
        dispatcher
            .dispatch(
                ResponseStyle::Technical,
                ToolSelection::KeywordExtraction,
                "graph neural networks for molecules",
            )
            .await
            .unwrap();

        let requests = dispatcher.provider().requests();
        let prompt = &requests[0].messages[0].content;
        assert!(prompt.starts_with(builder::KEYWORD_LEAD_IN));
        assert!(prompt.ends_with("graph neural networks for molecules"));
    }

    #[tokio::test]
    async fn test_pdf_payload_clipped_before_template() {
        use crate::document::MAX_DOCUMENT_CHARS;

        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("summary"));
        let long_text = "b".repeat(MAX_DOCUMENT_CHARS + 500);
        dispatcher
            .dispatch(ResponseStyle::Simple, ToolSelection::PdfSummarization, &long_text)
            .await
            .unwrap();

        let requests = dispatcher.provider().requests();
        let prompt = &requests[0].messages[0].content;
        let expected = format!(
            "{}\n\n{}",
            builder::PDF_SUMMARY_LEAD_IN,
            &long_text[..MAX_DOCUMENT_CHARS]
        );
        assert_eq!(prompt, &expected);
    }

    #[tokio::test]
    async fn test_blank_input_never_reaches_the_agent() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("unused"));
        let err = dispatcher
            .dispatch(ResponseStyle::Simple, ToolSelection::None, "   \n")
            .await
            .unwrap_err();

        assert!(matches!(err, DispatchError::Prompt(PromptError::EmptyPayload)));
        assert!(dispatcher.provider().requests().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_propagates_through_dispatch() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::failing("503 overloaded"));
        let err = dispatcher
            .dispatch(ResponseStyle::Simple, ToolSelection::None, "hello")
            .await
            .unwrap_err();

        match err {
            DispatchError::Llm(LlmError::Provider { message }) => {
                assert_eq!(message, "503 overloaded");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_dispatch_sends_one_user_message() {
        let dispatcher = ResponseDispatcher::new(RecordingProvider::replying("ok"));
        dispatcher
            .dispatch(ResponseStyle::Simple, ToolSelection::ConceptExplanation, "entropy")
            .await
            .unwrap();

        let requests = dispatcher.provider().requests();
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(requests[0].messages[0].role, MessageRole::User);
    }
}
