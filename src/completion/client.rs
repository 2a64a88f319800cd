use super::severity::Severity;
use crate::{
    Error, Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use std::sync::Arc;
use tracing::{debug, info};

pub const CLASSIFIER_PROMPT: &str = "You are a cyber security expert. You need to look at images \
and identify all of the images that are vulnerable to blackmail attacks. So images like passwords, \
nudity, nsfw, confidential/personal data and more. You have to respond with the first token being \
the vulnerability rating {NONE,LOW,MEDIUM,HIGH} then following up with an explanation (max 400 tokens)";

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    pub max_completion_tokens: u32,
}

impl From<&LlmConfig> for CompletionSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_completion_tokens: config.max_completion_tokens,
        }
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

/// Sends the fixed classifier request and hands back the reply text.
#[derive(Clone)]
pub struct CompletionClient {
    llm: Arc<dyn LlmClient>,
    settings: CompletionSettings,
}

impl CompletionClient {
    pub fn new(llm: Arc<dyn LlmClient>, settings: CompletionSettings) -> Self {
        Self { llm, settings }
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    pub fn build_request(&self) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage::user(CLASSIFIER_PROMPT)],
            max_completion_tokens: Some(self.settings.max_completion_tokens),
            temperature: Some(self.settings.temperature),
        }
    }

    /// One outbound call per invocation. An empty `choices` array is
    /// reported as [`Error::EmptyResponse`].
    pub async fn fetch(&self) -> Result<String> {
        let request = self.build_request();
        debug!("Requesting classification from model {}", request.model);

        let response = self.llm.create_chat_completion(request).await?;
        let text = response.first_content().ok_or(Error::EmptyResponse)?;

        info!(
            "Classifier replied ({} chars, severity {:?})",
            text.len(),
            Severity::from_reply(text)
        );

        Ok(text.to_string())
    }
}
