use super::types::*;
use crate::{Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Groq's OpenAI-compatible chat-completion endpoint.
pub struct GroqClient {
    client: Client<OpenAIConfig>,
}

impl GroqClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.trim_end_matches('/'));
        }

        // No request timeout: a hung call stays pending until the caller cancels it.
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        // One request per call: async-openai otherwise retries 429 and 5xx replies.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self { client })
    }
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion for model {} with {} messages",
            request.model,
            request.messages.len()
        );

        let mut messages = Vec::new();
        for msg in &request.messages {
            messages.push(msg.to_openai_message()?);
        }

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&request.model).messages(messages);

        if let Some(temperature) = request.temperature {
            request_builder.temperature(temperature);
        }

        if let Some(max_tokens) = request.max_completion_tokens {
            request_builder.max_completion_tokens(max_tokens);
        }

        let openai_request = request_builder.build()?;

        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices: Vec<Choice> = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage {
                    role: choice.message.role.to_string(),
                    content: choice.message.content.unwrap_or_default(),
                },
                finish_reason: choice
                    .finish_reason
                    .map(|fr| format!("{fr:?}").to_lowercase()),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            object: response.object,
            created: response.created as u64,
            model: response.model,
            choices,
            usage,
        })
    }
}
