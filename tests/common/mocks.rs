use async_trait::async_trait;
use blackmail_check::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that replays queued responses and records every request
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Never answers; stands in for a hung network call
#[derive(Debug, Default)]
pub struct PendingLlmClient;

#[async_trait]
impl LlmClient for PendingLlmClient {
    async fn create_chat_completion(
        &self,
        _request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        std::future::pending().await
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        object: "chat.completion".to_string(),
        created: 0,
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_string(),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

pub fn create_empty_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        choices: vec![],
        ..create_mock_chat_response("")
    }
}
