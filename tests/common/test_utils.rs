use blackmail_check::{
    completion::{CompletionClient, CompletionSettings},
    config::LlmConfig,
    llm::{GroqClient, LlmClient},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "gsk-test-key";

/// LLM config pointed at a local mock server
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        ..LlmConfig::default()
    }
}

pub fn completion_client_for(llm: impl LlmClient + 'static) -> CompletionClient {
    CompletionClient::new(Arc::new(llm), CompletionSettings::default())
}

pub fn groq_completion_client(base_url: &str) -> CompletionClient {
    let config = create_test_llm_config(base_url);
    let llm = GroqClient::new(&config).expect("Failed to build Groq client");
    CompletionClient::new(Arc::new(llm), CompletionSettings::from(&config))
}

/// Body of a Groq chat-completion reply
pub fn groq_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "meta-llama/llama-4-scout-17b-16e-instruct",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 80, "completion_tokens": 12, "total_tokens": 92}
    })
}

pub fn groq_empty_choices_body() -> Value {
    json!({
        "id": "chatcmpl-empty",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "meta-llama/llama-4-scout-17b-16e-instruct",
        "choices": []
    })
}

/// Reply whose first choice carries `"content": null`
pub fn groq_null_content_body() -> Value {
    json!({
        "id": "chatcmpl-null",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "meta-llama/llama-4-scout-17b-16e-instruct",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": null},
            "finish_reason": "stop"
        }]
    })
}

pub fn groq_error_body(message: &str, error_type: &str, code: &str) -> Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": null,
            "code": code
        }
    })
}

/// Sample YAML configuration for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  base_url: "http://localhost:4010/openai/v1"
  api_key: "gsk-from-file"
  model: "llama-3.1-8b-instant"
  temperature: 0.2
  max_completion_tokens: 200

server:
  host: "0.0.0.0"
  port: 9090
  logs:
    level: "debug"
"#;
