mod client;
mod types;

pub use client::{GroqClient, LlmClient};
pub use types::*;
