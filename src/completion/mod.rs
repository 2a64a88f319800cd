mod client;
mod severity;

pub use client::{CLASSIFIER_PROMPT, CompletionClient, CompletionSettings};
pub use severity::Severity;
