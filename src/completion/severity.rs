use serde::Serialize;

/// Rating the classifier is asked to put as its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Best-effort read of the reply's leading rating. Returns `None` when
    /// the model ignored the requested format.
    pub fn from_reply(reply: &str) -> Option<Self> {
        let token = reply.split_whitespace().next()?;
        let token = token.trim_matches(|c: char| !c.is_ascii_alphabetic());

        match token.to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "LOW" => Some(Self::Low),
            "MEDIUM" => Some(Self::Medium),
            "HIGH" => Some(Self::High),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}
