use crate::{Error, Result, completion::Severity};
use serde::Serialize;

pub const PLACEHOLDER: &str = "Loading response...";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    Loaded {
        text: String,
        severity: Option<Severity>,
    },
    Failed {
        reason: String,
    },
}

/// Outcome of the one fetch a shell performs.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Resolved(String),
    Rejected(String),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Loaded { .. } => "Loaded",
            Self::Failed { .. } => "Failed",
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn render(&self) -> String {
        match self {
            Self::Loading => PLACEHOLDER.to_string(),
            Self::Loaded { text, .. } => text.clone(),
            Self::Failed { reason } => format!("Failed to load response: {}", reason),
        }
    }

    /// Only `Loading` accepts an event; both settled states are terminal.
    pub fn apply(&self, event: ShellEvent) -> Result<ViewState> {
        match (self, event) {
            (Self::Loading, ShellEvent::Resolved(text)) => Ok(Self::Loaded {
                severity: Severity::from_reply(&text),
                text,
            }),
            (Self::Loading, ShellEvent::Rejected(reason)) => Ok(Self::Failed { reason }),
            (current, event) => Err(Error::InvalidTransition {
                current: current.name().to_string(),
                requested: event.name().to_string(),
            }),
        }
    }
}

impl ShellEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resolved(_) => "Resolved",
            Self::Rejected(_) => "Rejected",
        }
    }
}
