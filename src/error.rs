use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Shell error: {0}")]
    Shell(String),

    #[error("Empty response: the model returned no choices")]
    EmptyResponse,

    #[error("Display shell is already mounted")]
    AlreadyMounted,

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Clone for Error {
    fn clone(&self) -> Self {
        match self {
            Self::Config(s) => Self::Config(s.clone()),
            Self::Llm(s) => Self::Llm(s.clone()),
            Self::Shell(s) => Self::Shell(s.clone()),
            Self::EmptyResponse => Self::EmptyResponse,
            Self::AlreadyMounted => Self::AlreadyMounted,
            Self::InvalidTransition { current, requested } => Self::InvalidTransition {
                current: current.clone(),
                requested: requested.clone(),
            },
            Self::Internal(s) => Self::Internal(s.clone()),
            // Source errors that can't be cloned keep their message only
            Self::Yaml(e) => Self::Internal(format!("YAML error: {}", e)),
            Self::Io(e) => Self::Internal(format!("IO error: {}", e)),
            Self::Network(e) => Self::Internal(format!("Network error: {}", e)),
            Self::AddrParse(e) => Self::Internal(format!("Address parse error: {}", e)),
            Self::OpenAi(e) => Self::Internal(format!("OpenAI error: {}", e)),
        }
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn shell(msg: impl Into<String>) -> Self {
        Self::Shell(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
