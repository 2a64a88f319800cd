pub mod completion;
pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod shell;

pub use error::{Error, Result};
