//! Errors that stop the terminal client.
//!
//! Fetch and send failures are not here: they are recovered inside the
//! session and only logged.

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] rustyline::error::ReadlineError),

    #[error("input thread stopped unexpectedly")]
    InputClosed,
}
