//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// DisplayName validation error
    #[error("DisplayName cannot be empty")]
    DisplayNameEmpty,

    /// DisplayName too long error
    #[error("DisplayName cannot exceed {max} characters (got {actual})")]
    DisplayNameTooLong { max: usize, actual: usize },

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },
}

/// Errors related to the identity gate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The submitted name did not pass validation
    #[error("invalid display name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// The session already has a confirmed name; renaming is not supported
    #[error("display name is already confirmed for this session")]
    AlreadyIdentified,
}

/// Failure while reading the message list from the remote store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Network or transport level failure
    #[error("transport error while fetching messages: {0}")]
    Transport(String),

    /// The remote store answered with a non-2xx status
    #[error("remote store answered {0} to message fetch")]
    UnexpectedStatus(u16),

    /// The body was not the expected JSON document
    #[error("invalid message list body: {0}")]
    InvalidBody(String),
}

/// Failure while writing a message to the remote store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendFailure {
    /// Network or transport level failure
    #[error("transport error while sending message: {0}")]
    Transport(String),

    /// The remote store answered with a non-2xx status
    #[error("remote store answered {0} to message send")]
    UnexpectedStatus(u16),
}
