//! Polling chat client library.
//!
//! A named participant views and posts short messages kept in sync with a
//! remote store by periodic polling. The crate holds the session state
//! machine (identity gate, message cache, composer), the polling engine and
//! a terminal front end.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod polling;
pub mod session;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ClientConfig;
pub use session::ChatSession;
