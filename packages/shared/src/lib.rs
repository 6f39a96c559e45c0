//! Shared utilities for marathon-chat.
//!
//! Cross-cutting helpers used by every package: logger setup and
//! timestamp handling for the remote store's wire format.

pub mod logger;
pub mod time;
