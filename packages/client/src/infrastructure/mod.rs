//! Infrastructure layer: wire DTOs and the HTTP adapter for the remote store.

pub mod dto;
pub mod remote;

pub use remote::HttpRemoteMessageStore;
