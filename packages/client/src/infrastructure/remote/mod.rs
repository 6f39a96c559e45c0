//! Remote store adapters.

pub mod http;

pub use http::HttpRemoteMessageStore;
