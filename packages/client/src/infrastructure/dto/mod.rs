//! Data transfer objects for the remote store's HTTP contract.

pub mod http;
