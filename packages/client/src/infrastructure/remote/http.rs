//! `reqwest` implementation of the remote message store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::{
    config::ClientConfig,
    domain::{FetchFailure, Message, OutgoingMessage, RemoteMessageStore, SendFailure},
    infrastructure::dto::http::{MessageListDto, PostMessageDto},
};

/// Remote store reached over HTTP at a single endpoint.
///
/// `GET` returns the full list, `POST` appends one message.
#[derive(Debug, Clone)]
pub struct HttpRemoteMessageStore {
    client: Client,
    endpoint: Url,
}

impl HttpRemoteMessageStore {
    /// Create a store client with the given per-request timeout.
    pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteMessageStore for HttpRemoteMessageStore {
    async fn fetch_messages(&self) -> Result<Vec<Message>, FetchFailure> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        let list: MessageListDto =
            serde_json::from_slice(&body).map_err(|e| FetchFailure::InvalidBody(e.to_string()))?;

        Ok(list.into_domain())
    }

    async fn post_message(&self, message: &OutgoingMessage) -> Result<(), SendFailure> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&PostMessageDto::from(message))
            .send()
            .await
            .map_err(|e| SendFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendFailure::UnexpectedStatus(status.as_u16()));
        }
        Ok(())
    }
}
