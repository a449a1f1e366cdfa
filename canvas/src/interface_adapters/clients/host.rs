use crate::domain::{TextQuery, TextQueryError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct TextQueryRequest<'a> {
    query: &'a str,
}

// Thin reqwest client for the host's free-text query endpoint.
#[derive(Clone)]
pub struct HostClient {
    http: reqwest::Client,
    base_url: String,
}

impl HostClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl TextQuery for HostClient {
    async fn send_text_query(&self, query: &str) -> Result<String, TextQueryError> {
        let url = format!("{}/text-query", self.base_url);
        let response = self
            .http
            .post(url)
            .json(&TextQueryRequest { query })
            .send()
            .await
            .map_err(|e| TextQueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TextQueryError::Upstream {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| TextQueryError::Transport(e.to_string()))
    }
}
