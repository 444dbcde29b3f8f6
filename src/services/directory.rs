// src/services/directory.rs

//! HTTP implementation of the directory store.
//!
//! Plain request/response against the configured base URL. No retries, no
//! auth, no pagination; a non-success status surfaces as `AppError::Api`
//! with the operation name as context.

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{Lecturer, LecturerDraft, Message, MessageDraft};
use crate::services::DirectoryStore;
use crate::utils::http;

const LECTURERS_PATH: &str = "lecturers";
const MESSAGES_PATH: &str = "messages";

/// Client for the hosted lecturer directory.
#[derive(Clone)]
pub struct DirectoryClient {
    base_url: Url,
    client: Client,
}

impl DirectoryClient {
    /// Create a client from connection settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(&config.base_url)?,
            client: http::create_client(config)?,
        })
    }

    /// Resolve an endpoint path against the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::config("api.base_url cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Check the response status, then decode the JSON body.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api(status.as_u16(), context));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl DirectoryStore for DirectoryClient {
    async fn list_lecturers(&self) -> Result<Vec<Lecturer>> {
        let url = self.endpoint(&[LECTURERS_PATH])?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        Self::decode(response, "list lecturers").await
    }

    async fn create_lecturer(&self, draft: &LecturerDraft) -> Result<Lecturer> {
        let url = self.endpoint(&[LECTURERS_PATH])?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(draft).send().await?;
        Self::decode(response, "create lecturer").await
    }

    async fn update_lecturer(&self, id: &str, lecturer: &Lecturer) -> Result<Lecturer> {
        let url = self.endpoint(&[LECTURERS_PATH, id])?;
        log::debug!("PUT {url}");
        let response = self.client.put(url).json(lecturer).send().await?;
        Self::decode(response, "update lecturer").await
    }

    async fn create_message(&self, draft: &MessageDraft) -> Result<Message> {
        let url = self.endpoint(&[MESSAGES_PATH])?;
        log::debug!("POST {url}");
        let response = self.client.post(url).json(draft).send().await?;
        Self::decode(response, "send message").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DirectoryClient {
        let config = ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        };
        DirectoryClient::new(&config).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        let c = client("https://store.example.com");
        assert_eq!(
            c.endpoint(&["lecturers"]).unwrap().as_str(),
            "https://store.example.com/lecturers"
        );
        assert_eq!(
            c.endpoint(&["lecturers", "42"]).unwrap().as_str(),
            "https://store.example.com/lecturers/42"
        );
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let c = client("https://store.example.com/api/");
        assert_eq!(
            c.endpoint(&["messages"]).unwrap().as_str(),
            "https://store.example.com/api/messages"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = ApiConfig {
            base_url: "not a url".to_string(),
            ..ApiConfig::default()
        };
        assert!(DirectoryClient::new(&config).is_err());
    }
}
