//! Stream catalogue endpoints.
//!
//! Streams are served by a separate catalogue API under the same base URL.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ClientError;

/// A live stream listed in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub creator: String,
    pub created_at: String,
    pub is_live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewers: Option<u64>,
}

/// Body of `POST /streams`. The server assigns the remaining fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStream {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub creator: String,
}

/// Partial update sent with `PUT /streams/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_live: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewers: Option<u64>,
}

impl ApiClient {
    pub async fn get_streams(&self) -> Result<Vec<Stream>, ClientError> {
        Self::send_json(self.request(Method::GET, &["streams"])?).await
    }

    pub async fn get_stream(&self, id: &str) -> Result<Stream, ClientError> {
        Self::send_json(self.request(Method::GET, &["streams", id])?).await
    }

    pub async fn create_stream(&self, stream: &NewStream) -> Result<Stream, ClientError> {
        Self::send_json(self.request(Method::POST, &["streams"])?.json(stream)).await
    }

    pub async fn update_stream(
        &self,
        id: &str,
        patch: &StreamPatch,
    ) -> Result<Stream, ClientError> {
        let builder = self.request(Method::PUT, &["streams", id])?.json(patch);
        Self::send_json(builder).await
    }

    pub async fn delete_stream(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .request(Method::DELETE, &["streams", id])?
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
