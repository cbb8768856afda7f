//! HTTP API client.
//!
//! Every request carries `Authorization: Bearer <token>` when a token is set.
//! Non-success responses become [`ClientError::Api`] with the server's
//! `message`, and 401 becomes [`ClientError::Unauthorized`].

mod rooms;
mod streams;

pub use streams::{NewStream, Stream, StreamPatch};

use live_comment_server::infrastructure::dto::http::ErrorResponse;
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Client for the Live Comment HTTP API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Attach a bearer token to every request
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of `segments` under the base URL, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::InvalidBaseUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let builder = self.http.request(method, self.endpoint(segments)?);
        Ok(match &self.auth_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::check(builder.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }

        let fallback = status.canonical_reason().unwrap_or("Unknown error").to_string();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => fallback,
        };
        tracing::debug!("Request failed with {}: {}", status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
