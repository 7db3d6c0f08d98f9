//! HTTP client with the shell's fixed defaults

use crate::api::types::{ApiResponse, HotItem};
use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Request timeout applied to every call
pub const REQUEST_TIMEOUT_MS: u64 = 3000;

/// Preconfigured request-issuing client
///
/// Every request carries a JSON content type and the fixed timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        let client = Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .default_headers(headers)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// The backend URL this client is rooted at
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON payload
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// POST a JSON body and read a JSON payload back
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Fetch the hot list, optionally filtered by tag
    pub async fn hot_list(&self, tag: Option<&str>) -> Result<Vec<HotItem>> {
        let path = match tag {
            Some(tag) => format!("/api/v1/hotsearches?tag={tag}"),
            None => "/api/v1/hotsearches".to_string(),
        };

        let envelope: ApiResponse<Vec<HotItem>> = self.get_json(&path).await?;
        envelope.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://127.0.0.1:8080/").expect("client");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }
}
