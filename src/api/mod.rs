//! REST API Client
//!
//! Thin wrappers over the customer backend, organized by resource.

mod customer;
mod fruit;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use customer::parse_customer_id;

/// Why a backend call produced no usable value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("invalid customer id: {0:?}")]
    InvalidId(String),
}

/// Client bound to one backend base url
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Absolute url for a path such as `/customers`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {}", url);
        let response = reqwest::Client::new()
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        read_json(url, response).await
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("PUT {}", url);
        let response = reqwest::Client::new()
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        read_json(url, response).await
    }
}

async fn read_json<T: DeserializeOwned>(
    url: String,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            url,
            status: status.as_u16(),
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url,
        message: e.to_string(),
    })
}

fn network_error(url: &str, e: reqwest::Error) -> ApiError {
    ApiError::Network {
        url: url.to_string(),
        message: e.to_string(),
    }
}
