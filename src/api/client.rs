//! HTTP client for the trivia server
//!
//! Wraps a `reqwest::Client` with a cookie store so that session cookies set
//! by the server travel with every later request.

use super::error::ApiError;
use super::schema::{Category, CategoryCreated, CategoryListing, NewCategory};
use super::traits::CategoryService;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Path of the categories collection on the server
const CATEGORIES_PATH: &str = "/categories";

/// Client for the trivia server's category endpoints
#[derive(Debug, Clone)]
pub struct CategoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl CategoryClient {
    /// Create a client for the server at `base_url`.
    /// Requests never time out unless `timeout` is set.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The server base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn categories_url(&self) -> String {
        format!("{}{}", self.base_url, CATEGORIES_PATH)
    }
}

#[async_trait]
impl CategoryService for CategoryClient {
    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> Result<Option<CategoryCreated>, ApiError> {
        let url = self.categories_url();

        let response = self
            .http
            .post(&url)
            .json(category)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        // The body is informational only
        let created = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<CategoryCreated>(&body).ok(),
            Err(e) => {
                tracing::debug!("Could not read create response body: {e}");
                None
            }
        };

        Ok(created)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.categories_url();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        // The server answers 404 while no category exists yet
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let listing: CategoryListing =
            response.json().await.map_err(|e| ApiError::Decode {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(listing.into_categories())
    }
}
