//! Trait abstraction for the category service to enable mocking in tests

use super::error::ApiError;
use super::schema::{Category, CategoryCreated, NewCategory};
use async_trait::async_trait;

/// Operations the form needs from the trivia server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Submit a new category. Any 2xx response is a success; the parsed body
    /// is `None` when the server returned something other than the usual JSON.
    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> Result<Option<CategoryCreated>, ApiError>;

    /// List the categories already stored on the server
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
}
