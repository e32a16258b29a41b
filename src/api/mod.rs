//! Trivia server client module for HTTP communication

mod client;
mod error;
mod schema;
mod traits;

pub use client::CategoryClient;
pub use error::ApiError;
pub use schema::{Category, CategoryCreated, NewCategory};
pub use traits::CategoryService;

#[cfg(test)]
pub use traits::MockCategoryService;
