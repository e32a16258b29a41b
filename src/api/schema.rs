//! Request and response bodies exchanged with the trivia server

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `POST /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    #[serde(rename = "categoryType")]
    pub category_type: String,
}

impl NewCategory {
    pub fn new(category_type: impl Into<String>) -> Self {
        Self {
            category_type: category_type.into(),
        }
    }
}

/// Body returned by a successful `POST /categories`.
///
/// Every field is optional: a 2xx response counts as success even when the
/// body is missing or shaped differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryCreated {
    #[allow(dead_code)]
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub category_id: Option<u64>,
}

/// Body returned by `GET /categories`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryListing {
    #[allow(dead_code)]
    #[serde(default)]
    pub success: bool,
    /// Category names keyed by their id (JSON object keys are strings)
    #[serde(default)]
    pub categories: HashMap<String, String>,
    #[allow(dead_code)]
    #[serde(default)]
    pub total_categories: usize,
}

/// A category already stored on the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

impl CategoryListing {
    /// Convert the id-keyed map into categories ordered by id.
    /// Entries whose key is not a number are dropped.
    pub fn into_categories(self) -> Vec<Category> {
        let mut categories: Vec<Category> = self
            .categories
            .into_iter()
            .filter_map(|(id, name)| id.parse().ok().map(|id| Category { id, name }))
            .collect();
        categories.sort_by_key(|c| c.id);
        categories
    }
}
