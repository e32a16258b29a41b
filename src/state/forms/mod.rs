//! Form domain layer
//!
//! Type-safe form handling for the add-category view.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{CategoryForm, Form, CATEGORY_TYPE_FIELD};
