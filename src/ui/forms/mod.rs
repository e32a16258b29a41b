//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `category_form`: The add-category form

mod category_form;
mod field_renderer;

pub use category_form::draw as draw_category_form;
