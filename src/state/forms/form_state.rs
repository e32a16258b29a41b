//! Form state management and form structs

use super::field::FormField;
use crate::api::NewCategory;

/// Wire name of the category field
pub const CATEGORY_TYPE_FIELD: &str = "categoryType";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_by_name_mut(&mut self, name: &str) -> Option<&mut FormField>;
}

/// The add-category form: one text field followed by the Submit button
#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub category_type: FormField,
    /// 0 = category field, 1 = Submit button
    pub active_field_index: usize,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self {
            category_type: FormField::text(CATEGORY_TYPE_FIELD, "Category"),
            active_field_index: 0,
        }
    }

    /// Set the field called `field_name` to `value`.
    ///
    /// Any value is accepted, including the empty string. Returns false when
    /// no field has that name.
    pub fn handle_change(&mut self, field_name: &str, value: String) -> bool {
        match self.get_field_by_name_mut(field_name) {
            Some(field) => {
                field.set_text(value);
                true
            }
            None => {
                tracing::debug!("Ignoring change to unknown field {field_name:?}");
                false
            }
        }
    }

    /// Returns true if the Submit button is focused
    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == 1
    }

    /// Clear every field and move focus back to the first one
    pub fn reset(&mut self) {
        self.category_type.clear();
        self.active_field_index = 0;
    }

    /// Build the request body from the current values
    pub fn to_request(&self) -> NewCategory {
        NewCategory::new(self.category_type.as_text())
    }
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CategoryForm {
    fn field_count(&self) -> usize {
        2 // category, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.category_type),
            // Index 1 is the Submit button, no FormField for it
            _ => None,
        }
    }
    fn get_field_by_name_mut(&mut self, name: &str) -> Option<&mut FormField> {
        if self.category_type.name == name {
            Some(&mut self.category_type)
        } else {
            None
        }
    }
}
