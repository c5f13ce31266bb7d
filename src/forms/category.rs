use serde::{Deserialize, Serialize};

use super::{cleaned, required_text};
use crate::domain::{Category, CategoryChanges, FieldErrors, NewCategory};

pub const DUPLICATE_NAME: &str = "Category with this Name already exists.";

/// Submitted category fields
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryForm {
    /// Prefill from a stored category
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: Some(category.name.clone()),
            description: category.description.clone(),
        }
    }

    /// Validate for creation. Uniqueness needs the store and is checked by
    /// the service.
    pub fn clean_for_add(&self) -> Result<NewCategory, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = required_text(&mut errors, "name", &self.name);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewCategory {
            name,
            description: cleaned(&self.description),
        })
    }

    /// Validate for editing. Any submitted name is ignored.
    pub fn clean_for_edit(&self) -> Result<CategoryChanges, FieldErrors> {
        Ok(CategoryChanges {
            description: cleaned(&self.description),
        })
    }
}
