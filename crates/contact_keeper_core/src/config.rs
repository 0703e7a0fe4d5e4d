//! Store configuration.
//!
//! # Responsibility
//! - Carry the category vocabulary and validation policy explicitly into the
//!   store instead of reading ambient UI state.
//!
//! # Invariants
//! - `vocabulary` never contains duplicates.
//! - The default configuration is the name + phone + categories variant.

use crate::model::contact::Category;

/// Required-field policy applied on commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationRule {
    /// Only the name must be non-empty.
    NameOnly,
    /// Name and phone must both be non-empty.
    #[default]
    NameAndPhone,
}

impl ValidationRule {
    pub fn requires_phone(self) -> bool {
        matches!(self, Self::NameAndPhone)
    }
}

pub const DEFAULT_EMPTY_CATEGORIES_LABEL: &str = "None";

/// Configuration passed into `ContactStore::with_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub validation: ValidationRule,
    /// Category chips the form offers. Stored contacts are not checked
    /// against it.
    pub vocabulary: Vec<Category>,
    /// Row text shown when a contact has no categories.
    pub empty_categories_label: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            validation: ValidationRule::default(),
            vocabulary: Category::ALL.to_vec(),
            empty_categories_label: DEFAULT_EMPTY_CATEGORIES_LABEL.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_validation(mut self, validation: ValidationRule) -> Self {
        self.validation = validation;
        self
    }

    /// Restricts the offered vocabulary, dropping duplicates while keeping
    /// first-seen order.
    pub fn with_vocabulary(mut self, vocabulary: impl IntoIterator<Item = Category>) -> Self {
        let mut deduped = Vec::new();
        for category in vocabulary {
            if !deduped.contains(&category) {
                deduped.push(category);
            }
        }
        self.vocabulary = deduped;
        self
    }

    pub fn with_empty_categories_label(mut self, label: impl Into<String>) -> Self {
        self.empty_categories_label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, ValidationRule};
    use crate::model::contact::Category;

    #[test]
    fn default_is_richer_variant() {
        let config = StoreConfig::default();
        assert_eq!(config.validation, ValidationRule::NameAndPhone);
        assert_eq!(config.vocabulary, Category::ALL.to_vec());
        assert_eq!(config.empty_categories_label, "None");
    }

    #[test]
    fn with_vocabulary_dedupes() {
        let config = StoreConfig::default().with_vocabulary([
            Category::Work,
            Category::Family,
            Category::Work,
        ]);
        assert_eq!(config.vocabulary, vec![Category::Work, Category::Family]);
    }
}
