//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record rendered by the list view.
//! - Define the fixed category vocabulary contacts are tagged with.
//! - Validate required fields before a contact enters the list.
//!
//! # Invariants
//! - `id` is stable and survives in-place replacement by an edit commit.
//! - `categories` is a set: order is irrelevant and duplicates collapse.
//! - Labels are rendered in vocabulary order, independent of toggle order.

use crate::config::ValidationRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable row key for a contact.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = Uuid;

/// Fixed category vocabulary a contact can be tagged with.
///
/// Variant order is the display order used by list rows and form chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    Friends,
    Work,
    School,
}

impl Category {
    /// Full enumerated vocabulary in display order.
    pub const ALL: [Category; 4] = [
        Category::Family,
        Category::Friends,
        Category::Work,
        Category::School,
    ];

    /// Returns the stable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Friends => "Friends",
            Self::Work => "Work",
            Self::School => "School",
        }
    }

    /// Parses a label case-insensitively, ignoring surrounding whitespace.
    pub fn from_label(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Required-field violation detected before commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    EmptyPhone,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::EmptyPhone => write!(f, "contact phone cannot be empty"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical contact record held by the ordered contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable row key; unchanged by edits.
    pub id: ContactId,
    /// Non-empty display label.
    pub name: String,
    /// Free-form text, no format validation.
    pub phone: String,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl Contact {
    /// Creates a new contact with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, phone, categories)
    }

    /// Creates a contact with a caller-provided ID.
    ///
    /// Used when an edit commit replaces a contact in place.
    pub fn with_id(
        id: ContactId,
        name: impl Into<String>,
        phone: impl Into<String>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Checks required fields under the given rule.
    ///
    /// # Errors
    /// - `EmptyName` when the name is empty.
    /// - `EmptyPhone` when the phone is empty and the rule requires it.
    pub fn validate(&self, rule: ValidationRule) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.phone, rule)
    }

    /// Comma-joined category labels, or `placeholder` when untagged.
    pub fn category_summary(&self, placeholder: &str) -> String {
        if self.categories.is_empty() {
            return placeholder.to_string();
        }
        self.categories
            .iter()
            .map(|category| category.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// Shared required-field check for stored contacts and in-progress drafts.
pub(crate) fn validate_fields(
    name: &str,
    phone: &str,
    rule: ValidationRule,
) -> Result<(), ContactValidationError> {
    if name.is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    if rule.requires_phone() && phone.is_empty() {
        return Err(ContactValidationError::EmptyPhone);
    }
    Ok(())
}
