//! Edit-form draft model.
//!
//! # Responsibility
//! - Hold the scratch copy of contact fields while the add/edit form is open.
//! - Remember which list slot (if any) a commit should replace.
//!
//! # Invariants
//! - A draft owns its fields; editing it never mutates the stored contact.
//! - `DraftTarget::Existing` carries both position and id so stale drafts can
//!   be detected at commit time.

use crate::config::ValidationRule;
use crate::model::contact::{validate_fields, Category, Contact, ContactId, ContactValidationError};
use std::collections::BTreeSet;

/// What a draft commit writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTarget {
    /// Add mode: commit appends a new contact.
    New,
    /// Edit mode: commit replaces the contact at `position`.
    Existing {
        position: usize,
        contact_id: ContactId,
    },
}

/// Scratch form state for one add or edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub phone: String,
    pub categories: BTreeSet<Category>,
    pub target: DraftTarget,
}

impl Draft {
    /// Empty draft for add mode.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            categories: BTreeSet::new(),
            target: DraftTarget::New,
        }
    }

    /// Draft pre-populated from a stored contact, bound to its position.
    pub fn from_contact(position: usize, contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            categories: contact.categories.clone(),
            target: DraftTarget::Existing {
                position,
                contact_id: contact.id,
            },
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.target, DraftTarget::Existing { .. })
    }

    /// Adds `category` when absent, removes it when present.
    ///
    /// Applying the same toggle twice restores the original set.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    pub fn validate(&self, rule: ValidationRule) -> Result<(), ContactValidationError> {
        validate_fields(&self.name, &self.phone, rule)
    }

    /// Builds the contact a commit would write.
    ///
    /// Edit drafts keep the original id; add drafts get a fresh one.
    pub fn to_contact(&self) -> Contact {
        match self.target {
            DraftTarget::New => Contact::new(
                self.name.clone(),
                self.phone.clone(),
                self.categories.iter().copied(),
            ),
            DraftTarget::Existing { contact_id, .. } => Contact::with_id(
                contact_id,
                self.name.clone(),
                self.phone.clone(),
                self.categories.iter().copied(),
            ),
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::empty()
    }
}
