//! Contact domain model.
//!
//! # Responsibility
//! - Define the contact record, the category vocabulary, form drafts and
//!   settings-screen preferences.
//!
//! # Invariants
//! - Every stored contact is identified by a stable `ContactId`.
//! - Drafts are owned copies and never alias stored contacts.

pub mod contact;
pub mod draft;
pub mod settings;
