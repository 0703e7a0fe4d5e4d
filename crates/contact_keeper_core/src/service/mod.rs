//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into form and list use-cases.
//! - Keep UI/FFI layers decoupled from collection details.

pub mod contact_store;
