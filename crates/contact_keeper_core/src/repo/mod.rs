//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the ordered-collection contract the store mutates through.
//! - Isolate index arithmetic and bounds checks from store orchestration.
//!
//! # Invariants
//! - Repository APIs return `OutOfRange` instead of faulting on bad indices.

pub mod contact_repo;
