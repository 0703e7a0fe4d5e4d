//! Core domain logic for Contact Keeper.
//! This crate is the single source of truth for contact list invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{StoreConfig, ValidationRule};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{Category, Contact, ContactId, ContactValidationError};
pub use model::draft::{Draft, DraftTarget};
pub use model::settings::{AppSettings, SettingKey};
pub use repo::contact_repo::{ContactRepository, InMemoryContactRepository, RepoError, RepoResult};
pub use service::contact_store::{CommitOutcome, ContactRow, ContactStore, DeleteConfirmation};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
