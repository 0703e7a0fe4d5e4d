//! Flutter bridge for Contact Keeper core.

pub mod api;
