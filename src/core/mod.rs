//! Core business logic
//!
//! Provider and sink agnostic: everything here works against the adapter
//! traits and the domain model.

pub mod export;
pub mod state;
pub mod transform;
