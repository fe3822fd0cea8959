//! Export state management
//!
//! Watermark tracking for incremental exports: the [`Watermark`] document
//! model and the [`StateManager`] that enforces commit-order invariants over
//! a persistence backend.

pub mod manager;
pub mod watermark;

pub use manager::StateManager;
pub use watermark::Watermark;
