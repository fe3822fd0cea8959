//! Response transformation logic
//!
//! This module converts provider-native survey responses into flat normalized
//! records:
//!
//! - [`normalize`]: per-shape answer normalizers (boolean, single choice,
//!   multi choice, rating)
//! - [`transformer`]: applies a survey's schema to one raw response

pub mod normalize;
pub mod transformer;

pub use normalize::normalize_answer;
pub use transformer::transform_response;
