//! External integration adapters
//!
//! - [`surveymonkey`]: the provider API client behind the
//!   [`surveymonkey::ResponseFetcher`] seam
//! - [`sink`]: storage backends behind [`sink::ResponseSink`]
//! - [`state`]: watermark persistence behind [`state::WatermarkStore`]

pub mod sink;
pub mod state;
pub mod surveymonkey;
