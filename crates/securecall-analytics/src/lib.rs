//! Filtering, aggregation and review analytics for `SecureCall`
//!
//! Everything in this crate is a pure function over data someone else
//! loaded: filtering a call listing, deriving badge variants, rolling up
//! KPI and chart figures, ordering the review queue. The only I/O lives at
//! the dataset and export edges.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod dataset;
pub mod display;
pub mod export;
pub mod filter;
pub mod health;
pub mod review;
pub mod summary;
pub mod trends;

// Re-export commonly used types
pub use dataset::Dataset;
pub use display::{BadgeVariant, ConfidenceTier};
pub use filter::{ConfidenceFilter, FilterCriteria, TypeFilter, filter_records};
pub use summary::{DetectionSummary, summarize};
