//! Report module - batch result presentation

mod summary;

pub use summary::BatchSummary;
