//! Weekly packing and schedule metrics.
//!
//! # Algorithm
//!
//! `first_fit::pack` is a greedy first-fit heuristic: tasks are taken
//! strictly in input order and packed day by day within the working-hours
//! window. It trades optimality for simplicity and full determinism.
//!
//! # Metrics
//!
//! `ScheduleSummary` computes per-day hours, week utilization, and the
//! busiest day for display and reporting.

pub mod first_fit;
mod summary;

pub use first_fit::{pack, PackingResult};
pub use summary::ScheduleSummary;
