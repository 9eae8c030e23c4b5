//! Aggregation and ranking over accepted records.
//!
//! This module folds the validated record stream into branch-wise and
//! overall averages, and produces the per-dimension top-N rankings the
//! report is assembled from.

pub mod aggregate;
pub mod dimension;
pub mod rank;
