//! Reports module for bizcheck
//!
//! Provides the KPI snapshot produced by a successful run.

pub mod kpi_snapshot;

pub use kpi_snapshot::SmokeResult;
