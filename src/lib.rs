//! bizcheck - Schema and business-rule checker for business-data CSV templates
//!
//! This library validates five CSV templates (sales, purchases, inventory,
//! expenses, traders) against fixed column schemas and per-row arithmetic and
//! business rules, then folds the validated rows into a KPI snapshot. All
//! arithmetic uses exact decimals so totals match stored values digit for
//! digit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Templates directory resolution
//! - `error`: Custom error types
//! - `models`: Templates, rows, typed records, exact decimal amounts
//! - `storage`: Template sources (CSV files on disk or in memory)
//! - `services`: Schema validation, row rules, aggregation, orchestration
//! - `reports`: The KPI snapshot and its renderings
//! - `cli`: Command handlers for the `bizcheck` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use bizcheck::config::TemplatePaths;
//! use bizcheck::services::SmokeTestService;
//! use bizcheck::storage::DirectorySource;
//!
//! let source = DirectorySource::new(TemplatePaths::with_dir("excel_templates"));
//! let snapshot = SmokeTestService::new(&source).run()?;
//! println!("{}", snapshot.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BizCheckError, BizCheckResult};
pub use reports::SmokeResult;
