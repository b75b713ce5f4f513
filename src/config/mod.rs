//! Configuration module for bizcheck
//!
//! There is no configuration file. The only runtime setting is where the
//! templates live; column lists and allowed values are static tables in
//! `models::template`.

pub mod paths;

pub use paths::TemplatePaths;
