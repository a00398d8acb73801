#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for metric-lint
//!
//! This library consolidates all functionality for the metric-lint tool, which validates JSON
//! files of monitoring metric definitions and aggregates them into a single array for CI gating.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`schema`]: The closed vocabularies and the declarative field table
//! - [`validation`]: Per-file and per-record checks accumulating diagnostics
//! - [`discovery`]: Locating definition files and checking directory names
//! - [`aggregation`]: Combining definition files and cross-file uniqueness
//! - [`reports`]: Rendering diagnostics as CI annotations

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod aggregation;
#[cfg(not(any(debug_assertions, test)))]
mod aggregation;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod discovery;
#[cfg(not(any(debug_assertions, test)))]
mod discovery;

mod json_utils;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod schema;
#[cfg(not(any(debug_assertions, test)))]
mod schema;

#[cfg(any(debug_assertions, test))]
pub mod validation;
#[cfg(not(any(debug_assertions, test)))]
mod validation;

pub use crate::commands::{Host, run};
