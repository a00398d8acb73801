//! Command-line interface and orchestration for metric-lint
//!
//! This module implements the CLI commands and wires the discovery, aggregation, validation and
//! reporting layers together. It handles argument parsing, configuration loading, and the exit
//! status of each workflow.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **validate**: Validate each named file on its own and report every diagnostic
//! - **aggregate**: Concatenate every definition file under a root into one JSON array
//! - **check**: Directory naming, aggregation, cross-file `id` uniqueness and per-file
//!   validation over a whole tree, as a CI gate
//! - **init**: Write the default configuration file
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes to the appropriate
//! command handler. Each command loads its configuration through `common`, which also
//! initializes logging and decides how diagnostics are rendered. Diagnostics go to the host's
//! output stream; fatal failures go to its error stream and set exit status 1.

mod aggregate;
mod check;
mod common;
mod config;
mod host;
mod init;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use aggregate::{AggregateArgs, aggregate_definitions};
pub use check::{CheckArgs, check_tree};
pub use common::CommonArgs;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use validate::{ValidateArgs, validate_files};
