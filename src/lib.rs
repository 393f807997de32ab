//! `track_issues` - Flat-file issue tracker library
//!
//! This crate provides the core functionality for the `ti` CLI tool: a
//! small issue tracker backed by a single pretty-printed JSON file.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Issue, IssueType, Priority, Status)
//! - [`store`] - File-backed issue store (load, mutate, save)
//! - [`query`] - List filters and type grouping
//! - [`format`] - Text output formatting
//! - [`error`] - Error types and handling
//! - [`logging`] - tracing subscriber setup
//!
//! # Quick Start
//!
//! ```no_run
//! use track_issues::model::{IssueType, Priority};
//! use track_issues::store::IssueStore;
//!
//! let mut store = IssueStore::open("project_issues.json").unwrap();
//! store.add("Fix bug", IssueType::Bug, Priority::High).unwrap();
//! store.save().unwrap();
//! ```
//!
//! Each operation performs a full load-mutate-save cycle with no locking;
//! concurrent invocations can lose updates (last writer wins).

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;

pub use error::{Result, TrackerError};
pub use model::{Issue, IssueType, Priority, Status};
pub use query::ListFilters;
pub use store::{IssueStore, Stats};
