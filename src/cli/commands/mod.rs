//! Per-command executors.

pub mod add;
pub mod done;
pub mod list;
pub mod stats;
