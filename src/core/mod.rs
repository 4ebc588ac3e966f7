//! Core module: GPA math, data model, persistence and view models

pub mod config;
pub mod dashboard;
pub mod gpa;
pub mod gradebook;
pub mod models;
pub mod performance;
pub mod report;
pub mod schedule;
pub mod store;

/// Returns the current version of the `StudentPlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
