//! Shared library for `StudentPlanner`
//! Contains the GPA core, data model, store and view models used by the CLI

pub mod core;
pub mod logger;

pub use self::core::*;
