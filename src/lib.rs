//! roster - An interactive manager for a sorted roster of students and their
//! exercise points
//!
//! This library provides the line parser, field validation, the always-sorted
//! roster, flat-file persistence with all-or-nothing reloads, and the session
//! loop that ties them together.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod output;
pub mod paths;
pub mod shell;

pub use crate::core::services::{Dispatcher, Outcome, Roster};
pub use error::RosterError;
