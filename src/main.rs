//! roster - An interactive manager for a sorted roster of students and their
//! exercise points
//!
//! Reads commands from standard input, one per line, and answers each with
//! `SUCCESS` or an `ERROR (<code>) <NAME>: <message>` line on standard output.

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

mod cli;

/// Main entry point for the roster CLI
fn main() -> std::process::ExitCode {
    cli::run()
}
