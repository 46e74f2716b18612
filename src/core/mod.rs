//! Core domain logic for the roster
//!
//! This module contains pure logic with no I/O dependencies.
//! File access is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Student, Command, ParsedLine)
//! - `services/` - Validation, parsing, the roster itself and dispatch
//! - `ports/` - Trait definitions for persistence

pub mod models;
pub mod ports;
pub mod services;
