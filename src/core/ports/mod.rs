//! Port traits (interfaces) for external dependencies
//!
//! The dispatcher depends only on these traits, never on concrete
//! implementations, so tests can swap in an in-memory store.
//!
//! Implementations live in the `adapters` module.

mod roster_store;

pub use roster_store::RosterStore;
