//! Roster store port
//!
//! Defines the interface for persisting a roster under a file name.

use crate::core::services::Roster;
use crate::error::RosterError;

/// Persistence backend for whole rosters
///
/// Implementations must be all-or-nothing on `load`: either a complete,
/// valid roster is returned or an error, never a partial result.
pub trait RosterStore {
    /// Save `roster` under `name`, replacing any previous content
    ///
    /// Refuses to save an empty roster.
    fn write(&self, name: &str, roster: &Roster) -> Result<(), RosterError>;

    /// Read the roster saved under `name`
    fn load(&self, name: &str) -> Result<Roster, RosterError>;
}
