//! Field validation
//!
//! Pure checks on individual tokens. Every function either returns the
//! converted value or the [`RosterError`] describing the first rule broken.

use std::num::IntErrorKind;

use crate::core::models::{MAX_ID_LEN, MAX_ROUND_POINTS, MAX_TOTAL_POINTS, ROUNDS};
use crate::error::RosterError;

/// Characters that may not appear in a file name
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum file name length in bytes
pub const MAX_FILENAME_LEN: usize = 255;

/// Parse the whole of `text` as a base-10 `i32`
///
/// A leading `+` or `-` sign is accepted; anything else that is not a digit
/// makes the conversion fail.
pub fn validate_integer(text: &str, allow_negative: bool) -> Result<i32, RosterError> {
    let wide = text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RosterError::IntegerOutOfRange,
        _ => RosterError::NotAnInteger,
    })?;

    let value = i32::try_from(wide).map_err(|_| RosterError::IntegerOutOfRange)?;

    if !allow_negative && value < 0 {
        return Err(RosterError::NegativeNotAllowed);
    }

    Ok(value)
}

/// Validate a round number (1..=6)
pub fn validate_round(text: &str) -> Result<u8, RosterError> {
    let value = validate_integer(text, false).map_err(|e| match e {
        RosterError::NotAnInteger => RosterError::RoundNotInteger,
        other => other,
    })?;

    match u8::try_from(value) {
        Ok(round) if (1..=ROUNDS).contains(&usize::from(round)) => Ok(round),
        _ => Err(RosterError::RoundOutOfBounds),
    }
}

/// Validate a points value (0..=999)
pub fn validate_points(text: &str) -> Result<u16, RosterError> {
    let value = validate_integer(text, false).map_err(|e| match e {
        RosterError::NotAnInteger => RosterError::PointsNotInteger,
        other => other,
    })?;

    match u16::try_from(value) {
        Ok(points) if points <= MAX_ROUND_POINTS => Ok(points),
        _ => Err(RosterError::PointsOutOfBounds),
    }
}

/// Validate a stored total (0..=5994, the largest reachable sum)
pub fn validate_total(text: &str) -> Result<u32, RosterError> {
    let value = validate_integer(text, false).map_err(|e| match e {
        RosterError::NotAnInteger => RosterError::PointsNotInteger,
        other => other,
    })?;

    match u32::try_from(value) {
        Ok(total) if total <= MAX_TOTAL_POINTS => Ok(total),
        _ => Err(RosterError::PointsOutOfBounds),
    }
}

/// Validate a student ID: 1-6 ASCII letters or digits
pub fn validate_id(text: &str) -> Result<(), RosterError> {
    if text.len() > MAX_ID_LEN {
        return Err(RosterError::IdTooLong);
    }
    if text.is_empty() {
        return Err(RosterError::IdEmpty);
    }
    if !text.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RosterError::IdNotAlphanumeric);
    }
    Ok(())
}

/// Validate a file name
///
/// Rejects the characters `<>:"/\|?*`, names longer than 255 bytes and names
/// ending in a period.
pub fn validate_filename(text: &str) -> Result<(), RosterError> {
    if text.contains(INVALID_FILENAME_CHARS) {
        return Err(RosterError::FilenameInvalid);
    }
    if text.len() > MAX_FILENAME_LEN {
        return Err(RosterError::FilenameTooLong);
    }
    if text.is_empty() || text.ends_with('.') {
        return Err(RosterError::FilenameInvalid);
    }
    Ok(())
}
