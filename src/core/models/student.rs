//! Student model
//!
//! A student is identified by a short alphanumeric ID and carries one points
//! value per exercise round.

use serde::Serialize;

/// Number of exercise rounds
pub const ROUNDS: usize = 6;

/// Maximum points for a single round
pub const MAX_ROUND_POINTS: u16 = 999;

/// Maximum length of a student ID in bytes
pub const MAX_ID_LEN: usize = 6;

/// Largest possible total over all rounds
pub const MAX_TOTAL_POINTS: u32 = 999 * 6;

/// A student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Unique student ID (1-6 ASCII letters or digits)
    pub id: String,

    /// Last name
    pub last_name: String,

    /// First name
    pub first_name: String,

    /// Points per round, index = round - 1
    pub points: [u16; ROUNDS],
}

impl Student {
    /// Create a student with zero points in every round
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            points: [0; ROUNDS],
        }
    }

    /// Builder-style setter for all round points
    #[must_use]
    pub const fn with_points(mut self, points: [u16; ROUNDS]) -> Self {
        self.points = points;
        self
    }

    /// Sum of points over all rounds
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.points.iter().map(|&p| u32::from(p)).sum()
    }

    /// Set the points of one round (1-based)
    ///
    /// Returns `false`, leaving the student unchanged, when `round` is not in
    /// `1..=ROUNDS`.
    #[must_use]
    pub fn set_round(&mut self, round: u8, points: u16) -> bool {
        let Some(slot) = usize::from(round).checked_sub(1).and_then(|i| self.points.get_mut(i)) else {
            return false;
        };
        *slot = points;
        true
    }
}

impl std::fmt::Display for Student {
    /// Record-line rendering: `id last first r1 .. r6 total`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.id, self.last_name, self.first_name)?;
        for p in &self.points {
            write!(f, " {p}")?;
        }
        write!(f, " {}", self.total_points())
    }
}

/// Serialized view including the derived total
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StudentView<'a> {
    /// Student ID
    pub id: &'a str,
    /// Last name
    pub last_name: &'a str,
    /// First name
    pub first_name: &'a str,
    /// Points per round
    pub points: &'a [u16; ROUNDS],
    /// Sum of `points`
    pub total_points: u32,
}

impl<'a> From<&'a Student> for StudentView<'a> {
    fn from(student: &'a Student) -> Self {
        Self {
            id: &student.id,
            last_name: &student.last_name,
            first_name: &student.first_name,
            points: &student.points,
            total_points: student.total_points(),
        }
    }
}
