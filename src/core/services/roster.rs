//! The roster: students keyed by ID plus an explicit rank order
//!
//! Students live in a map keyed by ID, which makes the uniqueness check a key
//! lookup. A separate vector holds the IDs in rank order and is kept sorted by
//! [`compare`] after every mutation.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::debug;

use crate::core::models::{MAX_ROUND_POINTS, Student};
use crate::error::RosterError;

/// Rank order of two students
///
/// Higher total first, then last name, first name and ID ascending (byte-wise).
/// IDs are unique, so two distinct students never compare equal.
#[must_use]
pub fn compare(a: &Student, b: &Student) -> Ordering {
    b.total_points()
        .cmp(&a.total_points())
        .then_with(|| a.last_name.cmp(&b.last_name))
        .then_with(|| a.first_name.cmp(&b.first_name))
        .then_with(|| a.id.cmp(&b.id))
}

/// An always-sorted collection of students
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: BTreeMap<String, Student>,
    ranking: Vec<String>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    /// Whether the roster holds no students
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }

    /// Look up a student by ID
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Whether a student with `id` exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.students.contains_key(id)
    }

    /// Add a new student with zero points
    pub fn add(&mut self, id: &str, last_name: &str, first_name: &str) -> Result<(), RosterError> {
        self.insert(Student::new(id, last_name, first_name))
    }

    /// Insert a fully populated student at its sorted position
    pub fn insert(&mut self, student: Student) -> Result<(), RosterError> {
        if self.contains(&student.id) {
            return Err(RosterError::DuplicateId);
        }

        let position = self.insertion_point(&student);
        debug!("Inserting {} at rank {}", student.id, position + 1);
        self.ranking.insert(position, student.id.clone());
        self.students.insert(student.id.clone(), student);
        Ok(())
    }

    /// Set one round's points and move the student to its new rank
    ///
    /// Fails without touching the roster if the round or points are out of range.
    pub fn update(&mut self, id: &str, round: u8, points: u16) -> Result<(), RosterError> {
        if self.is_empty() {
            return Err(RosterError::UpdateOnEmptyRoster);
        }

        let old_rank = self.rank_of(id).ok_or(RosterError::StudentNotFound)?;
        if points > MAX_ROUND_POINTS {
            return Err(RosterError::PointsOutOfBounds);
        }
        let Some(student) = self.students.get_mut(id) else {
            return Err(RosterError::StudentNotFound);
        };
        if !student.set_round(round, points) {
            return Err(RosterError::RoundOutOfBounds);
        }
        let key = self.ranking.remove(old_rank);

        let new_rank = self.insertion_point(&self.students[id]);
        debug!("Moving {id} from rank {} to rank {}", old_rank + 1, new_rank + 1);
        self.ranking.insert(new_rank, key);
        Ok(())
    }

    /// Students in rank order
    pub fn list(&self) -> impl Iterator<Item = &Student> {
        self.ranking.iter().map(|id| &self.students[id])
    }

    /// Swap in a completely new set of students
    pub fn replace_all(&mut self, other: Self) {
        *self = other;
    }

    /// Zero-based rank of the student with `id`
    fn rank_of(&self, id: &str) -> Option<usize> {
        let student = self.students.get(id)?;
        self.ranking
            .binary_search_by(|probe| compare(&self.students[probe], student))
            .ok()
    }

    /// Index of the first ranked student that sorts after `student`
    fn insertion_point(&self, student: &Student) -> usize {
        self.ranking
            .partition_point(|probe| compare(&self.students[probe], student) == Ordering::Less)
    }
}
