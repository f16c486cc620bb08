//! In-memory record store keyed by student id.

use std::collections::HashMap;

use crate::error::RecordError;
use crate::record::Student;

/// Owns the full set of student records for the process lifetime.
///
/// Records live in a vector so iteration and filtering preserve insertion
/// order; the id index gives O(1) lookup. There is no deletion operation.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Register a new student.
    ///
    /// Fails with [`RecordError::DuplicateId`] if the id is already taken;
    /// the store is unchanged on failure.
    pub fn add_student(&mut self, student: Student) -> Result<(), RecordError> {
        if self.index.contains_key(&student.id) {
            return Err(RecordError::DuplicateId(student.id));
        }
        self.index.insert(student.id.clone(), self.students.len());
        self.students.push(student);
        Ok(())
    }

    /// Look up a student by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Student> {
        self.index.get(id).map(|&pos| &self.students[pos])
    }

    /// Mutable lookup, used by the enrollment and grading operations.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Student> {
        let pos = *self.index.get(id)?;
        Some(&mut self.students[pos])
    }

    /// Return every student matching `predicate`, in insertion order.
    ///
    /// The store itself is never modified by a filter.
    pub fn filter_students(&self, predicate: impl Fn(&Student) -> bool) -> Vec<&Student> {
        self.students.iter().filter(|s| predicate(s)).collect()
    }

    /// Read-only iteration over all records in insertion order.
    ///
    /// This is the stable enumeration contract the export subsystem reads.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Arithmetic mean of `current_gpa` across all students.
    ///
    /// Returns `None` for an empty store rather than dividing by zero.
    #[must_use]
    pub fn average_gpa(&self) -> Option<f64> {
        if self.students.is_empty() {
            return None;
        }
        let sum: f64 = self.students.iter().map(|s| s.current_gpa).sum();
        Some(sum / self.students.len() as f64)
    }

    /// Set a student's GPA. The value is owned externally, nothing here
    /// computes it.
    pub fn set_gpa(&mut self, id: &str, gpa: f64) -> Result<(), RecordError> {
        let student = self
            .get_mut(id)
            .ok_or_else(|| RecordError::UnknownStudent(id.to_string()))?;
        student.current_gpa = gpa;
        Ok(())
    }
}
