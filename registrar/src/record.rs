use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Capability interface for campus records that belong to a person.
///
/// Replaces a base-class hierarchy: any record variant that represents a
/// person reports its role as a string.
pub trait Role {
    fn role(&self) -> &'static str;
}

/// One enrolled student.
///
/// `enrolled_courses` is append-only through the enrollment operation and
/// keeps enrollment order; duplicates are permitted. `current_gpa` is set
/// externally, no computation here owns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: String,
    pub full_name: String,
    pub reg_no: String,
    pub enrollment_date: NaiveDate,
    pub enrolled_courses: Vec<String>,
    pub current_gpa: f64,
}

impl Student {
    /// Create a fresh record with no enrollments and a 0.0 GPA.
    ///
    /// The enrollment date is supplied by the caller so record construction
    /// stays deterministic; the CLI passes today's date.
    pub fn new(id: &str, full_name: &str, reg_no: &str, enrollment_date: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            full_name: full_name.to_string(),
            reg_no: reg_no.to_string(),
            enrollment_date,
            enrolled_courses: Vec::new(),
            current_gpa: 0.0,
        }
    }
}

impl Role for Student {
    fn role(&self) -> &'static str {
        "Student"
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ID: {}, Name: {}]",
            self.role(),
            self.id,
            self.full_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::student;

    #[test]
    fn new_student_has_no_courses_and_zero_gpa() {
        let s = student("S001", "Alice Johnson");
        assert!(s.enrolled_courses.is_empty());
        assert_eq!(s.current_gpa, 0.0);
    }

    #[test]
    fn display_includes_role_id_and_name() {
        let s = student("S001", "Alice Johnson");
        assert_eq!(s.to_string(), "Student [ID: S001, Name: Alice Johnson]");
    }
}
