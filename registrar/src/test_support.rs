//! Test-only helpers for constructing records and stores.

use chrono::NaiveDate;

use crate::core::store::RecordStore;
use crate::io::config::AppConfig;
use crate::record::Student;

/// Fixed enrollment date so constructed records are deterministic.
fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
}

/// Create a student with a deterministic registration number and date.
pub fn student(id: &str, full_name: &str) -> Student {
    Student::new(id, full_name, &format!("R-{id}"), fixed_date())
}

/// Create a student with an explicit GPA.
pub fn student_with_gpa(id: &str, full_name: &str, gpa: f64) -> Student {
    let mut record = student(id, full_name);
    record.current_gpa = gpa;
    record
}

/// Create a store pre-populated with `students`.
pub fn store_with(students: Vec<Student>) -> RecordStore {
    let mut store = RecordStore::new();
    for student in students {
        store.add_student(student).expect("unique test ids");
    }
    store
}

/// Temp directory plus a config whose data dir lives inside it.
pub fn temp_config() -> (tempfile::TempDir, AppConfig) {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = AppConfig {
        data_dir: temp.path().join("registrar_data"),
        ..AppConfig::default()
    };
    (temp, config)
}
