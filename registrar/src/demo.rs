//! Scripted walkthrough exercising every registrar operation end to end.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;

use crate::core::enrollment;
use crate::core::grade::Grade;
use crate::core::store::RecordStore;
use crate::io::backup::{backup_exports, dir_size};
use crate::io::config::AppConfig;
use crate::io::export::export_students;
use crate::record::{Role, Student};

/// Run the walkthrough against a fresh store, writing a transcript to `out`.
pub fn run_demo<W: Write>(config: &AppConfig, mut out: W) -> Result<()> {
    let mut store = RecordStore::new();
    let today = Local::now().date_naive();

    writeln!(out, "--- Student Management ---")?;
    store.add_student(Student::new("S001", "Alice Johnson", "R1001", today))?;
    store.set_gpa("S001", 3.85)?;
    let alice = store.get("S001").context("student S001 just added")?;
    writeln!(out, "Profile: {alice} (role: {})", alice.role())?;
    writeln!(out, "Enrollment date: {}", alice.enrollment_date)?;

    writeln!(out, "\nHigh achiever students:")?;
    for student in store.filter_students(|s| s.current_gpa >= 3.5) {
        writeln!(out, " - {} (GPA: {})", student.full_name, student.current_gpa)?;
    }

    writeln!(out, "\n--- Enrollment & Grading ---")?;
    store.add_student(Student::new("S002", "Bob Smith", "R1002", today))?;
    for code in ["CS101", "MA101", "PH101", "HI101", "AR101", "EC101"] {
        match enrollment::enroll(&mut store, "S002", code, 3) {
            Ok(()) => writeln!(out, "Bob Smith enrolled in {code}")?,
            Err(err) => writeln!(out, "Enrollment failed business rule check: {err}")?,
        }
    }
    writeln!(out, "Enrollment attempts complete for S002.")?;

    let grade = Grade::B;
    store.set_gpa("S002", grade.grade_point())?;
    writeln!(
        out,
        "Recorded grade {grade:?} for Bob Smith (grade points: {})",
        grade.grade_point()
    )?;

    writeln!(out, "\n--- Reports and Backup ---")?;
    match store.average_gpa() {
        Some(avg) => writeln!(out, "Average student GPA: {avg:.2}")?,
        None => writeln!(out, "No student data available to compute average GPA.")?,
    }

    let export = export_students(config, &store)?;
    writeln!(
        out,
        "Exported {} records to {}",
        export.count,
        export.path.display()
    )?;
    let backup = backup_exports(config)?;
    writeln!(
        out,
        "Backup written to {} ({} files, {} bytes)",
        backup.dir.display(),
        backup.files_copied,
        dir_size(&backup.dir)?
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_config;

    #[test]
    fn walkthrough_covers_every_operation() {
        let (_temp, config) = temp_config();
        let mut out = Vec::new();
        run_demo(&config, &mut out).expect("demo");
        let output = String::from_utf8(out).expect("utf8 output");

        assert!(output.contains("Profile: Student [ID: S001, Name: Alice Johnson]"));
        assert!(output.contains(" - Alice Johnson (GPA: 3.85)"));
        assert!(output.contains("Bob Smith enrolled in AR101"));
        assert!(output.contains("Enrollment failed business rule check"));
        assert!(output.contains("Recorded grade B for Bob Smith (grade points: 8)"));
        assert!(output.contains("Average student GPA:"));
        assert!(config.data_dir.join("students.json").is_file());
    }
}
