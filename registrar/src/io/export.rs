//! JSON export of the record store.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::store::RecordStore;
use crate::io::config::AppConfig;
use crate::record::Student;

/// Outcome of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub count: usize,
}

/// Serialize every stored student to `data_dir/export_file` as pretty JSON.
///
/// Reads the store through its read-only iteration contract; the store is
/// never modified.
pub fn export_students(config: &AppConfig, store: &RecordStore) -> Result<ExportOutcome> {
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("create data directory {}", config.data_dir.display()))?;

    let students: Vec<&Student> = store.students().collect();
    let path = config.data_dir.join(&config.export_file);
    let mut buf = serde_json::to_string_pretty(&students)?;
    buf.push('\n');
    fs::write(&path, buf).with_context(|| format!("write export {}", path.display()))?;

    info!(count = students.len(), path = %path.display(), "exported student records");
    Ok(ExportOutcome {
        path,
        count: students.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{store_with, student_with_gpa, temp_config};

    #[test]
    fn export_writes_all_students_in_insertion_order() {
        let (_temp, config) = temp_config();
        let store = store_with(vec![
            student_with_gpa("S001", "Alice Johnson", 3.85),
            student_with_gpa("S002", "Bob Smith", 2.4),
        ]);

        let outcome = export_students(&config, &store).expect("export");
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.path, config.data_dir.join("students.json"));

        let contents = fs::read_to_string(&outcome.path).expect("read export");
        let parsed: Vec<Student> = serde_json::from_str(&contents).expect("parse export");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id, "S001");
        assert_eq!(parsed[1].id, "S002");
    }

    #[test]
    fn export_of_empty_store_is_an_empty_array() {
        let (_temp, config) = temp_config();
        let store = RecordStore::new();

        let outcome = export_students(&config, &store).expect("export");
        assert_eq!(outcome.count, 0);

        let contents = fs::read_to_string(&outcome.path).expect("read export");
        assert_eq!(contents.trim(), "[]");
    }
}
