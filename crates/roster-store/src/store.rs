use crate::types::{Directory, Employee, Job};
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {path}: {source}")]
    Json {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
}

/// JSON-backed storage for the directory.
///
/// The store stands in for the relational backend: records arrive
/// pre-joined and flat, one file per table.
pub struct DataStore {
    dir: Utf8PathBuf,
}

impl DataStore {
    const EMPLOYEES_FILE: &'static str = "employees.json";
    const JOBS_FILE: &'static str = "jobs.json";

    /// Create a store over the given data directory.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Load a directory snapshot from disk.
    ///
    /// A missing file yields an empty list, never an error; empty is a
    /// valid, renderable state. Malformed JSON is reported.
    pub fn load(&self) -> Result<Directory, StoreError> {
        let employees: Vec<Employee> = self.read_table(Self::EMPLOYEES_FILE)?;
        let jobs: Vec<Job> = self.read_table(Self::JOBS_FILE)?;
        Ok(Directory { employees, jobs })
    }

    fn read_table<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Json { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> DataStore {
        DataStore::new(Utf8Path::from_path(temp.path()).unwrap())
    }

    #[test]
    fn test_load_empty_directory() {
        let temp = TempDir::new().unwrap();
        let directory = store_in(&temp).load().unwrap();
        assert!(directory.employees.is_empty());
        assert!(directory.jobs.is_empty());
    }

    #[test]
    fn test_load_employees_and_jobs() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("employees.json"),
            r#"[{
                "id": "e1",
                "name": "Ann Ames",
                "email": "ann@example.com",
                "job_title": "Engineer",
                "department": "Engineering",
                "start_date": "2021-06-01",
                "manager": "Bo Breck",
                "salary": 100000,
                "bonus": 5000,
                "equity": 1200
            }]"#,
        )
        .unwrap();
        std::fs::write(
            temp.path().join("jobs.json"),
            r#"[{"id": "j1", "name": "Engineer", "department": "Engineering"}]"#,
        )
        .unwrap();

        let directory = store_in(&temp).load().unwrap();
        assert_eq!(directory.employees.len(), 1);
        assert_eq!(directory.employees[0].name, "Ann Ames");
        assert_eq!(directory.employees[0].salary, 100000.0);
        assert_eq!(directory.jobs.len(), 1);
        assert_eq!(directory.jobs[0].name, "Engineer");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("jobs.json"), "not json").unwrap();
        let err = store_in(&temp).load().unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
    }
}
