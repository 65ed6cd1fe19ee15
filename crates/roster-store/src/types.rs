//! Employee and job record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee, pre-joined with job, department, and manager names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: String,

    /// Full display name
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Job name this employee holds
    pub job_title: String,

    #[serde(default)]
    pub department: String,

    pub start_date: NaiveDate,

    /// Manager's display name, empty when unmanaged
    #[serde(default)]
    pub manager: String,

    /// Annual salary in USD
    pub salary: f64,

    /// Annual bonus in USD
    pub bonus: f64,

    /// Equity grant, share count
    pub equity: f64,
}

/// One job opening employees can hold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub department: String,
}

/// In-memory snapshot of the whole directory, handed to the browser once
/// per load. On any upstream failure the provider supplies an empty
/// snapshot rather than a missing one.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub employees: Vec<Employee>,
    pub jobs: Vec<Job>,
}

impl Directory {
    /// The detail-view query: employees whose job name matches exactly.
    pub fn employees_for_job(&self, job_name: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| e.job_title == job_name)
            .cloned()
            .collect()
    }
}
