//! Column schemas and row mapping for the employee and job tables.
//!
//! Sorting and filtering default to enabled on every column; they are
//! switched off where the browser does not need them. The derived
//! bonus-percentage column starts hidden and swaps with the bonus column
//! at runtime.

use crate::types::{Employee, Job};
use roster_table::{Align, CellFormat, ColumnSpec, Row};

/// Column keys shared between the schema and the row mapping.
pub mod keys {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const JOB: &str = "job_title";
    pub const DEPARTMENT: &str = "department";
    pub const EQUITY: &str = "equity";
    pub const MANAGER: &str = "manager";
    pub const START_DATE: &str = "start_date";
    pub const SALARY: &str = "salary";
    pub const BONUS: &str = "bonus";
    pub const BONUS_PCT: &str = "bonus_pct";
}

/// Schema for the employee table. Name and salary sort; name and job
/// feed the global filter.
pub fn employee_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(keys::NAME, "Name"),
        ColumnSpec::new(keys::EMAIL, "Email")
            .sortable(false)
            .filterable(false),
        ColumnSpec::new(keys::JOB, "Job").sortable(false),
        ColumnSpec::new(keys::DEPARTMENT, "Department")
            .sortable(false)
            .filterable(false),
        ColumnSpec::new(keys::EQUITY, "Equity")
            .align(Align::Right)
            .sortable(false)
            .filterable(false)
            .format(CellFormat::Number),
        ColumnSpec::new(keys::MANAGER, "Manager")
            .sortable(false)
            .filterable(false),
        ColumnSpec::new(keys::START_DATE, "Start Date")
            .sortable(false)
            .filterable(false),
        ColumnSpec::new(keys::SALARY, "Salary")
            .align(Align::Right)
            .filterable(false)
            .format(CellFormat::Currency),
        ColumnSpec::new(keys::BONUS, "Bonus")
            .align(Align::Right)
            .sortable(false)
            .filterable(false)
            .format(CellFormat::Currency)
            .paired_with(keys::BONUS_PCT),
        ColumnSpec::new(keys::BONUS_PCT, "Bonus")
            .align(Align::Right)
            .sortable(false)
            .filterable(false)
            .format(CellFormat::PercentOf {
                numerator: keys::BONUS.to_string(),
                denominator: keys::SALARY.to_string(),
            })
            .hidden()
            .paired_with(keys::BONUS),
    ]
}

/// Schema for the job table.
pub fn job_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new(keys::NAME, "Name").sortable(false),
        ColumnSpec::new(keys::DEPARTMENT, "Department")
            .sortable(false)
            .filterable(false),
    ]
}

/// Map employees into the engine's rectangular dataset.
pub fn employee_rows(employees: &[Employee]) -> Vec<Row> {
    employees
        .iter()
        .map(|e| {
            Row::new()
                .with(keys::NAME, e.name.as_str())
                .with(keys::EMAIL, e.email.as_str())
                .with(keys::JOB, e.job_title.as_str())
                .with(keys::DEPARTMENT, e.department.as_str())
                .with(keys::EQUITY, e.equity)
                .with(keys::MANAGER, e.manager.as_str())
                .with(keys::START_DATE, e.start_date.format("%Y-%m-%d").to_string())
                .with(keys::SALARY, e.salary)
                .with(keys::BONUS, e.bonus)
        })
        .collect()
}

/// Map jobs into the engine's rectangular dataset.
pub fn job_rows(jobs: &[Job]) -> Vec<Row> {
    jobs.iter()
        .map(|j| {
            Row::new()
                .with(keys::NAME, j.name.as_str())
                .with(keys::DEPARTMENT, j.department.as_str())
        })
        .collect()
}
