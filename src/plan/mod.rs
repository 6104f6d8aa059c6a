//! Plan file handling
//!
//! A plan lists the employees and the tasks to distribute among them. Plans are
//! read from TOML or JSON; the format is picked from the file extension.
//!
//! ```toml
//! [[employees]]
//! id = 1
//! name = "Ivanova A."
//!
//! [[tasks]]
//! id = 10
//! priority = 1
//! lead_time = 90
//! ```

use crate::model::{Employee, Task};
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Employees and tasks loaded from a plan file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Plan file encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Toml,
    Json,
}

impl PlanFormat {
    /// Format implied by the file extension, if recognized
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Plan {
    /// Parse plan from file
    ///
    /// Unknown extensions are tried as TOML first, then JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

        let plan = match PlanFormat::from_path(path) {
            Some(format) => Self::from_str_as(&contents, format),
            None => Self::from_str_as(&contents, PlanFormat::Toml)
                .or_else(|_| Self::from_str_as(&contents, PlanFormat::Json)),
        };

        plan.with_context(|| format!("Failed to parse plan file: {}", path.display()))
    }

    /// Parse plan from string in the given format
    pub fn from_str_as(contents: &str, format: PlanFormat) -> Result<Self> {
        let plan = match format {
            PlanFormat::Toml => toml::from_str(contents).context("Failed to parse TOML plan")?,
            PlanFormat::Json => serde_json::from_str(contents).context("Failed to parse JSON plan")?,
        };
        Ok(plan)
    }

    /// Write plan (including current assignments) as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize plan")
    }

    /// Check plan contents before distribution
    ///
    /// Duplicate task ids are an error: reports identify tasks by id. Duplicate
    /// employee ids are only warned about; the count of warnings is returned.
    pub fn check(&self) -> Result<usize> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.id) {
                anyhow::bail!("task id {} appears more than once in plan", task.id);
            }
        }

        let mut problems = 0;

        let mut seen = HashSet::new();
        for employee in &self.employees {
            if !seen.insert(employee.id) {
                eprintln!("Warning: employee id {} appears more than once in plan", employee.id);
                problems += 1;
            }
        }

        Ok(problems)
    }

    /// Total estimated minutes over all input tasks
    pub fn demand(&self) -> u64 {
        crate::distributor::validation::total_demand(&self.tasks)
    }
}
