//! JSON output formatting
//!
//! Serializes a distribution run into a single document containing:
//! - Generation timestamp and the effective limits
//! - Summary counts and minutes
//! - Per-employee load and assigned task ids
//! - The pass-by-pass report and any warnings raised

use crate::config::DistributionConfig;
use crate::distributor::{CapacityPolicy, DistributionReport};
use crate::model::{Employee, EmployeeId, Task, TaskId};
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Complete JSON document for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub config: DistributionConfig,
    pub summary: JsonSummary,
    pub employees: Vec<JsonEmployee>,
    pub report: DistributionReport,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Aggregate counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonSummary {
    pub employees: usize,
    pub tasks: usize,
    pub assigned: usize,
    pub undistributed: usize,
    /// Sum of input lead times (minutes)
    pub demand_minutes: u64,
    /// Sum of lead times placed by this run (minutes)
    pub assigned_minutes: u64,
    /// Combined capacity of all employees (minutes)
    pub capacity_minutes: u64,
}

/// Employee load after distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonEmployee {
    pub id: EmployeeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub total_lead_time: u64,
    pub headroom: u64,
    pub tasks: Vec<TaskId>,
}

/// Build the JSON document
pub fn build_report(
    employees: &[Employee],
    tasks: &[Task],
    report: &DistributionReport,
    config: &DistributionConfig,
    warnings: &[String],
) -> JsonReport {
    let policy = CapacityPolicy::new(config.capacity_minutes);

    let lead_of = |id: TaskId| -> u64 {
        tasks
            .iter()
            .find(|t| t.id == id)
            .map(Task::lead_minutes)
            .unwrap_or(0)
    };
    let assigned_minutes: u64 = report.assignments().map(|a| lead_of(a.task_id)).sum();

    let summary = JsonSummary {
        employees: employees.len(),
        tasks: report.total_tasks,
        assigned: report.assigned_count(),
        undistributed: report.undistributed.len(),
        demand_minutes: crate::distributor::validation::total_demand(tasks),
        assigned_minutes,
        capacity_minutes: employees.len() as u64 * policy.ceiling(),
    };

    let employees = employees
        .iter()
        .map(|e| JsonEmployee {
            id: e.id,
            name: e.name.clone(),
            total_lead_time: e.total_lead_time(),
            headroom: policy.headroom(e),
            tasks: e.tasks.iter().map(|t| t.id).collect(),
        })
        .collect();

    JsonReport {
        generated_at: Utc::now(),
        config: *config,
        summary,
        employees,
        report: report.clone(),
        warnings: warnings.to_vec(),
    }
}

/// Render the document as pretty-printed JSON
pub fn to_json_string(report: &JsonReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize JSON report")
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;

    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("Failed to write JSON output: {}", output_path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributor::Assignment;

    fn sample() -> (Vec<Employee>, Vec<Task>, DistributionReport) {
        let tasks = vec![Task::new(1, 1, 120), Task::new(2, 2, 60), Task::unestimated(3, 1)];
        let mut employee = Employee::new(7).with_name("Sidorov");
        employee.assign(tasks[0].clone());
        employee.assign(tasks[1].clone());

        let report = DistributionReport {
            total_tasks: 3,
            priority_pass: vec![
                Assignment { task_id: 1, employee_id: 7 },
                Assignment { task_id: 2, employee_id: 7 },
            ],
            fallback_pass: vec![],
            undistributed: vec![3],
        };
        (vec![employee, Employee::new(8)], tasks, report)
    }

    #[test]
    fn test_build_report_summary() {
        let (employees, tasks, report) = sample();
        let json = build_report(&employees, &tasks, &report, &DistributionConfig::default(), &[]);

        assert_eq!(
            json.summary,
            JsonSummary {
                employees: 2,
                tasks: 3,
                assigned: 2,
                undistributed: 1,
                demand_minutes: 180,
                assigned_minutes: 180,
                capacity_minutes: 840,
            }
        );
        assert_eq!(json.employees[0].tasks, vec![1, 2]);
        assert_eq!(json.employees[0].headroom, 240);
        assert_eq!(json.employees[1].headroom, 420);
    }

    #[test]
    fn test_json_fields() {
        let (employees, tasks, report) = sample();
        let warnings = vec!["tasks remain undistributed (2 of 3 assigned)".to_string()];
        let json = build_report(&employees, &tasks, &report, &DistributionConfig::default(), &warnings);

        let value: serde_json::Value = serde_json::from_str(&to_json_string(&json).unwrap()).unwrap();
        assert_eq!(value["config"]["capacity_minutes"], 420);
        assert_eq!(value["employees"][0]["name"], "Sidorov");
        assert!(value["employees"][1].get("name").is_none());
        assert_eq!(value["report"]["undistributed"][0], 3);
        assert_eq!(value["warnings"].as_array().map(Vec::len), Some(1));
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_write_json_output() {
        let (employees, tasks, report) = sample();
        let json = build_report(&employees, &tasks, &report, &DistributionConfig::default(), &[]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        write_json_output(&path, &json).unwrap();

        let parsed: JsonReport = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed.summary, json.summary);
        assert!(parsed.warnings.is_empty());
    }
}
