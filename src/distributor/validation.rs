//! Input validation
//!
//! Empty inputs are fatal. Everything else found here is advisory and only
//! reported through the diagnostics sink.

use super::errors::{Result, ValidationError};
use crate::config::DistributionConfig;
use crate::diagnostics::{DiagnosticsSink, Warning};
use crate::model::{Employee, Task};

/// Sum of lead times over tasks that have one
pub fn total_demand(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .filter_map(|t| t.lead_time)
        .map(u64::from)
        .sum()
}

/// Validate employees and tasks before distribution
pub fn validate<S: DiagnosticsSink + ?Sized>(
    employees: &[Employee],
    tasks: &[Task],
    config: &DistributionConfig,
    sink: &mut S,
) -> Result<()> {
    if employees.is_empty() {
        return Err(ValidationError::NoEmployees);
    }
    if tasks.is_empty() {
        return Err(ValidationError::NoTasks);
    }

    let missing = tasks.iter().filter(|t| t.lead_time.is_none()).count();
    if missing > 0 {
        sink.warn(&Warning::MissingLeadTime { count: missing }.to_string());
    }

    let demand = total_demand(tasks);
    let headcount = employees.len() as u64;

    let capacity = headcount * u64::from(config.capacity_minutes);
    if demand > capacity {
        sink.warn(&Warning::OverCapacity { demand, capacity }.to_string());
    }

    let target = headcount * u64::from(config.target_load_minutes);
    if demand < target {
        sink.warn(&Warning::UnderUtilized { demand, target }.to_string());
    }

    Ok(())
}
