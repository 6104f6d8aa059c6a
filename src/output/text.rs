//! Human-readable text output

use crate::config::{format_minutes, DistributionConfig};
use crate::distributor::{CapacityPolicy, DistributionReport};
use crate::model::{Employee, Task};
use crate::plan::Plan;
use std::fmt::Write;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Print distribution results to console
///
/// Displays:
/// - Pass counts and leftovers
/// - Per-employee load with assigned tasks
/// - Warnings raised during the run
pub fn print_results(
    employees: &[Employee],
    tasks: &[Task],
    report: &DistributionReport,
    config: &DistributionConfig,
    warnings: &[String],
) {
    print!("{}", render_results(employees, tasks, report, config, warnings));
}

/// Render distribution results as text
pub fn render_results(
    employees: &[Employee],
    tasks: &[Task],
    report: &DistributionReport,
    config: &DistributionConfig,
    warnings: &[String],
) -> String {
    let policy = CapacityPolicy::new(config.capacity_minutes);
    let mut out = String::new();

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "                 DISTRIBUTION RESULTS");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    let _ = writeln!(out, "Tasks:");
    let _ = writeln!(out, "  Total:          {}", report.total_tasks);
    let _ = writeln!(out, "  Priority pass:  {}", report.priority_pass.len());
    let _ = writeln!(out, "  Fallback pass:  {}", report.fallback_pass.len());
    let _ = writeln!(out, "  Undistributed:  {}", report.undistributed.len());
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Employees (capacity {} each):",
        format_minutes(policy.ceiling())
    );
    for employee in employees {
        let load = employee.total_lead_time();
        let _ = writeln!(
            out,
            "  {:<24} {:>8} / {:<8} {}",
            employee.label(),
            format_minutes(load),
            format_minutes(policy.ceiling()),
            load_bar(load, policy.ceiling())
        );
        for task in &employee.tasks {
            let _ = writeln!(out, "      {}", describe_task(task));
        }
    }
    let _ = writeln!(out);

    if !report.undistributed.is_empty() {
        let _ = writeln!(out, "Undistributed:");
        for id in &report.undistributed {
            match tasks.iter().find(|t| t.id == *id) {
                Some(task) => {
                    let _ = writeln!(out, "  {}", describe_task(task));
                }
                None => {
                    let _ = writeln!(out, "  #{}", id);
                }
            }
        }
        let _ = writeln!(out);
    }

    if !warnings.is_empty() {
        let _ = writeln!(out, "Warnings:");
        for warning in warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", RULE);
    out
}

/// Print a short plan summary (dry run)
pub fn print_plan_summary(plan: &Plan, config: &DistributionConfig) {
    print!("{}", render_plan_summary(plan, config));
}

/// Render a short plan summary
pub fn render_plan_summary(plan: &Plan, config: &DistributionConfig) -> String {
    let capacity = plan.employees.len() as u64 * u64::from(config.capacity_minutes);
    let unestimated = plan.tasks.iter().filter(|t| t.lead_time.is_none()).count();

    let mut out = String::new();
    let _ = writeln!(out, "Plan:");
    let _ = writeln!(out, "  Employees: {}", plan.employees.len());
    let _ = writeln!(out, "  Tasks:     {} ({} without lead time)", plan.tasks.len(), unestimated);
    let _ = writeln!(out, "  Demand:    {}", format_minutes(plan.demand()));
    let _ = writeln!(out, "  Capacity:  {}", format_minutes(capacity));
    out
}

fn describe_task(task: &Task) -> String {
    let lead = match task.lead_time {
        Some(m) => format_minutes(u64::from(m)),
        None => "n/a".to_string(),
    };
    match &task.name {
        Some(name) => format!("#{} p{} {} {}", task.id, task.priority, lead, name),
        None => format!("#{} p{} {}", task.id, task.priority, lead),
    }
}

/// Twenty-cell bar showing load relative to the ceiling
fn load_bar(load: u64, ceiling: u64) -> String {
    const WIDTH: u64 = 20;
    let filled = if ceiling == 0 {
        0
    } else {
        (load.min(ceiling) * WIDTH / ceiling) as usize
    };
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH as usize - filled))
}
