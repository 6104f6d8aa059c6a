//! Two-pass greedy task distributor
//!
//! Distribution runs in three steps over caller-owned collections:
//!
//! 1. **Validation**: empty inputs are rejected; suspicious totals are reported
//!    as warnings.
//! 2. **Priority pass**: tasks in ascending priority order go to the first
//!    employee (in the order given) that has no task of that priority yet and
//!    stays under the capacity ceiling.
//! 3. **Fallback pass**: whatever is left goes to the least-loaded employee
//!    that stays under the ceiling, regardless of priority.
//!
//! The distributor only ever appends to `Employee::tasks`. It is a heuristic,
//! not a solver: running it twice on the same employees is not a no-op.
//!
//! # Example
//!
//! ```
//! use taskdist::distributor::Distributor;
//! use taskdist::diagnostics::RecordingSink;
//! use taskdist::model::{Employee, Task};
//!
//! let mut employees = vec![Employee::new(1), Employee::new(2)];
//! let tasks = vec![Task::new(1, 1, 100), Task::new(2, 2, 100), Task::new(3, 1, 100)];
//!
//! let mut distributor = Distributor::with_sink(Default::default(), RecordingSink::new());
//! let report = distributor.distribute(&mut employees, &tasks).unwrap();
//!
//! assert!(report.is_complete());
//! assert_eq!(employees[0].tasks.len(), 2);
//! assert_eq!(employees[1].tasks.len(), 1);
//! ```

pub mod capacity;
pub mod errors;
pub mod fallback_pass;
pub mod priority_pass;
pub mod validation;

pub use capacity::CapacityPolicy;
pub use errors::ValidationError;

use crate::config::DistributionConfig;
use crate::diagnostics::{DiagnosticsSink, TracingSink, Warning};
use crate::model::{Employee, EmployeeId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A single task placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub task_id: TaskId,
    pub employee_id: EmployeeId,
}

impl Assignment {
    pub fn new(task: &Task, employee: &Employee) -> Self {
        Self {
            task_id: task.id,
            employee_id: employee.id,
        }
    }
}

/// What a distribution run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionReport {
    /// Number of input tasks, including unestimated ones
    pub total_tasks: usize,
    /// Placements made by the priority pass
    pub priority_pass: Vec<Assignment>,
    /// Placements made by the fallback pass
    pub fallback_pass: Vec<Assignment>,
    /// Input tasks left without an employee, in input order
    pub undistributed: Vec<TaskId>,
}

impl DistributionReport {
    /// Tasks placed by this run
    pub fn assigned_count(&self) -> usize {
        self.priority_pass.len() + self.fallback_pass.len()
    }

    /// Whether every input task was placed
    pub fn is_complete(&self) -> bool {
        self.undistributed.is_empty()
    }

    /// All placements, priority pass first
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.priority_pass.iter().chain(self.fallback_pass.iter())
    }
}

/// Distributes tasks across employees, reporting warnings to `S`
#[derive(Debug)]
pub struct Distributor<S = TracingSink> {
    config: DistributionConfig,
    policy: CapacityPolicy,
    sink: S,
}

impl Distributor<TracingSink> {
    /// Distributor that reports warnings through `tracing`
    pub fn new(config: DistributionConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl Default for Distributor<TracingSink> {
    fn default() -> Self {
        Self::new(DistributionConfig::default())
    }
}

impl<S: DiagnosticsSink> Distributor<S> {
    pub fn with_sink(config: DistributionConfig, sink: S) -> Self {
        Self {
            policy: CapacityPolicy::new(config.capacity_minutes),
            config,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Distribute `tasks` across `employees`
    ///
    /// Appends clones of the placed tasks to each employee's task list. Fails
    /// only when either input is empty, in which case nothing is touched.
    /// Every other problem is reported to the sink and the run completes.
    pub fn distribute(
        &mut self,
        employees: &mut [Employee],
        tasks: &[Task],
    ) -> Result<DistributionReport, ValidationError> {
        validation::validate(employees, tasks, &self.config, &mut self.sink)?;

        tracing::debug!(
            tasks = tasks.len(),
            employees = employees.len(),
            "starting distribution"
        );

        let first = priority_pass::run(employees, tasks, &self.policy);
        tracing::debug!(
            assigned = first.assigned.len(),
            leftover = first.leftover.len(),
            "priority pass finished"
        );

        let second = if first.leftover.is_empty() {
            fallback_pass::FallbackPassOutcome::default()
        } else {
            let outcome = fallback_pass::run(employees, &first.leftover, &self.policy);
            tracing::debug!(
                assigned = outcome.assigned.len(),
                unplaced = outcome.unplaced.len(),
                "fallback pass finished"
            );
            outcome
        };

        // Counts everything employees hold, including tasks they arrived with
        let held: usize = employees.iter().map(|e| e.tasks.len()).sum();
        if held < tasks.len() {
            self.sink.warn(
                &Warning::Undistributed {
                    assigned: held,
                    total: tasks.len(),
                }
                .to_string(),
            );
        }

        let undistributed = tasks
            .iter()
            .filter(|t| {
                t.lead_time.is_none() || second.unplaced.iter().any(|u| std::ptr::eq(*u, *t))
            })
            .map(|t| t.id)
            .collect();

        let report = DistributionReport {
            total_tasks: tasks.len(),
            priority_pass: first.assigned,
            fallback_pass: second.assigned,
            undistributed,
        };

        tracing::debug!(
            tasks = tasks.len(),
            employees = employees.len(),
            assigned = report.assigned_count(),
            "distribution finished"
        );

        Ok(report)
    }
}

/// Distribute with default limits, reporting warnings through `tracing`
pub fn distribute(
    employees: &mut [Employee],
    tasks: &[Task],
) -> Result<DistributionReport, ValidationError> {
    Distributor::default().distribute(employees, tasks)
}
