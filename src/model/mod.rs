//! Task and employee model
//!
//! Tasks carry a priority and an optional lead time (minutes). Employees own an
//! ordered list of assigned tasks; their load is derived from that list rather
//! than stored separately, so it can never drift from the assignments.

use serde::{Deserialize, Serialize};

/// Unique identifier for a task
pub type TaskId = u64;
/// Unique identifier for an employee
pub type EmployeeId = u64;
/// Ordinal urgency of a task (lower value = more urgent)
pub type Priority = u32;

/// Unit of work to be distributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable task identifier
    pub id: TaskId,
    /// Short human-readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form category (e.g. "review", "support")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Urgency, sorted ascending during the priority pass
    pub priority: Priority,
    /// Estimated duration in minutes; tasks without one are never assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<u32>,
}

impl Task {
    /// Construct a task with a known lead time
    pub fn new(id: TaskId, priority: Priority, lead_time: u32) -> Self {
        Self {
            id,
            name: None,
            task_type: None,
            description: None,
            priority,
            lead_time: Some(lead_time),
        }
    }

    /// Construct a task whose duration has not been estimated yet
    pub fn unestimated(id: TaskId, priority: Priority) -> Self {
        Self {
            lead_time: None,
            ..Self::new(id, priority, 0)
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Lead time as a wide integer; unestimated tasks count as zero
    pub fn lead_minutes(&self) -> u64 {
        self.lead_time.map(u64::from).unwrap_or(0)
    }
}

/// Worker receiving tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable employee identifier
    pub id: EmployeeId,
    /// Full name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Job title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Assigned tasks in assignment order
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Employee {
    /// Create an employee with no assigned tasks
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            name: None,
            job_title: None,
            tasks: Vec::new(),
        }
    }

    /// Attach a display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sum of lead times over assigned tasks (minutes)
    pub fn total_lead_time(&self) -> u64 {
        self.tasks.iter().map(Task::lead_minutes).sum()
    }

    /// Whether some assigned task already has `priority`
    pub fn has_priority(&self, priority: Priority) -> bool {
        self.tasks.iter().any(|t| t.priority == priority)
    }

    /// Append a task to this employee's list
    pub fn assign(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Label for reports: name when known, otherwise `#id`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{}", self.id),
        }
    }
}
