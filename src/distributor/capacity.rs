//! Capacity predicate shared by both passes

use crate::model::{Employee, Task};

/// Per-employee ceiling on cumulative lead time
///
/// The ceiling is exclusive: an employee whose total would land exactly on it
/// is rejected, as is one already at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    ceiling: u64,
}

impl CapacityPolicy {
    pub fn new(ceiling_minutes: u32) -> Self {
        Self {
            ceiling: u64::from(ceiling_minutes),
        }
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// Whether `employee` can take `task` and stay strictly under the ceiling
    pub fn allows(&self, employee: &Employee, task: &Task) -> bool {
        let current = employee.total_lead_time();
        current < self.ceiling && current + task.lead_minutes() < self.ceiling
    }

    /// Minutes left before the ceiling (zero when at or over it)
    pub fn headroom(&self, employee: &Employee) -> u64 {
        self.ceiling.saturating_sub(employee.total_lead_time())
    }
}
