//! Second pass: least-loaded placement for priority-pass leftovers

use super::capacity::CapacityPolicy;
use super::Assignment;
use crate::model::{Employee, Task};

/// Outcome of the fallback pass
#[derive(Debug, Default)]
pub struct FallbackPassOutcome<'a> {
    pub assigned: Vec<Assignment>,
    /// Tasks that fit nowhere; they stay unassigned
    pub unplaced: Vec<&'a Task>,
}

/// Employee indices ordered by ascending load, ties in input order
fn least_loaded_order(employees: &[Employee]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..employees.len()).collect();
    order.sort_by_key(|&i| employees[i].total_lead_time());
    order
}

/// Run the fallback pass
///
/// The least-loaded order is computed once, before any task is placed. Loads
/// change as tasks land but the order does not, so an employee that was light
/// at the start keeps getting first pick for the rest of the pass. There is no
/// priority check here.
pub fn run<'a>(
    employees: &mut [Employee],
    leftover: &[&'a Task],
    policy: &CapacityPolicy,
) -> FallbackPassOutcome<'a> {
    let order = least_loaded_order(employees);

    let mut outcome = FallbackPassOutcome::default();
    for &task in leftover {
        let slot = order
            .iter()
            .copied()
            .find(|&i| policy.allows(&employees[i], task));

        match slot {
            Some(i) => {
                let employee = &mut employees[i];
                employee.assign(task.clone());
                outcome.assigned.push(Assignment::new(task, employee));
            }
            None => outcome.unplaced.push(task),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_load(id: u64, minutes: u32) -> Employee {
        let mut employee = Employee::new(id);
        if minutes > 0 {
            employee.assign(Task::new(1000 + id, 99, minutes));
        }
        employee
    }

    #[test]
    fn test_order_is_least_loaded_first_and_stable() {
        let employees = vec![with_load(1, 300), with_load(2, 100), with_load(3, 300), with_load(4, 0)];
        assert_eq!(least_loaded_order(&employees), vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_goes_to_least_loaded() {
        let mut employees = vec![with_load(1, 200), with_load(2, 100)];
        let task = Task::new(1, 1, 50);

        let outcome = run(&mut employees, &[&task], &CapacityPolicy::new(420));

        assert_eq!(outcome.assigned, vec![Assignment { task_id: 1, employee_id: 2 }]);
        assert_eq!(employees[1].total_lead_time(), 150);
    }

    #[test]
    fn test_ignores_duplicate_priority() {
        let mut employees = vec![with_load(1, 0)];
        employees[0].assign(Task::new(10, 1, 30));
        let task = Task::new(11, 1, 30);

        let outcome = run(&mut employees, &[&task], &CapacityPolicy::new(420));

        assert_eq!(outcome.assigned.len(), 1);
        assert_eq!(employees[0].tasks.iter().filter(|t| t.priority == 1).count(), 2);
    }

    #[test]
    fn test_order_is_frozen_for_the_whole_pass() {
        // Employee 2 starts lighter, so it is tried first for every task even
        // after it becomes the heavier of the two.
        let mut employees = vec![with_load(1, 100), with_load(2, 90)];
        let tasks = vec![Task::new(1, 1, 150), Task::new(2, 2, 20)];
        let refs: Vec<&Task> = tasks.iter().collect();

        run(&mut employees, &refs, &CapacityPolicy::new(420));

        assert_eq!(employees[1].total_lead_time(), 260);
        assert_eq!(employees[0].total_lead_time(), 100);
    }

    #[test]
    fn test_falls_through_to_next_employee_on_capacity() {
        let mut employees = vec![with_load(1, 100), with_load(2, 90)];
        let tasks = vec![Task::new(1, 1, 300), Task::new(2, 2, 100)];
        let refs: Vec<&Task> = tasks.iter().collect();

        let outcome = run(&mut employees, &refs, &CapacityPolicy::new(420));

        // Employee 2 takes the first task, then 490 would exceed the ceiling
        assert_eq!(
            outcome.assigned,
            vec![
                Assignment { task_id: 1, employee_id: 2 },
                Assignment { task_id: 2, employee_id: 1 },
            ]
        );
        assert!(outcome.unplaced.is_empty());
    }

    #[test]
    fn test_unplaced_when_nothing_fits() {
        let mut employees = vec![with_load(1, 300), with_load(2, 200)];
        let task = Task::new(1, 1, 250);

        let outcome = run(&mut employees, &[&task], &CapacityPolicy::new(420));

        assert!(outcome.assigned.is_empty());
        assert_eq!(outcome.unplaced.len(), 1);
        assert_eq!(employees[0].tasks.len() + employees[1].tasks.len(), 2);
    }

    #[test]
    fn test_preserves_leftover_order() {
        let mut employees = vec![with_load(1, 0)];
        let tasks = vec![Task::new(1, 9, 300), Task::new(2, 1, 300)];
        let refs: Vec<&Task> = tasks.iter().collect();

        let outcome = run(&mut employees, &refs, &CapacityPolicy::new(420));

        // No re-sort by priority: the first leftover wins the capacity
        assert_eq!(employees[0].tasks.last().map(|t| t.id), Some(1));
        assert_eq!(outcome.unplaced[0].id, 2);
    }
}
