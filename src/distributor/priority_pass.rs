//! First pass: spread distinct priorities, first-fit in employee order

use super::capacity::CapacityPolicy;
use super::Assignment;
use crate::model::{Employee, Task};

/// Outcome of the priority pass
#[derive(Debug, Default)]
pub struct PriorityPassOutcome<'a> {
    /// Placements made by this pass, in the order they happened
    pub assigned: Vec<Assignment>,
    /// Estimated tasks no employee could take, in priority order
    pub leftover: Vec<&'a Task>,
}

/// Run the priority pass
///
/// Tasks without a lead time are dropped. The rest are processed in ascending
/// priority order (stable, so equal priorities keep their input order). Each
/// task goes to the first employee, in the order given, that does not already
/// hold a task of the same priority and stays under the ceiling.
pub fn run<'a>(
    employees: &mut [Employee],
    tasks: &'a [Task],
    policy: &CapacityPolicy,
) -> PriorityPassOutcome<'a> {
    let mut sorted: Vec<&Task> = tasks.iter().filter(|t| t.lead_time.is_some()).collect();
    sorted.sort_by_key(|t| t.priority);

    let mut outcome = PriorityPassOutcome::default();
    for task in sorted {
        let slot = employees
            .iter_mut()
            .find(|e| !e.has_priority(task.priority) && policy.allows(e, task));

        match slot {
            Some(employee) => {
                employee.assign(task.clone());
                outcome.assigned.push(Assignment::new(task, employee));
            }
            None => outcome.leftover.push(task),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(n: u64) -> Vec<Employee> {
        (1..=n).map(Employee::new).collect()
    }

    fn ids(employee: &Employee) -> Vec<u64> {
        employee.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_first_fit_in_employee_order() {
        let mut employees = team(3);
        let tasks = vec![Task::new(1, 1, 60), Task::new(2, 2, 60), Task::new(3, 3, 60)];

        let outcome = run(&mut employees, &tasks, &CapacityPolicy::new(420));

        // Distinct priorities all fit on the first employee
        assert_eq!(ids(&employees[0]), vec![1, 2, 3]);
        assert!(employees[1].tasks.is_empty());
        assert!(employees[2].tasks.is_empty());
        assert_eq!(outcome.assigned.len(), 3);
        assert!(outcome.leftover.is_empty());
    }

    #[test]
    fn test_same_priority_moves_to_next_employee() {
        let mut employees = team(2);
        let tasks = vec![Task::new(1, 1, 100), Task::new(2, 2, 100), Task::new(3, 1, 100)];

        run(&mut employees, &tasks, &CapacityPolicy::new(420));

        // Sorted order is 1, 3 (both priority 1), then 2
        assert_eq!(ids(&employees[0]), vec![1, 2]);
        assert_eq!(ids(&employees[1]), vec![3]);
    }

    #[test]
    fn test_leftover_when_priority_taken_everywhere() {
        let mut employees = team(2);
        let tasks = vec![Task::new(1, 5, 30), Task::new(2, 5, 30), Task::new(3, 5, 30)];

        let outcome = run(&mut employees, &tasks, &CapacityPolicy::new(420));

        assert_eq!(ids(&employees[0]), vec![1]);
        assert_eq!(ids(&employees[1]), vec![2]);
        assert_eq!(outcome.leftover.len(), 1);
        assert_eq!(outcome.leftover[0].id, 3);
    }

    #[test]
    fn test_capacity_skips_full_employee() {
        let mut employees = team(2);
        let tasks = vec![Task::new(1, 1, 400), Task::new(2, 2, 100)];

        run(&mut employees, &tasks, &CapacityPolicy::new(420));

        assert_eq!(ids(&employees[0]), vec![1]);
        assert_eq!(ids(&employees[1]), vec![2]);
    }

    #[test]
    fn test_unestimated_tasks_are_dropped() {
        let mut employees = team(1);
        let tasks = vec![Task::unestimated(1, 1), Task::new(2, 2, 10)];

        let outcome = run(&mut employees, &tasks, &CapacityPolicy::new(420));

        assert_eq!(ids(&employees[0]), vec![2]);
        // Dropped tasks are not carried to the next pass either
        assert!(outcome.leftover.is_empty());
    }

    #[test]
    fn test_processes_lowest_priority_value_first() {
        let mut employees = team(1);
        let tasks = vec![Task::new(1, 9, 200), Task::new(2, 1, 200), Task::new(3, 4, 200)];

        let outcome = run(&mut employees, &tasks, &CapacityPolicy::new(420));

        // 2 then 3 fill 400 minutes; 1 no longer fits
        assert_eq!(ids(&employees[0]), vec![2, 3]);
        assert_eq!(outcome.leftover.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_existing_assignments_block_priority() {
        let mut employees = team(2);
        employees[0].assign(Task::new(50, 1, 30));
        let tasks = vec![Task::new(1, 1, 30)];

        let outcome = run(&mut employees, &tasks, &CapacityPolicy::new(420));

        assert_eq!(ids(&employees[1]), vec![1]);
        assert_eq!(outcome.assigned[0].employee_id, 2);
    }
}
