//! Interface Segregation Principle
//!
//! Anti-pattern replaced: one fat `Employee` interface forcing interns to
//! stub out payroll and task assignment. Here each capability is its own
//! trait and implementers opt into exactly what they support, so a misuse
//! is a compile error instead of a runtime "cannot do that".
//!
//! Run with: cargo run --bin solid_04_isp

use colored::Colorize;
use thiserror::Error;

// =============================================================================
// Three narrow capabilities instead of one broad interface
// =============================================================================

/// Minimal identity every person in the company has.
trait Employee {
    fn name(&self) -> &str;
}

/// Only for people on the payroll.
trait PaidEmployee: Employee {
    fn monthly_pay(&self) -> f64;
}

/// Only for people who can hand out work.
trait TaskAssigner {
    fn assign_task(&self, task: &str, assignee: &dyn Employee)
        -> Result<String, AssignmentError>;
}

#[derive(Error, Debug, PartialEq)]
enum AssignmentError {
    #[error("'{assigner}' is not allowed to assign '{task}'")]
    NotPermitted { assigner: String, task: String },
}

// =============================================================================
// Implementers opt into the capabilities they actually have
// =============================================================================

struct Developer {
    name: String,
    salary: f64,
}

impl Employee for Developer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PaidEmployee for Developer {
    fn monthly_pay(&self) -> f64 {
        self.salary
    }
}

struct Manager {
    name: String,
    salary: f64,
}

impl Employee for Manager {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PaidEmployee for Manager {
    fn monthly_pay(&self) -> f64 {
        self.salary
    }
}

impl TaskAssigner for Manager {
    fn assign_task(
        &self,
        task: &str,
        assignee: &dyn Employee,
    ) -> Result<String, AssignmentError> {
        Ok(format!(
            "Manager {} assigned '{}' to {}",
            self.name,
            task,
            assignee.name()
        ))
    }
}

/// Unpaid, cannot assign work: implements identity and nothing else.
struct Intern {
    name: String,
}

impl Employee for Intern {
    fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Consumers constrained to the minimal capability they need
// =============================================================================

fn process_payroll(employee: &dyn PaidEmployee) -> String {
    format!("Paying {}: {:.2} EUR", employee.name(), employee.monthly_pay())
}

fn assign_work(
    assigner: &dyn TaskAssigner,
    assignee: &dyn Employee,
    task: &str,
) -> Result<String, AssignmentError> {
    assigner.assign_task(task, assignee)
}

fn main() {
    println!("{}", "=== Interface Segregation ===".bold());

    let dev = Developer {
        name: "Alice".to_string(),
        salary: 3000.0,
    };
    let mgr = Manager {
        name: "Bob".to_string(),
        salary: 5000.0,
    };
    let intern = Intern {
        name: "Charlie".to_string(),
    };

    println!("{}", process_payroll(&dev));
    println!("{}", process_payroll(&mgr));
    // process_payroll(&intern); // does not compile: Intern is not a PaidEmployee

    match assign_work(&mgr, &dev, "Implement new feature") {
        Ok(line) => println!("{}", line),
        Err(err) => println!("{}", err.to_string().red()),
    }
    match assign_work(&mgr, &intern, "Review onboarding docs") {
        Ok(line) => println!("{}", line),
        Err(err) => println!("{}", err.to_string().red()),
    }
    // assign_work(&dev, &intern, "Review code"); // does not compile: Developer is not a TaskAssigner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payroll_accepts_every_paid_capability() {
        let dev = Developer {
            name: "Alice".to_string(),
            salary: 3000.0,
        };
        let mgr = Manager {
            name: "Bob".to_string(),
            salary: 5000.0,
        };
        assert_eq!(process_payroll(&dev), "Paying Alice: 3000.00 EUR");
        assert_eq!(process_payroll(&mgr), "Paying Bob: 5000.00 EUR");
    }

    #[test]
    fn manager_assignment_names_both_parties_and_the_task() {
        let mgr = Manager {
            name: "Bob".to_string(),
            salary: 5000.0,
        };
        let intern = Intern {
            name: "Charlie".to_string(),
        };
        let line = assign_work(&mgr, &intern, "File the weekly report").unwrap();
        assert_eq!(line, "Manager Bob assigned 'File the weekly report' to Charlie");
    }

    #[test]
    fn intern_still_satisfies_identity() {
        let intern = Intern {
            name: "Charlie".to_string(),
        };
        assert_eq!(intern.name(), "Charlie");
    }

    #[test]
    fn assignment_error_is_descriptive() {
        let err = AssignmentError::NotPermitted {
            assigner: "Alice".to_string(),
            task: "Review code".to_string(),
        };
        assert_eq!(err.to_string(), "'Alice' is not allowed to assign 'Review code'");
    }
}
