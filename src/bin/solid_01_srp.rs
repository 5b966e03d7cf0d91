//! Single Responsibility Principle
//!
//! Anti-pattern replaced: an `Employee` that formats its own name, exposes
//! its email *and* saves itself to a database. Here the record only holds
//! data and the store only persists; neither reaches into the other's job.
//!
//! Run with: cargo run --bin solid_01_srp

use colored::Colorize;

// =============================================================================
// Data holder: knows its fields, performs no I/O
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    first_name: String,
    last_name: String,
    email: String,
}

impl Employee {
    fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    fn email(&self) -> &str {
        &self.email
    }
}

// =============================================================================
// Persistence stub: receives a fully formed record, owns only the save action
// =============================================================================

struct EmployeeStore;

impl EmployeeStore {
    /// Placeholder for a real database write. Returns the status line it
    /// would log so callers decide where it goes.
    fn save(&self, employee: &Employee) -> String {
        format!("Saving employee '{}' to the store", employee.full_name())
    }
}

fn main() {
    println!("{}", "=== Single Responsibility ===".bold());

    let employee = Employee::new("Mohamed", "Habib", "mohamed@gmail.com");
    println!("Full name: {}", employee.full_name());
    println!("Email: {}", employee.email());

    // The record never saves itself; persistence is a separate responsibility.
    let store = EmployeeStore;
    println!("{}", store.save(&employee).green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_first_and_last() {
        let employee = Employee::new("Mohamed", "Habib", "mohamed@gmail.com");
        assert_eq!(employee.full_name(), "Mohamed Habib");
    }

    #[test]
    fn email_accessor_returns_stored_value() {
        let employee = Employee::new("Mohamed", "Habib", "mohamed@gmail.com");
        assert_eq!(employee.email(), "mohamed@gmail.com");
    }

    #[test]
    fn store_reports_which_record_it_saved() {
        let employee = Employee::new("Mohamed", "Habib", "mohamed@gmail.com");
        let line = EmployeeStore.save(&employee);
        assert!(line.contains("Mohamed Habib"));
    }

    #[test]
    fn save_leaves_the_record_untouched() {
        let employee = Employee::new("Mohamed", "Habib", "mohamed@gmail.com");
        let before = employee.clone();
        EmployeeStore.save(&employee);
        assert_eq!(employee, before);
    }
}
