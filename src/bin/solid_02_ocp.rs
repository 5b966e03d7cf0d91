//! Open/Closed Principle
//!
//! Anti-pattern replaced: `salary()` branching on a role *label* (`"SWE"`,
//! `"SSWE"`), so every new tier means editing the branch. Here the role is a
//! strategy trait; a new tier is a new type and the call site never changes.
//!
//! Run with: cargo run --bin solid_02_ocp

use colored::Colorize;

// =============================================================================
// Strategy trait: one deterministic, parameterless computation per tier
// =============================================================================

trait Role {
    fn salary(&self) -> u32;
}

struct SoftwareEngineer;

impl Role for SoftwareEngineer {
    fn salary(&self) -> u32 {
        3000
    }
}

struct SeniorSoftwareEngineer;

impl Role for SeniorSoftwareEngineer {
    fn salary(&self) -> u32 {
        5000
    }
}

/// Added after the fact: no existing code had to change to support it.
struct PrincipalEngineer;

impl Role for PrincipalEngineer {
    fn salary(&self) -> u32 {
        8000
    }
}

// =============================================================================
// The record holds a role implementer, not a role label
// =============================================================================

struct Employee {
    name: String,
    role: Box<dyn Role>,
}

impl Employee {
    fn new(name: &str, role: Box<dyn Role>) -> Self {
        Self {
            name: name.to_string(),
            role,
        }
    }

    // Closed for modification: delegates to whatever tier was injected.
    fn salary(&self) -> u32 {
        self.role.salary()
    }
}

fn main() {
    println!("{}", "=== Open/Closed ===".bold());

    let employees = vec![
        Employee::new("Mohamed", Box::new(SoftwareEngineer)),
        Employee::new("Ahmed", Box::new(SeniorSoftwareEngineer)),
        Employee::new("Sara", Box::new(PrincipalEngineer)),
    ];

    for employee in &employees {
        println!("{} earns {}", employee.name, employee.salary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tier_pays_its_fixed_amount() {
        assert_eq!(SoftwareEngineer.salary(), 3000);
        assert_eq!(SeniorSoftwareEngineer.salary(), 5000);
        assert_eq!(PrincipalEngineer.salary(), 8000);
    }

    #[test]
    fn salary_is_deterministic_across_calls() {
        let employee = Employee::new("Mohamed", Box::new(SoftwareEngineer));
        assert_eq!(employee.salary(), employee.salary());
    }

    #[test]
    fn employee_delegates_to_injected_role() {
        let junior = Employee::new("Mohamed", Box::new(SoftwareEngineer));
        let senior = Employee::new("Ahmed", Box::new(SeniorSoftwareEngineer));
        assert_eq!(junior.salary(), 3000);
        assert_eq!(senior.salary(), 5000);
    }
}
