//! Liskov Substitution Principle
//!
//! Two employment types satisfy the same contract: one stores a salary,
//! the other derives it from rate and hours. The shared consumer must emit
//! the same shape of output for either, with no type-specific branching.
//!
//! Run with: cargo run --bin solid_03_lsp

use colored::Colorize;

// =============================================================================
// The contract every employment type must honor
// =============================================================================

trait BaseEmployee {
    fn name(&self) -> &str;
    fn salary(&self) -> u32;
}

struct FullTimeEmployee {
    name: String,
    salary: u32,
}

impl BaseEmployee for FullTimeEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u32 {
        self.salary
    }
}

struct ContractorEmployee {
    name: String,
    hourly_rate: u32,
    hours_worked: u32,
}

impl BaseEmployee for ContractorEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn salary(&self) -> u32 {
        self.hourly_rate * self.hours_worked
    }
}

// =============================================================================
// Shared consumer: identical control flow for every implementer
// =============================================================================

fn employee_info(employee: &dyn BaseEmployee) -> String {
    format!("Name: {}, Salary: {}", employee.name(), employee.salary())
}

fn main() {
    println!("{}", "=== Liskov Substitution ===".bold());

    let full_time = FullTimeEmployee {
        name: "Mohamed".to_string(),
        salary: 5000,
    };
    let contractor = ContractorEmployee {
        name: "Ahmed".to_string(),
        hourly_rate: 120,
        hours_worked: 10,
    };

    // Either concrete type substitutes for the other without breaking the caller.
    println!("{}", employee_info(&full_time));
    println!("{}", employee_info(&contractor));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_full_time() -> FullTimeEmployee {
        FullTimeEmployee {
            name: "Mohamed".to_string(),
            salary: 5000,
        }
    }

    fn sample_contractor() -> ContractorEmployee {
        ContractorEmployee {
            name: "Ahmed".to_string(),
            hourly_rate: 120,
            hours_worked: 10,
        }
    }

    #[test]
    fn contractor_salary_is_rate_times_hours() {
        assert_eq!(sample_contractor().salary(), 1200);
    }

    #[test]
    fn full_time_salary_is_the_stored_amount() {
        assert_eq!(sample_full_time().salary(), 5000);
    }

    #[test]
    fn consumer_output_has_identical_shape_for_both_types() {
        assert_eq!(
            employee_info(&sample_full_time()),
            "Name: Mohamed, Salary: 5000"
        );
        assert_eq!(
            employee_info(&sample_contractor()),
            "Name: Ahmed, Salary: 1200"
        );
    }

    #[test]
    fn consumer_accepts_a_mixed_collection() {
        let staff: Vec<Box<dyn BaseEmployee>> =
            vec![Box::new(sample_full_time()), Box::new(sample_contractor())];
        for member in &staff {
            let line = employee_info(member.as_ref());
            assert!(line.starts_with("Name: "));
            assert!(line.contains(", Salary: "));
        }
    }
}
