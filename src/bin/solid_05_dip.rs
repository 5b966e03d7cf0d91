//! Dependency Inversion Principle
//!
//! Anti-pattern replaced: an `EmployeeManager` holding a concrete
//! `MySqlDatabase` field, so switching storage means editing the manager.
//! Here the manager holds only the `EmployeeRepository` trait; each backend
//! is an in-memory stand-in a real adapter would replace unchanged.
//!
//! Run with: cargo run --bin solid_05_dip

use colored::Colorize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    name: String,
    salary: u32,
}

impl Employee {
    fn new(name: &str, salary: u32) -> Self {
        Self {
            name: name.to_string(),
            salary,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
enum RepositoryError {
    #[error("no employee named '{0}'")]
    NotFound(String),
}

// =============================================================================
// The abstraction both the manager and the backends depend on
// =============================================================================

trait EmployeeRepository {
    /// Persists the record and returns the backend-labelled status line.
    fn save(&mut self, employee: &Employee) -> Result<String, RepositoryError>;
    fn find_by_name(&self, name: &str) -> Result<Employee, RepositoryError>;
}

// =============================================================================
// Low-level modules: three interchangeable in-memory backends
// =============================================================================

#[derive(Default)]
struct MySqlRepository {
    rows: HashMap<String, Employee>,
}

impl EmployeeRepository for MySqlRepository {
    fn save(&mut self, employee: &Employee) -> Result<String, RepositoryError> {
        self.rows.insert(employee.name.clone(), employee.clone());
        Ok(format!("Saving employee '{}' to MySQL database", employee.name))
    }

    fn find_by_name(&self, name: &str) -> Result<Employee, RepositoryError> {
        self.rows
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }
}

#[derive(Default)]
struct PostgresRepository {
    rows: HashMap<String, Employee>,
}

impl EmployeeRepository for PostgresRepository {
    fn save(&mut self, employee: &Employee) -> Result<String, RepositoryError> {
        self.rows.insert(employee.name.clone(), employee.clone());
        Ok(format!(
            "Saving employee '{}' to PostgreSQL database",
            employee.name
        ))
    }

    fn find_by_name(&self, name: &str) -> Result<Employee, RepositoryError> {
        self.rows
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }
}

#[derive(Default)]
struct MongoRepository {
    documents: HashMap<String, Employee>,
}

impl EmployeeRepository for MongoRepository {
    fn save(&mut self, employee: &Employee) -> Result<String, RepositoryError> {
        self.documents.insert(employee.name.clone(), employee.clone());
        Ok(format!(
            "Saving employee '{}' to MongoDB database",
            employee.name
        ))
    }

    fn find_by_name(&self, name: &str) -> Result<Employee, RepositoryError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }
}

// =============================================================================
// High-level module: depends on the abstraction, never on a backend
// =============================================================================

struct EmployeeManager {
    repository: Box<dyn EmployeeRepository>,
}

impl EmployeeManager {
    fn new(repository: Box<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    fn add_employee(&mut self, employee: &Employee) -> Result<String, RepositoryError> {
        self.repository.save(employee)
    }

    fn find_employee(&self, name: &str) -> Result<String, RepositoryError> {
        let employee = self.repository.find_by_name(name)?;
        Ok(format!(
            "Found employee: {}, Salary: {}",
            employee.name, employee.salary
        ))
    }
}

fn run_scenario(mut manager: EmployeeManager, employee: &Employee) {
    match manager.add_employee(employee) {
        Ok(line) => println!("{}", line),
        Err(err) => println!("{}", err.to_string().red()),
    }
    match manager.find_employee(&employee.name) {
        Ok(line) => println!("{}", line.green()),
        Err(err) => println!("{}", err.to_string().red()),
    }
}

fn main() {
    println!("{}", "=== Dependency Inversion ===".bold());

    // One construction path, three backends, zero manager changes.
    run_scenario(
        EmployeeManager::new(Box::new(MySqlRepository::default())),
        &Employee::new("Mohamed", 5000),
    );
    println!();
    run_scenario(
        EmployeeManager::new(Box::new(PostgresRepository::default())),
        &Employee::new("Ahmed", 6000),
    );
    println!();
    run_scenario(
        EmployeeManager::new(Box::new(MongoRepository::default())),
        &Employee::new("Ali", 4500),
    );
}
