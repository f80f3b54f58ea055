use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::storage::kv::{EMPLOYEES_KEY, KeyValueStore};
use crate::storage::models::{Employee, EmployeeInput};

/// Employee roster with explicit save-on-mutation at the store boundary.
#[derive(Clone)]
pub struct EmployeeRoster {
    store: Arc<dyn KeyValueStore>,
    employees: Vec<Employee>,
}

impl EmployeeRoster {
    /// Load the roster snapshot from the key-value store; a missing key is an
    /// empty roster.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let employees = match store.get(EMPLOYEES_KEY)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        Ok(EmployeeRoster { store, employees })
    }

    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Case-insensitive match against name or role.
    pub fn search(&self, term: &str) -> Vec<&Employee> {
        let term = term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&term)
                    || e.role.to_string().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Register a new employee under the next unused numeric id.
    pub fn add(&mut self, input: EmployeeInput) -> Result<Employee> {
        validate(&input)?;

        let employee = Employee {
            id: self.next_id().to_string(),
            name: input.name.trim().to_string(),
            role: input.role,
            salary: input.salary,
            status: input.status,
            join_date: input.join_date,
        };

        log::info!("Registering employee {} ({})", employee.id, employee.name);
        self.employees.push(employee.clone());
        self.save()?;
        Ok(employee)
    }

    pub fn update(&mut self, id: &str, input: EmployeeInput) -> Result<Employee> {
        validate(&input)?;

        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found(format!("employee {id}")))?;

        employee.name = input.name.trim().to_string();
        employee.role = input.role;
        employee.salary = input.salary;
        employee.status = input.status;
        employee.join_date = input.join_date;
        let updated = employee.clone();

        self.save()?;
        Ok(updated)
    }

    /// Remove an employee from the roster. Attendance and payroll history for
    /// the id stays behind, orphaned rather than cascade-deleted.
    pub fn remove(&mut self, id: &str) -> Result<Employee> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::not_found(format!("employee {id}")))?;

        let removed = self.employees.remove(index);
        log::info!("Removed employee {} ({})", removed.id, removed.name);
        self.save()?;
        Ok(removed)
    }

    /// Sum of monthly base salaries across the roster; feeds the tax report.
    pub fn total_base_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Highest numeric id currently present plus one. Non-numeric ids are
    /// ignored; ids are never reused within a roster snapshot.
    fn next_id(&self) -> u64 {
        self.employees
            .iter()
            .filter_map(|e| e.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1
    }

    fn save(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.employees)?;
        self.store.put(EMPLOYEES_KEY, &blob)?;
        Ok(())
    }
}

fn validate(input: &EmployeeInput) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(AppError::validation("employee name must not be empty"));
    }
    if input.salary < 0.0 {
        return Err(AppError::validation("monthly salary must not be negative"));
    }
    Ok(())
}
