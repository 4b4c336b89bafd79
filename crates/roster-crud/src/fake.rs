// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory repository for unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use roster_core::{
    Department, DepartmentRepository, Employee, EmployeePatch, EmployeeRepository, Gender,
    NewEmployee, RosterError,
};

#[derive(Default)]
struct State {
    next_id: i64,
    employees: BTreeMap<i64, Employee>,
}

pub struct MemoryRepository {
    state: Mutex<State>,
    departments: Vec<Department>,
    failing: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
            departments: vec![
                Department {
                    dept_id: 1,
                    dept_name: "Development".into(),
                },
                Department {
                    dept_id: 2,
                    dept_name: "Testing".into(),
                },
            ],
            failing: false,
        }
    }

    /// Every call returns a storage error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn with_names(names: &[&str]) -> Self {
        let repo = Self::new();
        for name in names {
            repo.seed(name);
        }
        repo
    }

    pub fn with_employees(n: usize) -> Self {
        let repo = Self::new();
        for i in 0..n {
            repo.seed(&format!("employee_{i:04}"));
        }
        repo
    }

    pub fn seed(&self, name: &str) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.employees.insert(
            id,
            Employee {
                emp_id: id,
                emp_name: name.to_string(),
                gender: Gender::M,
                email: format!("{id}@example.com"),
                d_id: Some(1),
                department: Some(self.departments[0].clone()),
            },
        );
        id
    }

    pub fn snapshot(&self, id: i64) -> Option<Employee> {
        self.state.lock().unwrap().employees.get(&id).cloned()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.state.lock().unwrap().employees.keys().copied().collect()
    }

    fn check(&self) -> Result<(), RosterError> {
        if self.failing {
            Err(RosterError::storage("memory repository is failing"))
        } else {
            Ok(())
        }
    }

    fn department(&self, id: i64) -> Result<Department, RosterError> {
        self.departments
            .iter()
            .find(|d| d.dept_id == id)
            .cloned()
            .ok_or(RosterError::Conflict {
                field: "dId",
                message: "department does not exist".into(),
            })
    }
}

fn name_taken() -> RosterError {
    RosterError::Conflict {
        field: "empName",
        message: "employee name is already taken".into(),
    }
}

#[async_trait]
impl EmployeeRepository for MemoryRepository {
    async fn list_all(&self) -> Result<Vec<Employee>, RosterError> {
        self.check()?;
        Ok(self.state.lock().unwrap().employees.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, RosterError> {
        self.check()?;
        Ok(self.state.lock().unwrap().employees.len() as u64)
    }

    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Employee>, RosterError> {
        self.check()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .employees
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, RosterError> {
        self.check()?;
        Ok(self.snapshot(id))
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, RosterError> {
        self.check()?;
        let department = self.department(employee.d_id)?;
        let mut state = self.state.lock().unwrap();
        if state
            .employees
            .values()
            .any(|e| e.emp_name == employee.emp_name)
        {
            return Err(name_taken());
        }
        state.next_id += 1;
        let id = state.next_id;
        state.employees.insert(
            id,
            Employee {
                emp_id: id,
                emp_name: employee.emp_name.clone(),
                gender: employee.gender,
                email: employee.email.clone(),
                d_id: Some(employee.d_id),
                department: Some(department),
            },
        );
        Ok(id)
    }

    async fn update_selective(&self, id: i64, patch: &EmployeePatch) -> Result<u64, RosterError> {
        self.check()?;
        if patch.is_empty() {
            return Ok(0);
        }
        let department = match patch.d_id {
            Some(Some(d)) => Some(Some(self.department(d)?)),
            Some(None) => Some(None),
            None => None,
        };
        let mut state = self.state.lock().unwrap();
        if let Some(name) = &patch.emp_name
            && state
                .employees
                .values()
                .any(|e| e.emp_id != id && &e.emp_name == name)
        {
            return Err(name_taken());
        }
        let Some(emp) = state.employees.get_mut(&id) else {
            return Ok(0);
        };
        if let Some(name) = &patch.emp_name {
            emp.emp_name = name.clone();
        }
        if let Some(gender) = patch.gender {
            emp.gender = gender;
        }
        if let Some(email) = &patch.email {
            emp.email = email.clone();
        }
        if let Some(d_id) = patch.d_id {
            emp.d_id = d_id;
        }
        if let Some(department) = department {
            emp.department = department;
        }
        Ok(1)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RosterError> {
        self.check()?;
        Ok(self.state.lock().unwrap().employees.remove(&id).map_or(0, |_| 1))
    }

    async fn delete_by_ids(&self, ids: &[i64]) -> Result<u64, RosterError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter(|id| state.employees.remove(*id).is_some())
            .count() as u64)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, RosterError> {
        self.check()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .employees
            .values()
            .any(|e| e.emp_name == name))
    }
}

#[async_trait]
impl DepartmentRepository for MemoryRepository {
    async fn list_all(&self) -> Result<Vec<Department>, RosterError> {
        self.check()?;
        Ok(self.departments.clone())
    }
}
