use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::model::{
    Branch, BranchUpdate, Employee, EmployeeUpdate, Id, NewBranch, NewEmployee,
};
use crate::store::traits::{BranchStore, EmployeeStore, Store};

/// Process-memory storage backend.
///
/// Both collections live in id-keyed maps behind their own lock; nothing
/// survives a restart. Locks are held per operation only, so a read-check-
/// write sequence spanning two calls can interleave with other requests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    branches: RwLock<BTreeMap<Id, Branch>>,
    employees: RwLock<BTreeMap<Id, Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Smallest positive id not currently used as a key.
fn lowest_free_id<V>(records: &BTreeMap<Id, V>) -> Id {
    let mut id: Id = 1;
    while records.contains_key(&id) {
        id += 1;
    }
    id
}

#[async_trait::async_trait]
impl BranchStore for MemoryStore {
    async fn list_branches(&self) -> Result<Vec<Branch>, ApiError> {
        Ok(self.branches.read().values().cloned().collect())
    }

    async fn get_branch(&self, id: Id) -> Result<Option<Branch>, ApiError> {
        Ok(self.branches.read().get(&id).cloned())
    }

    async fn create_branch(&self, new_branch: NewBranch) -> Result<Branch, ApiError> {
        let mut branches = self.branches.write();
        let id = lowest_free_id(&branches);
        let branch = new_branch.into_branch(id);
        branches.insert(id, branch.clone());
        log::debug!("created branch {}", id);
        Ok(branch)
    }

    async fn update_branch(&self, id: Id, update: BranchUpdate) -> Result<Branch, ApiError> {
        let mut branches = self.branches.write();
        let branch = branches
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found("Branch", id))?;
        branch.apply_update(update);
        Ok(branch.clone())
    }

    async fn delete_branch(&self, id: Id) -> Result<(), ApiError> {
        match self.branches.write().remove(&id) {
            Some(_) => {
                log::debug!("deleted branch {}", id);
                Ok(())
            }
            None => Err(ApiError::not_found("Branch", id)),
        }
    }
}

#[async_trait::async_trait]
impl EmployeeStore for MemoryStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        Ok(self.employees.read().values().cloned().collect())
    }

    async fn get_employee(&self, id: Id) -> Result<Option<Employee>, ApiError> {
        Ok(self.employees.read().get(&id).cloned())
    }

    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, ApiError> {
        let mut employees = self.employees.write();
        let id = lowest_free_id(&employees);
        let employee = new_employee.into_employee(id);
        employees.insert(id, employee.clone());
        log::debug!("created employee {}", id);
        Ok(employee)
    }

    async fn update_employee(&self, id: Id, update: EmployeeUpdate) -> Result<Employee, ApiError> {
        let mut employees = self.employees.write();
        let employee = employees
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found("Employee", id))?;
        employee.apply_update(update);
        Ok(employee.clone())
    }

    async fn delete_employee(&self, id: Id) -> Result<(), ApiError> {
        match self.employees.write().remove(&id) {
            Some(_) => {
                log::debug!("deleted employee {}", id);
                Ok(())
            }
            None => Err(ApiError::not_found("Employee", id)),
        }
    }
}

impl Store for MemoryStore {}
