use crate::error::ApiError;
use crate::model::{
    Branch, BranchUpdate, Employee, EmployeeUpdate, Id, NewBranch, NewEmployee,
};

/// Storage contract for branch records.
///
/// Reads hand back owned copies; mutating a returned record never touches
/// the backing collection. `get` answers `Ok(None)` for an unknown id,
/// while `update` and `delete` fail with `ApiError::NotFound`. `create`
/// assigns the smallest unused positive id and returns the stored record.
#[async_trait::async_trait]
pub trait BranchStore: Send + Sync {
    async fn list_branches(&self) -> Result<Vec<Branch>, ApiError>;
    async fn get_branch(&self, id: Id) -> Result<Option<Branch>, ApiError>;
    async fn create_branch(&self, new_branch: NewBranch) -> Result<Branch, ApiError>;
    async fn update_branch(&self, id: Id, update: BranchUpdate) -> Result<Branch, ApiError>;
    async fn delete_branch(&self, id: Id) -> Result<(), ApiError>;
}

/// Storage contract for employee records, same shape and semantics as
/// [`BranchStore`]. The `branch_id` field is stored verbatim; no backend
/// checks that the referenced branch exists.
#[async_trait::async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;
    async fn get_employee(&self, id: Id) -> Result<Option<Employee>, ApiError>;
    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, ApiError>;
    async fn update_employee(&self, id: Id, update: EmployeeUpdate) -> Result<Employee, ApiError>;
    async fn delete_employee(&self, id: Id) -> Result<(), ApiError>;
}

/// Combined storage surface the service and API layers are generic over.
pub trait Store: BranchStore + EmployeeStore + Send + Sync {}
