use crate::error::ApiError;
use crate::model::{Employee, EmployeeUpdate, Id, NewEmployee};
use crate::store::traits::Store;

/// Employee business operations, generic over the storage backend.
pub struct EmployeeOperations;

impl EmployeeOperations {
    pub async fn get_all<S: Store>(store: &S) -> Result<Vec<Employee>, ApiError> {
        store.list_employees().await
    }

    /// Single employee, `None` when the id is unknown.
    pub async fn get_by_id<S: Store>(store: &S, id: Id) -> Result<Option<Employee>, ApiError> {
        store.get_employee(id).await
    }

    /// Employees assigned to one branch, by exact `branchId` match. A
    /// branch id nobody points at yields an empty list, not an error.
    pub async fn for_branch<S: Store>(store: &S, branch_id: Id) -> Result<Vec<Employee>, ApiError> {
        let employees = store.list_employees().await?;
        Ok(employees
            .into_iter()
            .filter(|employee| employee.branch_id == branch_id)
            .collect())
    }

    /// Employees in one department. Matching is case-insensitive but
    /// otherwise exact, no substring search.
    pub async fn for_department<S: Store>(
        store: &S,
        department: &str,
    ) -> Result<Vec<Employee>, ApiError> {
        let wanted = department.to_lowercase();
        let employees = store.list_employees().await?;
        Ok(employees
            .into_iter()
            .filter(|employee| employee.department.to_lowercase() == wanted)
            .collect())
    }

    pub async fn create<S: Store>(
        store: &S,
        new_employee: NewEmployee,
    ) -> Result<Employee, ApiError> {
        store.create_employee(new_employee).await
    }

    pub async fn update<S: Store>(
        store: &S,
        id: Id,
        update: EmployeeUpdate,
    ) -> Result<Employee, ApiError> {
        store.update_employee(id, update).await
    }

    /// Removes an employee and returns the record as it was stored.
    pub async fn delete<S: Store>(store: &S, id: Id) -> Result<Employee, ApiError> {
        let employee = store
            .get_employee(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Employee", id))?;
        store.delete_employee(id).await?;
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        let people = [
            ("Alice Johnson", "Operations", 1),
            ("Raj Patel", "IT", 1),
            ("Maria Garcia", "operations", 2),
            ("Chen Wei", "Loans", 2),
        ];
        for (name, department, branch_id) in people {
            EmployeeOperations::create(
                &store,
                NewEmployee {
                    name: name.to_string(),
                    position: "Associate".to_string(),
                    department: department.to_string(),
                    email: format!(
                        "{}@pixell-river.com",
                        name.to_lowercase().replace(' ', ".")
                    ),
                    phone: "204-555-0110".to_string(),
                    branch_id,
                },
            )
            .await
            .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_for_department_matches_case_insensitively() {
        let store = seeded_store().await;
        let employees = EmployeeOperations::for_department(&store, "OPERATIONS")
            .await
            .unwrap();
        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Maria Garcia"]);
    }

    #[tokio::test]
    async fn test_for_department_does_not_match_substrings() {
        let store = seeded_store().await;
        let employees = EmployeeOperations::for_department(&store, "Operation")
            .await
            .unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn test_for_branch_filters_by_exact_id() {
        let store = seeded_store().await;
        let employees = EmployeeOperations::for_branch(&store, 2).await.unwrap();
        let names: Vec<&str> = employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Maria Garcia", "Chen Wei"]);
    }

    #[tokio::test]
    async fn test_for_branch_with_no_employees_is_empty_not_an_error() {
        let store = seeded_store().await;
        let employees = EmployeeOperations::for_branch(&store, 9).await.unwrap();
        assert!(employees.is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_the_removed_record() {
        let store = seeded_store().await;
        let removed = EmployeeOperations::delete(&store, 1).await.unwrap();
        assert_eq!(removed.name, "Alice Johnson");

        let err = EmployeeOperations::delete(&store, 1).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { entity: "Employee", id: 1 }));
    }
}
