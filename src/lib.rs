pub mod api;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export the error taxonomy
pub use error::ApiError;

// Export logic types
pub use logic::{BranchOperations, EmployeeOperations};

// Export all model types
pub use model::*;

// Export seed module
pub use seed::*;

// Export store types
pub use store::{DocumentClient, DocumentStore, MemoryStore, Store};

#[cfg(test)]
mod tests {
    use crate::model::{BranchPayload, EmployeePayload};

    #[test]
    fn test_payload_treats_explicit_null_like_absent() {
        let absent: BranchPayload = serde_json::from_str(r#"{"name": "Kelowna Branch"}"#).unwrap();
        assert_eq!(absent.address, None);

        let null: BranchPayload =
            serde_json::from_str(r#"{"name": "Kelowna Branch", "address": null}"#).unwrap();
        assert_eq!(null.address, None);
        assert_eq!(null.name.as_deref(), Some("Kelowna Branch"));
    }

    #[test]
    fn test_payload_ignores_client_supplied_id() {
        // Ids are assigned by the store; one in the body is just dropped.
        let payload: EmployeePayload = serde_json::from_str(
            r#"{"id": 99, "name": "Sam Tran", "branchId": 4}"#,
        )
        .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Sam Tran"));
        assert_eq!(payload.branch_id, Some(4));
    }

    #[test]
    fn test_employee_payload_reads_camel_case_branch_id() {
        let payload: EmployeePayload =
            serde_json::from_str(r#"{"branchId": 12}"#).unwrap();
        assert_eq!(payload.branch_id, Some(12));

        // The snake_case spelling is not part of the wire format.
        let other: EmployeePayload =
            serde_json::from_str(r#"{"branch_id": 12}"#).unwrap();
        assert_eq!(other.branch_id, None);
    }
}
