//! Request payload validation.
//!
//! Checks collect every violation before answering, so one response lists
//! all problems instead of stopping at the first. String fields are trimmed
//! before any rule runs and the trimmed value is what gets persisted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;
use crate::model::{
    BranchPayload, BranchUpdate, EmployeePayload, EmployeeUpdate, Id, NewBranch, NewEmployee,
};

/// Minimum length for plain text fields, counted after trimming.
const MIN_TEXT_LEN: usize = 3;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validates a branch create payload. All fields are required.
pub fn branch_create(payload: BranchPayload) -> Result<NewBranch, ApiError> {
    let mut errors = Vec::new();

    let name = required_text("Branch name", payload.name, &mut errors);
    let address = required_text("Branch address", payload.address, &mut errors);
    let phone = required_text("Branch phone", payload.phone, &mut errors);

    match (name, address, phone) {
        (Some(name), Some(address), Some(phone)) => Ok(NewBranch {
            name,
            address,
            phone,
        }),
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Validates a branch update payload. At least one field must be present;
/// present fields obey the same rules as on create.
pub fn branch_update(payload: BranchPayload) -> Result<BranchUpdate, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::Validation(vec![
            "At least one field must be provided".to_string(),
        ]));
    }

    let mut errors = Vec::new();
    let update = BranchUpdate {
        name: optional_text("Branch name", payload.name, &mut errors),
        address: optional_text("Branch address", payload.address, &mut errors),
        phone: optional_text("Branch phone", payload.phone, &mut errors),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Validates an employee create payload. All fields are required. The
/// `branchId` value only has to be positive; whether such a branch exists
/// is not checked here or anywhere else.
pub fn employee_create(payload: EmployeePayload) -> Result<NewEmployee, ApiError> {
    let mut errors = Vec::new();

    let name = required_text("Employee name", payload.name, &mut errors);
    let position = required_text("Employee position", payload.position, &mut errors);
    let department = required_text("Employee department", payload.department, &mut errors);
    let email = required_email("Employee email", payload.email, &mut errors);
    let phone = required_text("Employee phone", payload.phone, &mut errors);
    let branch_id = required_branch_id("Employee branchId", payload.branch_id, &mut errors);

    match (name, position, department, email, phone, branch_id) {
        (Some(name), Some(position), Some(department), Some(email), Some(phone), Some(branch_id)) => {
            Ok(NewEmployee {
                name,
                position,
                department,
                email,
                phone,
                branch_id,
            })
        }
        _ => Err(ApiError::Validation(errors)),
    }
}

/// Validates an employee update payload, same shape as [`branch_update`].
pub fn employee_update(payload: EmployeePayload) -> Result<EmployeeUpdate, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::Validation(vec![
            "At least one field must be provided".to_string(),
        ]));
    }

    let mut errors = Vec::new();
    let update = EmployeeUpdate {
        name: optional_text("Employee name", payload.name, &mut errors),
        position: optional_text("Employee position", payload.position, &mut errors),
        department: optional_text("Employee department", payload.department, &mut errors),
        email: optional_email("Employee email", payload.email, &mut errors),
        phone: optional_text("Employee phone", payload.phone, &mut errors),
        branch_id: optional_branch_id("Employee branchId", payload.branch_id, &mut errors),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(ApiError::Validation(errors))
    }
}

/// Required text field. Pushes a message and answers `None` on any
/// violation, so the caller can keep collecting.
fn required_text(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(raw) => checked_text(field, raw, errors),
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

/// Optional text field: absent stays absent, present must pass the same
/// rules as a required one.
fn optional_text(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    value.and_then(|raw| checked_text(field, raw, errors))
}

fn checked_text(field: &str, raw: String, errors: &mut Vec<String>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field} cannot be empty"));
        None
    } else if trimmed.chars().count() < MIN_TEXT_LEN {
        errors.push(format!(
            "{field} should have a minimum length of {MIN_TEXT_LEN}"
        ));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_email(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(raw) => checked_email(field, raw, errors),
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn optional_email(field: &str, value: Option<String>, errors: &mut Vec<String>) -> Option<String> {
    value.and_then(|raw| checked_email(field, raw, errors))
}

fn checked_email(field: &str, raw: String, errors: &mut Vec<String>) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field} cannot be empty"));
        None
    } else if !EMAIL_RE.is_match(trimmed) {
        errors.push(format!("{field} must be a valid email"));
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn required_branch_id(field: &str, value: Option<i64>, errors: &mut Vec<String>) -> Option<Id> {
    match value {
        Some(raw) => checked_branch_id(field, raw, errors),
        None => {
            errors.push(format!("{field} is required"));
            None
        }
    }
}

fn optional_branch_id(field: &str, value: Option<i64>, errors: &mut Vec<String>) -> Option<Id> {
    value.and_then(|raw| checked_branch_id(field, raw, errors))
}

fn checked_branch_id(field: &str, raw: i64, errors: &mut Vec<String>) -> Option<Id> {
    if raw < 1 {
        errors.push(format!("{field} must be a positive number"));
        None
    } else {
        Some(raw as Id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_branch_payload() -> BranchPayload {
        BranchPayload {
            name: Some("Toronto Branch".to_string()),
            address: Some("440 Queen St W, Toronto, ON, M5V 2A8".to_string()),
            phone: Some("416-980-2500".to_string()),
        }
    }

    fn full_employee_payload() -> EmployeePayload {
        EmployeePayload {
            name: Some("Priya Sharma".to_string()),
            position: Some("Financial Advisor".to_string()),
            department: Some("Advisory".to_string()),
            email: Some("priya.sharma@pixell-river.com".to_string()),
            phone: Some("416-555-0140".to_string()),
            branch_id: Some(1),
        }
    }

    #[test]
    fn test_branch_create_accepts_complete_payload() {
        let new_branch = branch_create(full_branch_payload()).unwrap();
        assert_eq!(new_branch.name, "Toronto Branch");
        assert_eq!(new_branch.phone, "416-980-2500");
    }

    #[test]
    fn test_branch_create_trims_whitespace() {
        let mut payload = full_branch_payload();
        payload.name = Some("  Toronto Branch  ".to_string());
        let new_branch = branch_create(payload).unwrap();
        assert_eq!(new_branch.name, "Toronto Branch");
    }

    #[test]
    fn test_branch_create_collects_every_missing_field() {
        let err = branch_create(BranchPayload::default()).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "Branch name is required",
                        "Branch address is required",
                        "Branch phone is required",
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_branch_create_rejects_whitespace_only_field() {
        let mut payload = full_branch_payload();
        payload.address = Some("   ".to_string());
        let err = branch_create(payload).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(messages, vec!["Branch address cannot be empty"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_branch_create_enforces_minimum_length_after_trim() {
        let mut payload = full_branch_payload();
        payload.name = Some("  ab ".to_string());
        let err = branch_create(payload).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec!["Branch name should have a minimum length of 3"]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let mut payload = full_branch_payload();
        payload.name = Some("abc".to_string());
        assert!(branch_create(payload).is_ok());
    }

    #[test]
    fn test_branch_update_rejects_empty_payload() {
        let err = branch_update(BranchPayload::default()).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(messages, vec!["At least one field must be provided"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_branch_update_accepts_single_field() {
        let update = branch_update(BranchPayload {
            phone: Some("416-980-9999".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.phone.as_deref(), Some("416-980-9999"));
        assert_eq!(update.name, None);
        assert_eq!(update.address, None);
    }

    #[test]
    fn test_branch_update_checks_present_fields() {
        let err = branch_update(BranchPayload {
            name: Some(" ".to_string()),
            phone: Some("416-980-9999".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(messages, vec!["Branch name cannot be empty"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_create_reports_all_six_missing_fields() {
        let err = employee_create(EmployeePayload::default()).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "Employee name is required",
                        "Employee position is required",
                        "Employee department is required",
                        "Employee email is required",
                        "Employee phone is required",
                        "Employee branchId is required",
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_create_missing_email_is_reported_alongside_other_errors() {
        let mut payload = full_employee_payload();
        payload.email = None;
        payload.phone = None;
        let err = employee_create(payload).unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec!["Employee email is required", "Employee phone is required"]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_employee_create_rejects_malformed_email() {
        for bad in ["plainaddress", "missing@tld", "two words@example.com", "a@b@c.com"] {
            let mut payload = full_employee_payload();
            payload.email = Some(bad.to_string());
            let err = employee_create(payload).unwrap_err();
            match err {
                ApiError::Validation(messages) => {
                    assert_eq!(
                        messages,
                        vec!["Employee email must be a valid email"],
                        "input: {bad}"
                    );
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_employee_create_rejects_non_positive_branch_id() {
        for bad in [0, -5] {
            let mut payload = full_employee_payload();
            payload.branch_id = Some(bad);
            let err = employee_create(payload).unwrap_err();
            match err {
                ApiError::Validation(messages) => {
                    assert_eq!(messages, vec!["Employee branchId must be a positive number"]);
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_employee_create_does_not_check_branch_existence() {
        let mut payload = full_employee_payload();
        payload.branch_id = Some(9999);
        let new_employee = employee_create(payload).unwrap();
        assert_eq!(new_employee.branch_id, 9999);
    }

    #[test]
    fn test_employee_update_accepts_department_only() {
        let update = employee_update(EmployeePayload {
            department: Some("Management".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(update.department.as_deref(), Some("Management"));
        assert_eq!(update.branch_id, None);
    }

    #[test]
    fn test_employee_update_rejects_empty_payload() {
        let err = employee_update(EmployeePayload::default()).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_employee_update_collects_multiple_violations() {
        let err = employee_update(EmployeePayload {
            email: Some("not-an-email".to_string()),
            branch_id: Some(-1),
            ..Default::default()
        })
        .unwrap_err();
        match err {
            ApiError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "Employee email must be a valid email",
                        "Employee branchId must be a positive number",
                    ]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_email_is_trimmed_before_matching() {
        let mut payload = full_employee_payload();
        payload.email = Some("  priya.sharma@pixell-river.com  ".to_string());
        let new_employee = employee_create(payload).unwrap();
        assert_eq!(new_employee.email, "priya.sharma@pixell-river.com");
    }
}
