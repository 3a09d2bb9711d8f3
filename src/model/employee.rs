use serde::{Deserialize, Serialize};

use crate::model::Id;

/// An employee record. `branch_id` points at the branch the employee works
/// in, but the reference is not enforced by the store: a branch can be
/// deleted while employees still point at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub branch_id: Id,
}

impl Employee {
    /// Merges the present fields of an update into this record. Absent
    /// fields keep their current value.
    pub fn apply_update(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(branch_id) = update.branch_id {
            self.branch_id = branch_id;
        }
    }
}

/// Validated input for creating an employee. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    pub branch_id: Id,
}

impl NewEmployee {
    pub fn into_employee(self, id: Id) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            department: self.department,
            email: self.email,
            phone: self.phone,
            branch_id: self.branch_id,
        }
    }
}

/// Validated partial update for an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<Id>,
}

/// Raw request body for employee create and update. `branch_id` is signed
/// here so a negative value reaches the validator and comes back as a
/// message instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub branch_id: Option<i64>,
}

impl EmployeePayload {
    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.department.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.branch_id.is_none()
    }
}
