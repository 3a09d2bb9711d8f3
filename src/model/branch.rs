use serde::{Deserialize, Serialize};

use crate::model::Id;

/// A branch office of the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Branch {
    /// Merges the present fields of an update into this record. Absent
    /// fields keep their current value.
    pub fn apply_update(&mut self, update: BranchUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}

/// Validated input for creating a branch. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBranch {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl NewBranch {
    pub fn into_branch(self, id: Id) -> Branch {
        Branch {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}

/// Validated partial update for a branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Raw request body for branch create and update. Every field is optional
/// so validation can report all problems in one pass instead of failing on
/// the first missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchPayload {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl BranchPayload {
    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none()
    }
}
