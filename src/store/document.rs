use anyhow::{anyhow, Context};
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{
    Branch, BranchUpdate, Employee, EmployeeUpdate, Id, NewBranch, NewEmployee,
};
use crate::store::traits::{BranchStore, EmployeeStore, Store};

pub const BRANCHES_COLLECTION: &str = "branches";
pub const EMPLOYEES_COLLECTION: &str = "employees";

/// Minimal client surface for an external document database.
///
/// One JSON document per record. Keys are opaque strings to the client;
/// this adapter uses the decimal form of the record id. Anything the client
/// reports as an error bubbles up as `ApiError::Storage` untouched.
#[async_trait::async_trait]
pub trait DocumentClient: Send + Sync {
    /// All `(key, document)` pairs in a collection.
    async fn list_documents(&self, collection: &str) -> anyhow::Result<Vec<(String, Value)>>;
    /// Single document, `None` when the key is unknown.
    async fn get_document(&self, collection: &str, key: &str) -> anyhow::Result<Option<Value>>;
    /// Creates or replaces the document at `key`.
    async fn put_document(&self, collection: &str, key: &str, document: Value)
        -> anyhow::Result<()>;
    /// Removes the document at `key`. Unknown keys are a no-op.
    async fn delete_document(&self, collection: &str, key: &str) -> anyhow::Result<()>;
}

/// Storage backend over a [`DocumentClient`].
///
/// The id lives in the document key, not the body, so create has to scan
/// the collection's keys to find the smallest free id. Update and delete
/// read before writing to report unknown ids as `NotFound`.
#[derive(Debug)]
pub struct DocumentStore<C> {
    client: C,
}

impl<C: DocumentClient> DocumentStore<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    async fn used_ids(&self, collection: &str) -> Result<Vec<Id>, ApiError> {
        let documents = self.client.list_documents(collection).await?;
        documents
            .into_iter()
            .map(|(key, _)| parse_key(collection, &key))
            .collect()
    }
}

fn parse_key(collection: &str, key: &str) -> Result<Id, ApiError> {
    key.parse::<Id>().map_err(|_| {
        ApiError::Storage(anyhow!(
            "non-numeric document key `{}` in collection `{}`",
            key,
            collection
        ))
    })
}

fn lowest_free_id(used: &[Id]) -> Id {
    let mut id: Id = 1;
    while used.contains(&id) {
        id += 1;
    }
    id
}

fn branch_document(branch: &Branch) -> Result<Value, ApiError> {
    let body = NewBranch {
        name: branch.name.clone(),
        address: branch.address.clone(),
        phone: branch.phone.clone(),
    };
    Ok(serde_json::to_value(body).context("failed to serialize branch document")?)
}

fn branch_from_document(id: Id, document: Value) -> Result<Branch, ApiError> {
    let body: NewBranch =
        serde_json::from_value(document).context("malformed branch document")?;
    Ok(body.into_branch(id))
}

fn employee_document(employee: &Employee) -> Result<Value, ApiError> {
    let body = NewEmployee {
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        branch_id: employee.branch_id,
    };
    Ok(serde_json::to_value(body).context("failed to serialize employee document")?)
}

fn employee_from_document(id: Id, document: Value) -> Result<Employee, ApiError> {
    let body: NewEmployee =
        serde_json::from_value(document).context("malformed employee document")?;
    Ok(body.into_employee(id))
}

#[async_trait::async_trait]
impl<C: DocumentClient> BranchStore for DocumentStore<C> {
    async fn list_branches(&self) -> Result<Vec<Branch>, ApiError> {
        let documents = self.client.list_documents(BRANCHES_COLLECTION).await?;
        let mut branches = documents
            .into_iter()
            .map(|(key, document)| {
                let id = parse_key(BRANCHES_COLLECTION, &key)?;
                branch_from_document(id, document)
            })
            .collect::<Result<Vec<_>, _>>()?;
        branches.sort_by_key(|branch| branch.id);
        Ok(branches)
    }

    async fn get_branch(&self, id: Id) -> Result<Option<Branch>, ApiError> {
        let document = self
            .client
            .get_document(BRANCHES_COLLECTION, &id.to_string())
            .await?;
        document
            .map(|document| branch_from_document(id, document))
            .transpose()
    }

    async fn create_branch(&self, new_branch: NewBranch) -> Result<Branch, ApiError> {
        let used = self.used_ids(BRANCHES_COLLECTION).await?;
        let id = lowest_free_id(&used);
        let branch = new_branch.into_branch(id);
        self.client
            .put_document(BRANCHES_COLLECTION, &id.to_string(), branch_document(&branch)?)
            .await?;
        log::debug!("created branch document {}", id);
        Ok(branch)
    }

    async fn update_branch(&self, id: Id, update: BranchUpdate) -> Result<Branch, ApiError> {
        let key = id.to_string();
        let document = self
            .client
            .get_document(BRANCHES_COLLECTION, &key)
            .await?
            .ok_or_else(|| ApiError::not_found("Branch", id))?;

        let mut branch = branch_from_document(id, document)?;
        branch.apply_update(update);
        self.client
            .put_document(BRANCHES_COLLECTION, &key, branch_document(&branch)?)
            .await?;
        Ok(branch)
    }

    async fn delete_branch(&self, id: Id) -> Result<(), ApiError> {
        let key = id.to_string();
        if self
            .client
            .get_document(BRANCHES_COLLECTION, &key)
            .await?
            .is_none()
        {
            return Err(ApiError::not_found("Branch", id));
        }
        self.client.delete_document(BRANCHES_COLLECTION, &key).await?;
        log::debug!("deleted branch document {}", id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl<C: DocumentClient> EmployeeStore for DocumentStore<C> {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let documents = self.client.list_documents(EMPLOYEES_COLLECTION).await?;
        let mut employees = documents
            .into_iter()
            .map(|(key, document)| {
                let id = parse_key(EMPLOYEES_COLLECTION, &key)?;
                employee_from_document(id, document)
            })
            .collect::<Result<Vec<_>, _>>()?;
        employees.sort_by_key(|employee| employee.id);
        Ok(employees)
    }

    async fn get_employee(&self, id: Id) -> Result<Option<Employee>, ApiError> {
        let document = self
            .client
            .get_document(EMPLOYEES_COLLECTION, &id.to_string())
            .await?;
        document
            .map(|document| employee_from_document(id, document))
            .transpose()
    }

    async fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, ApiError> {
        let used = self.used_ids(EMPLOYEES_COLLECTION).await?;
        let id = lowest_free_id(&used);
        let employee = new_employee.into_employee(id);
        self.client
            .put_document(
                EMPLOYEES_COLLECTION,
                &id.to_string(),
                employee_document(&employee)?,
            )
            .await?;
        log::debug!("created employee document {}", id);
        Ok(employee)
    }

    async fn update_employee(&self, id: Id, update: EmployeeUpdate) -> Result<Employee, ApiError> {
        let key = id.to_string();
        let document = self
            .client
            .get_document(EMPLOYEES_COLLECTION, &key)
            .await?
            .ok_or_else(|| ApiError::not_found("Employee", id))?;

        let mut employee = employee_from_document(id, document)?;
        employee.apply_update(update);
        self.client
            .put_document(EMPLOYEES_COLLECTION, &key, employee_document(&employee)?)
            .await?;
        Ok(employee)
    }

    async fn delete_employee(&self, id: Id) -> Result<(), ApiError> {
        let key = id.to_string();
        if self
            .client
            .get_document(EMPLOYEES_COLLECTION, &key)
            .await?
            .is_none()
        {
            return Err(ApiError::not_found("Employee", id));
        }
        self.client.delete_document(EMPLOYEES_COLLECTION, &key).await?;
        log::debug!("deleted employee document {}", id);
        Ok(())
    }
}

impl<C: DocumentClient> Store for DocumentStore<C> {}
