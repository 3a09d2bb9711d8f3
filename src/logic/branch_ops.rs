use crate::error::ApiError;
use crate::model::{Branch, BranchUpdate, Id, NewBranch};
use crate::store::traits::Store;

/// Branch business operations, generic over the storage backend.
pub struct BranchOperations;

impl BranchOperations {
    pub async fn get_all<S: Store>(store: &S) -> Result<Vec<Branch>, ApiError> {
        store.list_branches().await
    }

    /// Single branch, `None` when the id is unknown. The caller decides
    /// whether an absent record is an error.
    pub async fn get_by_id<S: Store>(store: &S, id: Id) -> Result<Option<Branch>, ApiError> {
        store.get_branch(id).await
    }

    pub async fn create<S: Store>(store: &S, new_branch: NewBranch) -> Result<Branch, ApiError> {
        store.create_branch(new_branch).await
    }

    pub async fn update<S: Store>(
        store: &S,
        id: Id,
        update: BranchUpdate,
    ) -> Result<Branch, ApiError> {
        store.update_branch(id, update).await
    }

    /// Removes a branch and returns the record as it was stored. The fetch
    /// happens first so the caller can echo what was removed.
    pub async fn delete<S: Store>(store: &S, id: Id) -> Result<Branch, ApiError> {
        let branch = store
            .get_branch(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Branch", id))?;
        store.delete_branch(id).await?;
        Ok(branch)
    }
}
