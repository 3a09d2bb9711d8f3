use thiserror::Error;

use crate::model::Id;

/// Error taxonomy shared by the validation, service, and store layers.
///
/// Only the HTTP handlers translate these into status codes; everything
/// below them propagates the variant unchanged with `?`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The payload failed schema checks. Carries one message per violation
    /// so a client sees every problem at once. Nothing is persisted.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// A mutation referenced an id that is not in the store. Lookups that
    /// find nothing return `Ok(None)` instead of this error.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: Id },

    /// The storage backend failed. Propagated as-is, never retried.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn not_found(entity: &'static str, id: Id) -> Self {
        Self::NotFound { entity, id }
    }
}
