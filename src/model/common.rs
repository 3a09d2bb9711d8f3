/// Record identifier used by every backend.
///
/// Identifiers are positive integers assigned by the store: each backend
/// hands out the smallest positive value not already in use in the entity's
/// collection, so ids freed by deletion get reused rather than growing
/// forever. Clients never supply an id on create.
pub type Id = u64;
