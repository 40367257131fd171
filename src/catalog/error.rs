use thiserror::Error;

use super::users::UserId;

/// Errors produced by catalog lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The handle was not issued by this user store.
    #[error("unknown user handle {0:?}")]
    UnknownUser(UserId),
}
