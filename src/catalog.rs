//! Catalog model: tracks, playlists, users and the user store.
//!
//! Tracks reference their owning user through an opaque [`UserId`] handle
//! issued by the [`Users`] store; lookups through a handle the store does
//! not know fail with [`CatalogError::UnknownUser`].

mod error;
mod model;
mod users;

pub use error::*;
pub use model::*;
pub use users::*;

#[cfg(test)]
mod tests;
