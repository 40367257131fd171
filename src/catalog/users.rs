//! User accounts and the append-only store that owns them.

use crate::util::generate_id;

use super::error::CatalogError;
use super::model::Playlist;

/// Opaque handle to a [`User`] inside a [`Users`] store.
///
/// Handles stay valid for the lifetime of the store that issued them;
/// there is no removal operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UserId(usize);

/// An account holder owning zero or more playlists.
#[derive(Debug)]
pub struct User {
    id: String,
    username: String,
    playlists: Vec<Playlist>,
}

impl User {
    fn new(username: &str) -> Self {
        Self {
            id: generate_id(),
            username: username.to_string(),
            playlists: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Take ownership of `playlist`. Callers that want to keep their own
    /// copy clone before the call.
    pub fn add_playlist(&mut self, playlist: Playlist) {
        self.playlists.push(playlist);
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Owned playlists in insertion order.
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }
}

/// Ownership arena for users.
///
/// Users are created through [`Users::add`] and addressed by the returned
/// [`UserId`]; a track never holds a direct reference to its owner, so a
/// stale handle surfaces as an error instead of a dangling read.
#[derive(Debug, Default)]
pub struct Users {
    entries: Vec<User>,
}

impl Users {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a user with a fresh entity id and return its handle.
    pub fn add(&mut self, username: &str) -> UserId {
        let id = UserId(self.entries.len());
        self.entries.push(User::new(username));
        id
    }

    pub fn get(&self, id: UserId) -> Result<&User, CatalogError> {
        self.entries.get(id.0).ok_or(CatalogError::UnknownUser(id))
    }

    pub fn get_mut(&mut self, id: UserId) -> Result<&mut User, CatalogError> {
        self.entries
            .get_mut(id.0)
            .ok_or(CatalogError::UnknownUser(id))
    }
}
