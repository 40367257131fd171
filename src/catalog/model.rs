//! Track and playlist types.

use std::fmt;
use std::time::Duration;

use chrono::NaiveDate;

use crate::util::generate_id;

use super::error::CatalogError;
use super::users::{UserId, Users};

/// Sharing state of a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Public
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "PUBLIC"),
            Visibility::Private => write!(f, "PRIVATE"),
        }
    }
}

/// A single audio item, owned by value by whatever collection holds it and
/// linked back to its creating user through a [`UserId`] handle.
///
/// `Clone` is deliberately not implemented: copies of a track are distinct
/// entities, so the only copy operation is [`Track::duplicate`], which mints
/// a fresh id.
#[derive(Debug)]
pub struct Track {
    id: String,
    title: String,
    duration: Duration,
    visibility: Visibility,
    owner: UserId,
    release_date: NaiveDate,
}

impl Track {
    /// Create a track with a fresh id, `Public` visibility and today's
    /// local date as its release date.
    pub fn new(title: &str, owner: UserId, duration: Duration) -> Self {
        Self {
            id: generate_id(),
            title: title.to_string(),
            duration,
            visibility: Visibility::default(),
            owner,
            release_date: chrono::Local::now().date_naive(),
        }
    }

    /// Copy this track as a new entity: fresh id, every other field kept.
    pub fn duplicate(&self) -> Self {
        Self {
            id: generate_id(),
            title: self.title.clone(),
            duration: self.duration,
            visibility: self.visibility,
            owner: self.owner,
            release_date: self.release_date,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Resolve the owner's username through `users`.
    ///
    /// Fails with [`CatalogError::UnknownUser`] when the handle was not
    /// issued by `users`.
    pub fn owner_name<'a>(&self, users: &'a Users) -> Result<&'a str, CatalogError> {
        Ok(users.get(self.owner)?.username())
    }
}

/// An ordered collection of tracks with a running total duration.
///
/// The playlist is the single owner of its tracks; they are moved in through
/// [`Playlist::add_track`] and dropped with the playlist. Cloning a playlist
/// keeps its entity id but duplicates the contained tracks, since track
/// copies are distinct entities.
#[derive(Debug)]
pub struct Playlist {
    id: String,
    title: String,
    description: String,
    tracks: Vec<Track>,
    total_duration: Duration,
}

impl Playlist {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            id: generate_id(),
            title: title.to_string(),
            description: description.to_string(),
            tracks: Vec::new(),
            total_duration: Duration::ZERO,
        }
    }

    /// Append `track` and fold its duration into the total.
    ///
    /// There is no removal operation, so the total stays equal to the sum
    /// of the contained tracks' durations.
    pub fn add_track(&mut self, track: Track) {
        self.total_duration += track.duration();
        self.tracks.push(track);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Contained tracks in insertion order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }
}

impl Clone for Playlist {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            tracks: self.tracks.iter().map(Track::duplicate).collect(),
            total_duration: self.total_duration,
        }
    }
}
