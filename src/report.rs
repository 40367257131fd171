//! Text report rendering for catalog entities.
//!
//! Reports are built as plain strings; the driver decides where they go.
//! Line labels and ordering follow the catalog's report format, with track
//! lines indented by the configured prefix.

use crate::catalog::{CatalogError, Playlist, Track, UserId, Users};
use crate::config::ReportSettings;
use crate::util::format_duration;

/// Build the multi-line report for a single track.
///
/// The owner line is resolved through `users` and fails when the track's
/// handle is unknown to the store.
pub fn track_report(
    track: &Track,
    users: &Users,
    report: &ReportSettings,
) -> Result<String, CatalogError> {
    let owner = track.owner_name(users)?;
    let ind = &report.indent;

    let mut out = String::new();
    out.push_str(&format!("{}Track ID: {}\n", ind, track.id()));
    out.push_str(&format!("{}Owner: {}\n", ind, owner));
    out.push_str(&format!("{}Title: {}\n", ind, track.title()));
    out.push_str(&format!("{}Sharing: {}\n", ind, track.visibility()));
    out.push_str(&format!(
        "{}Duration {}\n",
        ind,
        format_duration(track.duration())
    ));
    if report.show_release_date {
        out.push_str(&format!(
            "{}Released: {}\n",
            ind,
            track.release_date().format(&report.date_format)
        ));
    }
    out.push('\n');
    Ok(out)
}

/// Build the report for a playlist: header fields followed by each contained
/// track's report in insertion order. The description line is omitted when
/// empty.
pub fn playlist_report(
    playlist: &Playlist,
    users: &Users,
    report: &ReportSettings,
) -> Result<String, CatalogError> {
    let mut out = String::new();
    out.push_str(&format!("Playlist ID: {}\n", playlist.id()));
    out.push_str(&format!("Title: {}\n", playlist.title()));
    if !playlist.description().is_empty() {
        out.push_str(&format!("Description: {}\n", playlist.description()));
    }
    out.push_str(&format!(
        "Duration: {}\n",
        format_duration(playlist.total_duration())
    ));
    out.push_str("Tracks:\n");
    for track in playlist.tracks() {
        out.push_str(&track_report(track, users, report)?);
    }
    out.push('\n');
    Ok(out)
}

/// Build the report for a user: account fields, the playlist count and each
/// owned playlist's report in insertion order.
///
/// The password line is an always-empty placeholder; no credentials are
/// stored.
pub fn user_report(
    user_id: UserId,
    users: &Users,
    report: &ReportSettings,
) -> Result<String, CatalogError> {
    let user = users.get(user_id)?;

    let mut out = String::new();
    out.push_str(&format!("User ID: {}\n", user.id()));
    out.push_str(&format!("Username: {}\n", user.username()));
    out.push_str("Password: \n");
    out.push_str(&format!("PlaylistCount: {}\n", user.playlist_count()));
    out.push_str("Playlists:\n");
    for playlist in user.playlists() {
        out.push_str(&playlist_report(playlist, users, report)?);
    }
    out.push('\n');
    Ok(out)
}
