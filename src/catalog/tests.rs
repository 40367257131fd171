use std::time::Duration;

use super::*;

#[test]
fn users_add_assigns_fresh_hex_ids() {
    let mut users = Users::new();
    let a = users.add("alice");
    let b = users.add("bob");

    let a = users.get(a).unwrap();
    let b = users.get(b).unwrap();
    assert_eq!(a.id().len(), 24);
    assert_eq!(b.id().len(), 24);
    assert_ne!(a.id(), b.id());
    assert_eq!(a.username(), "alice");
    assert_eq!(b.username(), "bob");
}

#[test]
fn users_get_rejects_foreign_handle() {
    let mut issuing = Users::new();
    let handle = issuing.add("alice");

    let other = Users::new();
    assert_eq!(
        other.get(handle).unwrap_err(),
        CatalogError::UnknownUser(handle)
    );
}

#[test]
fn track_defaults_to_public_and_todays_date() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let track = Track::new("Song", owner, Duration::from_secs(120));
    assert_eq!(track.visibility(), Visibility::Public);
    assert_eq!(track.release_date(), chrono::Local::now().date_naive());
    assert_eq!(track.duration(), Duration::from_secs(120));
    assert_eq!(track.id().len(), 24);
}

#[test]
fn track_set_visibility_updates_state() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let mut track = Track::new("Song", owner, Duration::ZERO);
    track.set_visibility(Visibility::Private);
    assert_eq!(track.visibility(), Visibility::Private);
}

#[test]
fn track_duplicate_mints_a_fresh_id_and_keeps_the_rest() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let mut track = Track::new("Song", owner, Duration::from_secs(95));
    track.set_visibility(Visibility::Private);

    let copy = track.duplicate();
    assert_ne!(copy.id(), track.id());
    assert_eq!(copy.title(), track.title());
    assert_eq!(copy.duration(), track.duration());
    assert_eq!(copy.visibility(), track.visibility());
    assert_eq!(copy.owner(), track.owner());
    assert_eq!(copy.release_date(), track.release_date());
}

#[test]
fn track_owner_name_resolves_through_the_store() {
    let mut users = Users::new();
    let owner = users.add("Qubicon");

    let track = Track::new("Sample Track", owner, Duration::from_secs(210));
    assert_eq!(track.owner_name(&users).unwrap(), "Qubicon");
}

#[test]
fn track_owner_name_fails_loudly_on_an_unknown_store() {
    let mut users = Users::new();
    let owner = users.add("alice");
    let track = Track::new("Song", owner, Duration::ZERO);

    let empty = Users::new();
    assert!(matches!(
        track.owner_name(&empty),
        Err(CatalogError::UnknownUser(_))
    ));
}

#[test]
fn playlist_total_duration_tracks_every_addition() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let mut playlist = Playlist::new("Mix", "");
    assert_eq!(playlist.total_duration(), Duration::ZERO);

    for secs in [210, 157, 0, 3600] {
        playlist.add_track(Track::new("t", owner, Duration::from_secs(secs)));
    }
    assert_eq!(playlist.total_duration(), Duration::from_secs(3967));
    assert_eq!(playlist.tracks().len(), 4);
}

#[test]
fn playlist_keeps_tracks_in_insertion_order() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let mut playlist = Playlist::new("Mix", "");
    playlist.add_track(Track::new("first", owner, Duration::ZERO));
    playlist.add_track(Track::new("second", owner, Duration::ZERO));
    playlist.add_track(Track::new("third", owner, Duration::ZERO));

    let titles: Vec<&str> = playlist.tracks().iter().map(Track::title).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[test]
fn playlist_clone_keeps_its_id_but_duplicates_tracks() {
    let mut users = Users::new();
    let owner = users.add("alice");

    let mut playlist = Playlist::new("Mix", "desc");
    playlist.add_track(Track::new("Song", owner, Duration::from_secs(42)));

    let copy = playlist.clone();
    assert_eq!(copy.id(), playlist.id());
    assert_eq!(copy.total_duration(), playlist.total_duration());
    assert_eq!(copy.tracks().len(), 1);
    assert_eq!(copy.tracks()[0].title(), "Song");
    // Track copies are distinct entities.
    assert_ne!(copy.tracks()[0].id(), playlist.tracks()[0].id());
}

#[test]
fn user_playlist_count_follows_additions() {
    let mut users = Users::new();
    let id = users.add("alice");

    assert_eq!(users.get(id).unwrap().playlist_count(), 0);
    users
        .get_mut(id)
        .unwrap()
        .add_playlist(Playlist::new("One", ""));
    users
        .get_mut(id)
        .unwrap()
        .add_playlist(Playlist::new("Two", ""));

    let user = users.get(id).unwrap();
    assert_eq!(user.playlist_count(), 2);
    assert_eq!(user.playlists().len(), 2);
    assert_eq!(user.playlists()[0].title(), "One");
    assert_eq!(user.playlists()[1].title(), "Two");
}

#[test]
fn user_stores_an_independent_copy_of_a_cloned_playlist() {
    let mut users = Users::new();
    let id = users.add("alice");
    let owner = id;

    let mut playlist = Playlist::new("Mix", "");
    users.get_mut(id).unwrap().add_playlist(playlist.clone());

    // Mutating the caller's playlist afterwards must not reach the stored copy.
    playlist.add_track(Track::new("late", owner, Duration::from_secs(60)));

    let stored = &users.get(id).unwrap().playlists()[0];
    assert_eq!(stored.tracks().len(), 0);
    assert_eq!(stored.total_duration(), Duration::ZERO);
}
