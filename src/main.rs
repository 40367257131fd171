use std::time::Duration;

mod catalog;
mod config;
mod report;
mod util;

use catalog::{Playlist, Track, Users, Visibility};
use config::Settings;
use report::{playlist_report, user_report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    settings.validate()?;
    let report = &settings.report;

    let mut users = Users::new();
    let user1 = users.add("Qubicon");
    let user2 = users.add("Travis Scott");

    let mut playlist = Playlist::new("Wave Tracks", "Go with the wave!");

    let track = Track::new("Sample Track", user1, Duration::from_secs(210));
    println!("{} {}", track.title(), track.owner_name(&users)?);

    println!("{}", report.separator);

    let mut track2 = Track::new("One of Us", user2, Duration::from_secs(157));
    track2.set_visibility(Visibility::Private);

    print!("{}", user_report(user1, &users, report)?);
    println!("{}", report.separator);
    print!("{}", playlist_report(&playlist, &users, report)?);
    println!("{}", report.separator);

    playlist.add_track(track);
    playlist.add_track(track2);

    users.get_mut(user1)?.add_playlist(playlist);

    print!("{}", user_report(user1, &users, report)?);

    println!("{}", report.separator);

    Ok(())
}
