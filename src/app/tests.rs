use super::*;
use crate::library::{SampleLibrary, StaticLibrary, TrackId};
use crate::player::{Player, PlayerError, Snapshot};
use std::sync::mpsc;
use std::time::{Duration, Instant};

fn app_for(player: &Player) -> App {
    App::new(player.state().clone())
}

#[test]
fn cursor_wraps_in_both_directions() {
    let p = Player::new(&SampleLibrary);
    let mut app = app_for(&p);
    assert_eq!(app.cursor, 0);

    app.prev();
    assert_eq!(app.cursor, 4);
    app.next();
    assert_eq!(app.cursor, 0);
    app.next();
    app.next();
    assert_eq!(app.cursor_track(), Some(TrackId(3)));

    app.last();
    assert_eq!(app.cursor, 4);
    app.first();
    assert_eq!(app.cursor, 0);
}

#[test]
fn cursor_moves_are_noops_on_empty_library() {
    let p = Player::new(&StaticLibrary::new(Vec::new()));
    let mut app = app_for(&p);
    app.next();
    app.prev();
    app.last();
    assert_eq!(app.cursor, 0);
    assert_eq!(app.cursor_track(), None);
    assert!(!app.has_tracks());
}

#[test]
fn new_app_starts_on_existing_selection() {
    let mut p = Player::new(&SampleLibrary);
    p.select(TrackId(4));
    let app = app_for(&p);
    assert_eq!(app.cursor, 3);
}

#[test]
fn sync_keeps_only_the_latest_snapshot() {
    let mut p = Player::new(&SampleLibrary);
    let (tx, rx) = mpsc::channel::<Snapshot>();
    p.subscribe(tx);

    let mut app = App::new(p.state().clone());
    p.select(TrackId(2));
    p.play();

    assert!(app.sync(&rx));
    assert_eq!(app.snapshot.selected(), Some(TrackId(2)));
    assert!(app.snapshot.is_playing());
    assert!(!app.sync(&rx));
}

#[test]
fn transport_buttons_follow_state() {
    let mut p = Player::new(&SampleLibrary);
    let idle = Transport::for_state(p.state());
    assert_eq!(
        idle,
        Transport {
            play: true,
            pause: false,
            stop: false
        }
    );

    p.select(TrackId(1));
    let paused = Transport::for_state(p.state());
    assert!(paused.play && !paused.pause && paused.stop);

    p.play();
    let playing = Transport::for_state(p.state());
    assert!(!playing.play && playing.pause && playing.stop);
}

#[test]
fn command_notices_match_the_state_they_were_issued_in() {
    let mut p = Player::new(&SampleLibrary);
    let idle = p.state().clone();
    assert_eq!(Command::Play.notice(&idle), "Select a song first");
    assert_eq!(
        Command::Select(TrackId(3)).notice(&idle),
        "Selected: Sample Song 3"
    );
    assert_eq!(Command::Select(TrackId(9)).notice(&idle), "Unknown track 9");

    p.select(TrackId(3));
    assert_eq!(Command::Play.notice(p.state()), "Playing: Sample Song 3");
    assert_eq!(Command::Pause.notice(p.state()), "Paused");
    assert_eq!(Command::Stop.notice(p.state()), "Stopped");
}

#[test]
fn error_notices() {
    assert_eq!(
        error_notice(&PlayerError::NoSelection),
        "Select a song first"
    );
    assert_eq!(
        error_notice(&PlayerError::UnknownTrack(TrackId(8))),
        "Error: no track with id 8 in the library"
    );
}

#[test]
fn notice_can_be_set_and_cleared() {
    let p = Player::new(&SampleLibrary);
    let mut app = app_for(&p);
    app.set_notice("Paused");
    assert_eq!(app.notice.as_deref(), Some("Paused"));
    app.clear_notice();
    assert!(app.notice.is_none());
}

#[test]
fn notice_expires_after_ttl() {
    let p = Player::new(&SampleLibrary);
    let mut app = app_for(&p);
    app.set_notice("Stopped");

    app.expire_notice(Instant::now(), Duration::from_secs(60));
    assert_eq!(app.notice.as_deref(), Some("Stopped"));

    let later = Instant::now() + Duration::from_secs(61);
    app.expire_notice(later, Duration::from_secs(60));
    assert!(app.notice.is_none());
}
