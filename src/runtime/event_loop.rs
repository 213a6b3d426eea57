use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::app::{App, Command, error_notice};
use crate::config;
use crate::player::Player;
use crate::runtime::startup::Session;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: handles input and draws the latest snapshot.
/// Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut Session,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let notice_ttl = Duration::from_millis(settings.ui.notice_ms);

    loop {
        session.app.sync(&session.snapshots);
        session.app.expire_notice(Instant::now(), notice_ttl);

        terminal.draw(|f| ui::draw(f, &session.app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key_event(key, settings, &mut session.app, &mut session.player, state) {
                break;
            }
        }
    }

    Ok(())
}

/// Issue `cmd` against the player and set the matching notice.
///
/// With `player.strict` set, rejected commands leave the player untouched and
/// the error becomes the notice.
pub fn handle_command(
    cmd: Command,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player,
) {
    let before = Arc::clone(player.state());

    let result = if settings.player.strict {
        match cmd {
            Command::Select(id) => player.try_select(id),
            Command::Play => player.try_play(),
            Command::Pause => {
                player.pause();
                Ok(())
            }
            Command::Stop => {
                player.stop();
                Ok(())
            }
        }
    } else {
        match cmd {
            Command::Select(id) => player.select(id),
            Command::Play => player.play(),
            Command::Pause => player.pause(),
            Command::Stop => player.stop(),
        }
        Ok(())
    };

    match result {
        Ok(()) => {
            debug!(?cmd, "command applied");
            app.set_notice(cmd.notice(&before));
        }
        Err(e) => {
            warn!(?cmd, error = %e, "command rejected");
            app.set_notice(error_notice(&e));
        }
    }
}

/// Handle one key press. Returns true when the app should quit.
pub fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut Player,
    state: &mut EventLoopState,
) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.pending_gg = false;
            return true;
        }
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => {
            state.pending_gg = false;
            app.last();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.pending_gg = false;
            app.next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.pending_gg = false;
            app.prev();
        }
        KeyCode::Enter => {
            state.pending_gg = false;
            if let Some(id) = app.cursor_track() {
                handle_command(Command::Select(id), settings, app, player);
            }
        }
        KeyCode::Char('p') => {
            state.pending_gg = false;
            handle_command(Command::Play, settings, app, player);
        }
        KeyCode::Char('u') => {
            state.pending_gg = false;
            handle_command(Command::Pause, settings, app, player);
        }
        KeyCode::Char('s') => {
            state.pending_gg = false;
            handle_command(Command::Stop, settings, app, player);
        }
        KeyCode::Char(' ') => {
            state.pending_gg = false;
            let cmd = if player.state().is_playing() {
                Command::Pause
            } else {
                Command::Play
            };
            handle_command(cmd, settings, app, player);
        }
        KeyCode::Char(_) => {
            // g pending should clear on any other printable char
            state.pending_gg = false;
        }
        _ => {}
    }

    false
}
