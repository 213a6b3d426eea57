use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::config;
use crate::library::SampleLibrary;

mod event_loop;
mod logging;
mod startup;


type AppTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Run one UI session. `config_fallback` is the reason the defaults were used
/// in place of the config file, if they were.
pub fn run(
    settings: config::Settings,
    config_fallback: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = logging::init_tracing(&settings)? {
        info!(log = %path.display(), strict = settings.player.strict, "peony starting");
    }
    if let Some(reason) = &config_fallback {
        warn!(%reason, "using default settings");
    }

    let mut session = startup::Session::start(&SampleLibrary);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut session, &mut state)
    };

    session.close();
    let restore_result = restore_terminal(&mut terminal);
    info!("peony stopped");

    run_result?;
    restore_result
}

fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
