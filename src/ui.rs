//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player snapshot held by `App` using `ratatui`.
//! It only reads state; commands go through the runtime.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Transport};
use crate::config::UiSettings;
use crate::library::{display_from_fields, now_playing_text};

const CONTROLS: [(&str, &str); 8] = [
    ("j/k", "up/down"),
    ("gg/G", "top/bottom"),
    ("enter", "select"),
    ("p", "play"),
    ("u", "pause"),
    ("s", "stop"),
    ("space", "play/pause"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Row marker: playing, selected or neither.
fn row_marker(app: &App, index: usize) -> &'static str {
    let state = &app.snapshot;
    let is_selected = state
        .library()
        .get(index)
        .is_some_and(|t| state.selected() == Some(t.id));
    match (is_selected, state.is_playing()) {
        (true, true) => "▶ ",
        (true, false) => "♪ ",
        _ => "  ",
    }
}

/// Build the transport button line; disabled buttons are dimmed.
pub fn transport_line(transport: Transport) -> Line<'static> {
    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        Span::styled(format!("[ {} ]", label), style)
    };

    Line::from(vec![
        button("Play", transport.play),
        Span::raw("  "),
        button("Pause", transport.pause),
        Span::raw("  "),
        button("Stop", transport.stop),
    ])
    .alignment(Alignment::Center)
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" peony ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Track list
    {
        let library = app.snapshot.library();
        let items: Vec<ListItem> = library
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let text = display_from_fields(
                    track,
                    &ui_settings.track_fields,
                    &ui_settings.track_separator,
                );
                ListItem::new(format!("{}{}", row_marker(app, i), text))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" songs "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if app.has_tracks() {
            state.select(Some(app.cursor));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    // Notice line
    let notice = if ui_settings.show_notices {
        app.notice.as_deref().unwrap_or("")
    } else {
        ""
    };
    let notice_par = Paragraph::new(notice).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" notice "),
    );
    frame.render_widget(notice_par, chunks[2]);

    // Transport bar
    let now_playing = Line::from(Span::styled(
        now_playing_text(app.snapshot.selected_track()),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    let transport = Paragraph::new(vec![now_playing, transport_line(app.transport())])
        .block(Block::default().borders(Borders::ALL).title(" player "));
    frame.render_widget(transport, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{SampleLibrary, TrackId};
    use crate::player::Player;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, settings: &UiSettings) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app, settings)).unwrap();

        let buf = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_screen_lists_songs_and_shows_no_song_playing() {
        let p = Player::new(&SampleLibrary);
        let app = App::new(p.state().clone());
        let screen = render(&app, &UiSettings::default());

        assert!(screen.contains("Sample Song 1 • Artist A • 3:35"));
        assert!(screen.contains("Sample Song 5 • Artist B • 3:40"));
        assert!(screen.contains("No song playing"));
        assert!(screen.contains("[ Play ]"));
        assert!(screen.contains("[j/k] up/down"));
    }

    #[test]
    fn playing_screen_marks_the_row_and_names_the_track() {
        let mut p = Player::new(&SampleLibrary);
        p.select(TrackId(3));
        p.play();
        let mut app = App::new(p.state().clone());
        app.set_notice("Playing: Sample Song 3");

        let screen = render(&app, &UiSettings::default());
        assert!(screen.contains("Now Playing: Sample Song 3 - Artist A"));
        assert!(screen.contains("▶ Sample Song 3"));
        assert!(screen.contains("Playing: Sample Song 3"));
    }

    #[test]
    fn notices_are_hidden_when_disabled() {
        let p = Player::new(&SampleLibrary);
        let mut app = App::new(p.state().clone());
        app.set_notice("Stopped");

        let settings = UiSettings {
            show_notices: false,
            ..UiSettings::default()
        };
        assert!(!render(&app, &settings).contains("Stopped"));
    }

    #[test]
    fn transport_line_dims_disabled_buttons() {
        let line = transport_line(Transport {
            play: false,
            pause: true,
            stop: true,
        });
        let play = &line.spans[0];
        let pause = &line.spans[2];
        assert_eq!(play.content, "[ Play ]");
        assert!(play.style.add_modifier.contains(Modifier::DIM));
        assert!(pause.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn controls_text_lists_transport_keys() {
        let text = controls_text();
        assert!(text.starts_with("[j/k] up/down"));
        assert!(text.contains("[u] pause"));
        assert!(text.ends_with("[q] quit"));
    }
}
