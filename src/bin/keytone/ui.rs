//! Terminal keyboard: key presses in, voice count and level meter out

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    DefaultTerminal, Frame,
};

use keytone::{synth::RenderStats, EngineConfig, NoteId, NoteTable};

use super::app::Engine;

/// How many recent key presses to show
const HISTORY_LEN: usize = 24;

struct UiState {
    stats: RenderStats,
    history: Vec<char>,
    device_name: String,
    sample_rate: u32,
    frame_size: usize,
}

impl UiState {
    fn record(&mut self, c: char) {
        if self.history.len() == HISTORY_LEN {
            self.history.remove(0);
        }
        self.history.push(c);
    }
}

/// Run the UI event loop until Esc or Ctrl+C, then stop the engine.
pub fn run(
    terminal: &mut DefaultTerminal,
    mut engine: Engine,
    config: &EngineConfig,
) -> EyreResult<()> {
    let mut state = UiState {
        stats: RenderStats::default(),
        history: Vec::with_capacity(HISTORY_LEN),
        device_name: engine.device_name.clone(),
        sample_rate: config.sample_rate,
        frame_size: config.frame_size,
    };

    let res = loop {
        // Keep only the most recent stats snapshot
        while let Ok(stats) = engine.stats_rx.pop() {
            state.stats = stats;
        }

        if let Err(err) = terminal.draw(|frame| render(frame, &state)) {
            break Err(err.into());
        }

        // Handle keyboard input (non-blocking, ~60fps)
        match event::poll(Duration::from_millis(16)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => break Err(err.into()),
        }
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(err) => break Err(err.into()),
        };

        match key.code {
            KeyCode::Esc => break Ok(()),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break Ok(()),
            _ => {}
        }

        if let Some(c) = note_char(&key) {
            engine.intake.note_on(NoteId(c));
            if engine.intake.bank().contains(NoteId(c)) {
                state.record(c);
            }
        }
    };

    engine.stop();
    res
}

/// Character to play for a key press, if any. Chords with Ctrl never play.
fn note_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Some(c),
        _ => None,
    }
}

fn render(frame: &mut Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(frame.area());

    let keymap = Paragraph::new(vec![
        Line::from(format!("short: {}", key_row(NoteTable::normal()))),
        Line::from(format!("long:  {}", key_row(NoteTable::long()))),
        Line::from(""),
        Line::from("Esc or Ctrl+C to quit"),
    ])
    .block(Block::default().title("keytone").borders(Borders::ALL));

    let voices = Paragraph::new(format!(
        "{} voice(s) | {} | {} Hz | {} samples/frame",
        state.stats.active_voices, state.device_name, state.sample_rate, state.frame_size
    ))
    .block(Block::default().title("Engine").borders(Borders::ALL));

    let clipping = state.stats.peak >= 1.0;
    let meter = Gauge::default()
        .block(Block::default().title("Peak").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if clipping { Color::Red } else { Color::Green }))
        .ratio(state.stats.peak.clamp(0.0, 1.0) as f64)
        .label(format!("{:.3}", state.stats.peak));

    let history: String = state.history.iter().collect();
    let recent = Paragraph::new(history)
        .block(Block::default().title("Recent keys").borders(Borders::ALL));

    frame.render_widget(keymap, chunks[0]);
    frame.render_widget(voices, chunks[1]);
    frame.render_widget(meter, chunks[2]);
    frame.render_widget(recent, chunks[3]);
}

fn key_row(table: NoteTable) -> String {
    table
        .iter()
        .map(|(id, _)| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_shifted_keys_play() {
        let plain = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);

        assert_eq!(note_char(&plain), Some('a'));
        assert_eq!(note_char(&shifted), Some('A'));
    }

    #[test]
    fn control_chords_are_not_notes() {
        for c in ['a', 'h', 'c', ';'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(note_char(&key), None, "Ctrl+{c} should not play");
        }
    }

    #[test]
    fn non_character_keys_are_ignored() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(note_char(&key), None);
    }
}
