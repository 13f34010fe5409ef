use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, Screen, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    match state.mode {
        Mode::DeckSubject => {
            let text = format!(" Subject: {}\u{2588}", state.input_text);
            let prompt = Paragraph::new(text)
                .style(Style::default().bg(Color::Blue).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::DeckTopic { .. } => {
            let text = format!(" Topic: {}\u{2588}", state.input_text);
            let prompt = Paragraph::new(text)
                .style(Style::default().bg(Color::Magenta).fg(Color::White));
            f.render_widget(prompt, area);
        }
        Mode::Normal => {
            let hints = match state.screen {
                Screen::Pomodoro => {
                    " Space: start/pause  1/2/3: phase  r: reset  Tab: flashcards  q: quit "
                }
                Screen::Flashcards => {
                    " n: new deck  Space: flip  h/l: prev/next  r: reset  Tab: pomodoro  q: quit "
                }
            };

            let status = Paragraph::new(hints)
                .style(Style::default().bg(Color::DarkGray).fg(Color::White));
            f.render_widget(status, area);
        }
    }
}
