use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap};

use studyloom_lib::pomodoro::Phase;

use super::app_state::{Screen, TuiState};
use super::status_bar;

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Tabs, body, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    draw_tabs(f, outer[0], state);
    match state.screen {
        Screen::Pomodoro => draw_pomodoro(f, outer[1], state),
        Screen::Flashcards => draw_flashcards(f, outer[1], state),
    }
    status_bar::draw(f, outer[2], state);
}

fn draw_tabs(f: &mut Frame, area: Rect, state: &TuiState) {
    let selected = Screen::ALL.iter().position(|s| *s == state.screen).unwrap_or(0);
    let tabs = Tabs::new(Screen::ALL.iter().map(|s| s.title()))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Work => Color::Red,
        Phase::ShortBreak => Color::Green,
        Phase::LongBreak => Color::Blue,
    }
}

fn draw_pomodoro(f: &mut Frame, area: Rect, state: &TuiState) {
    let timer = state.timer.state();
    let color = phase_color(timer.phase);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", timer.phase.label()))
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let clock = Paragraph::new(timer.clock())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(clock, rows[1]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(u16::from(timer.progress_percent()));
    f.render_widget(gauge, rows[2]);

    let status = if timer.is_running { "running" } else { "paused" };
    let info = Paragraph::new(format!(
        "{}  |  cycles completed: {}",
        status, timer.completed_cycles
    ))
    .alignment(Alignment::Center);
    f.render_widget(info, rows[3]);

    let hint = Paragraph::new(timer.phase.hint())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, rows[4]);
}

fn draw_flashcards(f: &mut Frame, area: Rect, state: &TuiState) {
    let session = state.drill.session();

    let (title, lines) = match (state.drill.current(), state.drill.position()) {
        (Some(card), Some((position, total))) => {
            let title = format!(
                " {}: {}  ({} / {}) ",
                session.subject, session.topic, position, total
            );
            let (label, text, color) = if session.flipped {
                ("Answer", card.a.as_str(), Color::Cyan)
            } else {
                ("Question", card.q.as_str(), Color::White)
            };
            let lines = vec![
                Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
                Line::from(""),
                Line::from(Span::styled(
                    text.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
            ];
            (title, lines)
        }
        _ => (
            " Flashcards ".to_string(),
            vec![
                Line::from("No deck yet."),
                Line::from(""),
                Line::from("Press n and enter a subject and a topic to generate one."),
            ],
        ),
    };

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(card, area);
}
