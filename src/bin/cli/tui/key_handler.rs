use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use studyloom_lib::pomodoro::Phase;

use super::app_state::{Mode, Screen, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    if state.mode != Mode::Normal {
        handle_input_key(state, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit = true,
        KeyCode::Tab => state.next_screen(),
        _ => match state.screen {
            Screen::Pomodoro => handle_pomodoro_key(state, key),
            Screen::Flashcards => handle_flashcards_key(state, key),
        },
    }
}

fn handle_pomodoro_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => state.timer.toggle_running(),
        KeyCode::Char('1') => state.timer.select_phase(Phase::Work),
        KeyCode::Char('2') => state.timer.select_phase(Phase::ShortBreak),
        KeyCode::Char('3') => state.timer.select_phase(Phase::LongBreak),
        KeyCode::Char('r') => state.timer.reset(),
        _ => {}
    }
}

fn handle_flashcards_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('n') => state.begin_deck_input(),
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => {
            if state.drill.session().is_active() {
                state.drill.flip();
            } else {
                state.begin_deck_input();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => state.drill.next(),
        KeyCode::Char('h') | KeyCode::Left => state.drill.prev(),
        KeyCode::Char('r') => state.drill.reset(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.cancel_input(),
        KeyCode::Enter => state.submit_input(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => state.input_text.push(c),
        _ => {}
    }
}
