use tokio::sync::mpsc::UnboundedReceiver;

use studyloom_lib::flashcards::FlashcardDrill;
use studyloom_lib::pomodoro::{IntervalTicker, PomodoroTimer, Tick};

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Pomodoro,
    Flashcards,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Pomodoro, Screen::Flashcards];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Pomodoro => "Pomodoro",
            Screen::Flashcards => "Flashcards",
        }
    }
}

/// Which deck field the input line is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    DeckSubject,
    DeckTopic { subject: String },
}

pub struct TuiState {
    pub screen: Screen,
    pub mode: Mode,

    pub timer: PomodoroTimer<IntervalTicker>,
    ticks: UnboundedReceiver<Tick>,

    pub drill: FlashcardDrill,

    pub input_text: String,
    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(
        app: &App,
        screen: Screen,
        timer: PomodoroTimer<IntervalTicker>,
        ticks: UnboundedReceiver<Tick>,
    ) -> Self {
        Self {
            drill: app.flashcards(),
            screen,
            mode: Mode::Normal,
            timer,
            ticks,
            input_text: String::new(),
            flash_message: None,
            quit: false,
        }
    }

    /// Apply every tick that arrived since the last frame
    pub fn drain_ticks(&mut self) {
        while let Ok(tick) = self.ticks.try_recv() {
            if let Some(change) = self.timer.handle_tick(tick) {
                self.flash_message = Some(format!(
                    "{} complete. Up next: {}",
                    change.from.label(),
                    change.to.label()
                ));
            }
        }
    }

    pub fn next_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Pomodoro => Screen::Flashcards,
            Screen::Flashcards => Screen::Pomodoro,
        };
        self.cancel_input();
    }

    pub fn begin_deck_input(&mut self) {
        self.mode = Mode::DeckSubject;
        self.input_text = self.drill.session().subject.clone();
    }

    /// Enter on the input line: subject first, then topic
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input_text);
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::DeckSubject => {
                if text.trim().is_empty() {
                    self.flash_message = Some("Enter a subject".to_string());
                    return;
                }
                self.input_text = self.drill.session().topic.clone();
                self.mode = Mode::DeckTopic { subject: text };
            }
            Mode::DeckTopic { subject } => {
                if !self.drill.start(&subject, &text) {
                    self.flash_message = Some("Enter a topic".to_string());
                }
            }
            Mode::Normal => {}
        }
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
        self.input_text.clear();
    }
}
