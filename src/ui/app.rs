use crate::config::UiConfig;
use crate::ui::controls::{Control, ControlFocus, FocusIntent, FocusReducer};
use crate::ui::layout::{body_rect, score_layout};
use crate::ui::mvi::Reducer;
use crate::ui::score::{ScoreController, ScoreIntent};
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    score: ScoreController,
    /// Button focus (MVI pattern).
    focus: ControlFocus,
    title: String,
    subtitle: String,
}

impl App {
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            should_quit: false,
            size: None,
            score: ScoreController::new(),
            focus: ControlFocus::default(),
            title: ui.title.clone(),
            subtitle: ui.subtitle.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn score(&self) -> &ScoreController {
        &self.score
    }

    pub fn focus(&self) -> ControlFocus {
        self.focus
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn increment(&mut self) {
        self.score.increment();
        tracing::debug!(score = self.score.value(), "Point added");
    }

    pub fn reset(&mut self) {
        let previous = self.score.value();
        self.score.reset();
        tracing::debug!(previous, "Score reset");
    }

    /// Press a button: run its action and move focus onto it.
    pub fn activate(&mut self, control: Control) {
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::Set(control));
        match control.intent() {
            ScoreIntent::Increment => self.increment(),
            ScoreIntent::Reset => self.reset(),
        }
    }

    pub fn activate_focused(&mut self) {
        self.activate(self.focus.focused);
    }

    pub fn focus_next(&mut self) {
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::Next);
    }

    pub fn focus_previous(&mut self) {
        dispatch_mvi!(self, focus, FocusReducer, FocusIntent::Previous);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Left click at a terminal cell. Clicks outside both buttons are ignored,
    /// as are clicks before the terminal size is known.
    pub fn on_click(&mut self, column: u16, row: u16) {
        let Some((cols, rows)) = self.size else {
            return;
        };
        let body = body_rect(Rect::new(0, 0, cols, rows));
        if let Some(control) = score_layout(body).control_at(column, row) {
            self.activate(control);
        }
    }
}
