use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives here as a key.
    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Up => {
            app.increment()
        }
        KeyCode::Char('r')
        | KeyCode::Char('R')
        | KeyCode::Char('0')
        | KeyCode::Delete
        | KeyCode::Backspace => app.reset(),
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_previous(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.on_click(mouse.column, mouse.row);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
