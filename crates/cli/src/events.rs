//! Translation of crossterm events into watch input

use crate::screen::Screen;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use watchterm_core::{InputState, Key};

/// What the host loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Continue,
    Resize { columns: u16 },
    Quit,
}

/// Fold one terminal event into the pending input snapshot
pub fn apply(event: Event, screen: &Screen, input: &mut InputState) -> HostAction {
    match event {
        Event::Key(key) => apply_key(key, input),
        Event::Mouse(mouse) => {
            apply_mouse(mouse, screen, input);
            HostAction::Continue
        }
        Event::Paste(text) => {
            input.text(&text);
            HostAction::Continue
        }
        Event::Resize(columns, _) => HostAction::Resize { columns },
        _ => HostAction::Continue,
    }
}

fn apply_key(event: KeyEvent, input: &mut InputState) -> HostAction {
    if event.kind == KeyEventKind::Release {
        if let Some(key) = named_key(event.code) {
            input.key_up(key);
        }
        return HostAction::Continue;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => HostAction::Quit,
        KeyCode::Char(c) if !ctrl => {
            input.text(c.encode_utf8(&mut [0u8; 4]));
            HostAction::Continue
        }
        code => {
            // Terminals rarely report key-up, so every press is a tap
            if let Some(key) = named_key(code) {
                input.key_tap(key);
            }
            HostAction::Continue
        }
    }
}

fn apply_mouse(event: MouseEvent, screen: &Screen, input: &mut InputState) {
    input.mouse_move(screen.cell_to_watch(event.column, event.row));
    if event.kind == MouseEventKind::Down(MouseButton::Left) {
        input.mouse_down();
    }
}

fn named_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Escape,
        _ => return None,
    };
    Some(key)
}
