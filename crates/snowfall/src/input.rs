//! Turns terminal events into screensaver actions.

use crossterm::event::{Event, KeyEventKind, MouseEventKind};

/// What the app should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// The user touched the keyboard or moved the mouse.
    Exit,
    /// The terminal now has `cols` x `rows` cells.
    Resize { cols: u16, rows: u16 },
    /// Nothing to do.
    Ignore,
}

/// Detects user activity: any key press or any change of mouse position.
#[derive(Debug, Default)]
pub struct InputMonitor {
    /// Last mouse position seen, in cells.
    last_mouse: Option<(u16, u16)>,
}

impl InputMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a single event.
    pub fn observe(&mut self, event: &Event) -> InputSignal {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => InputSignal::Exit,
            Event::Mouse(mouse) => {
                let position = (mouse.column, mouse.row);
                let moved = match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => true,
                    _ => self.last_mouse.is_some_and(|last| last != position),
                };
                self.last_mouse = Some(position);
                if moved {
                    InputSignal::Exit
                } else {
                    InputSignal::Ignore
                }
            }
            Event::Resize(cols, rows) => InputSignal::Resize {
                cols: *cols,
                rows: *rows,
            },
            _ => InputSignal::Ignore,
        }
    }
}
