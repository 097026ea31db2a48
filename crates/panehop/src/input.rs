//! Blocking key source backed by crossterm events.
//!
//! Maps the configured cancel chord (and Ctrl-C, always) to a cancel,
//! plain character presses to label input, and a dead event stream to
//! end-of-input. Everything else is skipped and the next event is read.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::keymap::{matches_chord, KeyChord};
use crate::picker::{Key, KeySource};

pub struct CrosstermKeys {
    cancel: KeyChord,
}

impl CrosstermKeys {
    pub fn new(cancel: KeyChord) -> Self {
        Self { cancel }
    }
}

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Key {
        loop {
            let Ok(raw) = event::read() else {
                return Key::Eof;
            };
            let Event::Key(key) = raw else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if matches_chord(&key, &self.cancel) {
                return Key::Cancel;
            }
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Key::Cancel;
            }
            if let KeyCode::Char(ch) = key.code {
                let blocked = KeyModifiers::CONTROL
                    | KeyModifiers::ALT
                    | KeyModifiers::SUPER
                    | KeyModifiers::META;
                if !key.modifiers.intersects(blocked) {
                    return Key::Char(ch);
                }
            }
        }
    }
}
