//! Cancel-key chord parsing and matching.
//!
//! The cancel key comes from config as a chord string ("esc", "ctrl+g");
//! it is parsed once at setup and matched against crossterm key events
//! while the picker waits for input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key plus the exact modifier set that must accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

pub fn parse_key_chord(input: &str) -> Option<KeyChord> {
    let mut code = None;
    let mut modifiers = KeyModifiers::NONE;
    for part in input.trim().to_lowercase().split('+') {
        match part.trim() {
            "" => return None,
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "meta" | "cmd" | "super" => modifiers |= KeyModifiers::SUPER,
            name => {
                if code.replace(key_code(name)?).is_some() {
                    return None;
                }
            }
        }
    }
    Some(KeyChord {
        code: code?,
        modifiers,
    })
}

fn key_code(name: &str) -> Option<KeyCode> {
    match name {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "tab" => Some(KeyCode::Tab),
        "space" | "spacebar" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(KeyCode::Char(ch)),
                _ => None,
            }
        }
    }
}

pub fn matches_chord(event: &KeyEvent, chord: &KeyChord) -> bool {
    event.code == chord.code && normalized(event.modifiers) == normalized(chord.modifiers)
}

/// SUPER and META report differently across terminals; treat them as one.
fn normalized(modifiers: KeyModifiers) -> KeyModifiers {
    let mut out = modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
    if modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        out |= KeyModifiers::SUPER;
    }
    out
}
