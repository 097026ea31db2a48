//! Label assignment.
//!
//! Every selectable pane except the active one gets a unique label built
//! from the configured alphabet: ordinal `o` over alphabet size `A` maps
//! to the character at `o % A` repeated `o / A + 1` times. Different
//! remainders differ in their first character; a shared remainder forces a
//! different run length, so no label is ever a duplicate.

use thiserror::Error;

use crate::panes::Pane;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidAlphabet {
    #[error("label alphabet is empty")]
    Empty,
}

/// Ordered set of distinct label characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Duplicate characters are dropped (first occurrence wins); they
    /// would give two ordinals the same label.
    pub fn new(chars: &str) -> Result<Self, InvalidAlphabet> {
        let mut seen = Vec::new();
        for ch in chars.chars() {
            if !ch.is_whitespace() && !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        if seen.is_empty() {
            return Err(InvalidAlphabet::Empty);
        }
        Ok(Self { chars: seen })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn label_for(&self, ordinal: usize) -> String {
        let remainder = ordinal % self.chars.len();
        let quotient = ordinal / self.chars.len();
        self.chars[remainder].to_string().repeat(quotient + 1)
    }
}

/// A labelled pane still eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub pane: Pane,
}

/// Assign labels to every pane except the active one.
///
/// Panes are walked in enumeration order; the active pane consumes no
/// ordinal. The result is sorted shortest label first, then lexically,
/// which is the tie-break order the picker relies on.
pub fn assign_labels(panes: &[Pane], active_id: Option<&str>, alphabet: &Alphabet) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = panes
        .iter()
        .filter(|pane| Some(pane.id.as_str()) != active_id)
        .enumerate()
        .map(|(ordinal, pane)| Candidate {
            label: alphabet.label_for(ordinal),
            pane: pane.clone(),
        })
        .collect();
    candidates.sort_by(|a, b| {
        (a.label.chars().count(), a.label.as_str())
            .cmp(&(b.label.chars().count(), b.label.as_str()))
    });
    candidates
}
