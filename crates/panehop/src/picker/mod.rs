//! Interactive pane selection.
//!
//! One pick cycle: enumerate panes, label everything except the active
//! pane, show the overlay, then narrow the candidate set one keystroke at
//! a time until a single pane remains or the user bails out. The round
//! loop is bounded; running out of rounds is a normal `Unresolved` return,
//! never a panic.

use tracing::debug;

use crate::config::{Config, OverlayConfig};
use crate::labels::{assign_labels, Candidate};
use crate::panes::Pane;


/// Hard cap on interactive rounds per pick cycle.
pub const MAX_ROUNDS: u32 = 16;

/// One round's worth of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// The configured cancel chord (or Ctrl-C).
    Cancel,
    /// The input source is gone; treated like a cancel.
    Eof,
}

/// Terminal state of a pick cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Picked(Pane),
    Cancelled,
    /// The round bound was exhausted without narrowing to one pane.
    Unresolved,
}

pub trait PaneSource {
    fn selectable_panes(&mut self) -> Result<Vec<Pane>, String>;
    fn active_pane(&mut self) -> Result<Option<Pane>, String>;
    fn activate(&mut self, pane: &Pane) -> Result<(), String>;
}

pub trait LabelOverlay {
    fn show(&mut self, candidates: &[Candidate], config: &OverlayConfig) -> Result<(), String>;
    fn hide(&mut self) -> Result<(), String>;
}

pub trait KeySource {
    /// Blocks until the next key arrives.
    fn next_key(&mut self) -> Key;
}

/// Candidate-narrowing state machine.
///
/// Candidates are held sorted shortest label first, then lexically; when
/// several labels complete in the same round, the first in that order wins.
#[derive(Debug)]
pub struct Selection {
    candidates: Vec<Candidate>,
    position: usize,
    round: u32,
}

impl Selection {
    pub fn new(mut candidates: Vec<Candidate>) -> Self {
        candidates.sort_by(|a, b| {
            (a.label.chars().count(), a.label.as_str())
                .cmp(&(b.label.chars().count(), b.label.as_str()))
        });
        Self {
            candidates,
            position: 0,
            round: 0,
        }
    }

    /// Process one key. `None` means keep reading input.
    ///
    /// A candidate matches a round only when exactly one character of its
    /// label remains at the current position and it equals the typed
    /// character. Rounds where nothing matches leave the candidate set and
    /// position untouched; they still count against the round bound.
    pub fn step(&mut self, key: Key) -> Option<Outcome> {
        let ch = match key {
            Key::Cancel | Key::Eof => return Some(Outcome::Cancelled),
            Key::Char(ch) => ch,
        };

        self.round += 1;
        let survivors: Vec<Candidate> = self
            .candidates
            .iter()
            .filter(|candidate| is_final_char_match(&candidate.label, self.position, ch))
            .cloned()
            .collect();

        if survivors.is_empty() {
            debug!(round = self.round, ch = %ch, "no candidate matched");
            if self.round > MAX_ROUNDS {
                return Some(Outcome::Unresolved);
            }
            return None;
        }

        self.candidates = survivors;
        if let Some(done) = self
            .candidates
            .iter()
            .find(|candidate| candidate.label.chars().count() == self.position + 1)
        {
            debug!(label = %done.label, pane = %done.pane.id, "label consumed");
            return Some(Outcome::Picked(done.pane.clone()));
        }

        // Unreachable while matching requires the final character, but a
        // partially-consumed survivor set would continue from here.
        self.position += 1;
        if self.round > MAX_ROUNDS {
            return Some(Outcome::Unresolved);
        }
        None
    }
}

/// True when the label tail at `position` is exactly the typed character.
/// An empty tail cannot occur: a fully-consumed label resolves the cycle
/// in the round that consumed it.
fn is_final_char_match(label: &str, position: usize, ch: char) -> bool {
    let mut tail = label.chars().skip(position);
    match (tail.next(), tail.next()) {
        (Some(last), None) => last == ch,
        _ => false,
    }
}

/// Run one full selection cycle.
///
/// With zero candidates this is a no-op cancel; with exactly one the pane
/// is activated without reading input or showing the overlay. Otherwise
/// the overlay is shown before the first round and hidden exactly once on
/// every exit path, before any activation.
pub fn pick(
    source: &mut dyn PaneSource,
    overlay: &mut dyn LabelOverlay,
    keys: &mut dyn KeySource,
    config: &Config,
) -> Result<Outcome, String> {
    let panes = source.selectable_panes()?;
    let active = source.active_pane()?;
    let candidates = assign_labels(
        &panes,
        active.as_ref().map(|pane| pane.id.as_str()),
        &config.alphabet,
    );
    debug!(
        alphabet = config.alphabet.len(),
        candidates = candidates.len(),
        "labels assigned"
    );

    if candidates.is_empty() {
        debug!("nothing to pick");
        return Ok(Outcome::Cancelled);
    }
    if let [only] = candidates.as_slice() {
        let pane = only.pane.clone();
        source.activate(&pane)?;
        return Ok(Outcome::Picked(pane));
    }

    overlay.show(&candidates, &config.overlay)?;
    let mut selection = Selection::new(candidates);
    let outcome = loop {
        if let Some(outcome) = selection.step(keys.next_key()) {
            break outcome;
        }
    };
    overlay.hide()?;

    if let Outcome::Picked(pane) = &outcome {
        source.activate(pane)?;
    }
    Ok(outcome)
}
