//! Typewriter state machine
//!
//! Pure transition logic with no clock: [`CyclerState::tick`] performs one step
//! and returns how long to wait before the next one.

use std::fmt;
use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

use super::config::CyclerConfig;

/// What the cycler is doing with the active phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Revealing one grapheme per tick
    #[default]
    Typing,
    /// Phrase fully shown, waiting for the hold to elapse
    HoldingFull,
    /// Removing one grapheme per tick
    Deleting,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Typing => "typing",
            Mode::HoldingFull => "holding",
            Mode::Deleting => "deleting",
        };
        f.write_str(label)
    }
}

/// Observable output of a cycler at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclerSnapshot {
    pub text: String,
    pub phrase_index: usize,
    pub mode: Mode,
}

/// A phrase with its grapheme boundaries precomputed.
/// `bounds[n]` is the byte offset just past the first `n` graphemes.
#[derive(Debug, Clone)]
struct Phrase {
    text: String,
    bounds: Vec<usize>,
}

impl Phrase {
    fn new(text: &str) -> Self {
        let mut bounds = vec![0];
        bounds.extend(text.grapheme_indices(true).map(|(i, g)| i + g.len()));
        Self {
            text: text.to_string(),
            bounds,
        }
    }

    /// Length in graphemes
    fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    fn prefix(&self, graphemes: usize) -> &str {
        &self.text[..self.bounds[graphemes]]
    }
}

/// Phrase list, cursor into it, and the current mode
#[derive(Debug, Clone)]
pub struct CyclerState {
    phrases: Vec<Phrase>,
    active: usize,
    /// Graphemes of the active phrase currently shown
    revealed: usize,
    mode: Mode,
    type_interval: Duration,
    delete_interval: Duration,
    hold: Duration,
}

impl CyclerState {
    /// Build the initial state: first phrase, nothing shown, typing.
    ///
    /// Returns None for an empty phrase list, since no valid state exists.
    pub fn new(config: &CyclerConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases: config.phrases.iter().map(|p| Phrase::new(p)).collect(),
            active: 0,
            revealed: 0,
            mode: Mode::Typing,
            type_interval: config.type_interval(),
            delete_interval: config.delete_interval(),
            hold: config.hold(),
        })
    }

    /// Delay before the very first tick after mount
    pub fn initial_delay(&self) -> Duration {
        self.type_interval
    }

    /// Advance one step. Returns the delay until the next tick.
    pub fn tick(&mut self) -> Duration {
        let phrase_len = self.phrases[self.active].len();

        match self.mode {
            Mode::Typing => {
                if self.revealed < phrase_len {
                    self.revealed += 1;
                    self.type_interval
                } else {
                    self.mode = Mode::HoldingFull;
                    self.hold
                }
            }
            Mode::HoldingFull => {
                self.mode = Mode::Deleting;
                self.delete_interval
            }
            Mode::Deleting => {
                if self.revealed > 0 {
                    self.revealed -= 1;
                    self.delete_interval
                } else {
                    self.active = (self.active + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                    self.type_interval
                }
            }
        }
    }

    pub fn displayed(&self) -> &str {
        self.phrases[self.active].prefix(self.revealed)
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.active].text
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn snapshot(&self) -> CyclerSnapshot {
        CyclerSnapshot {
            text: self.displayed().to_string(),
            phrase_index: self.active,
            mode: self.mode,
        }
    }
}
