//! Dice and the injectable randomness capability.
//!
//! The state machine and movement resolver stay deterministic: they
//! read dice values that were produced through a [`RandomSource`],
//! which tests replace with a scripted sequence.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A six-sided dice with its last rolled face.
///
/// The value persists between rolls so every player's dice can be
/// rendered at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    value: u8,
}

impl Dice {
    /// Creates a dice showing the given face.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in 1..=6; dice faces come from a
    /// [`RandomSource`] or a test script, so anything else is a
    /// programming error.
    pub fn new(value: u8) -> Self {
        assert!((1..=6).contains(&value), "dice face out of range: {value}");
        Self { value }
    }

    /// The face currently showing.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Rolls the dice, storing and returning the new face.
    #[instrument(skip(self, rng))]
    pub fn throw(&mut self, rng: &mut dyn RandomSource) -> u8 {
        self.value = rng.die();
        self.value
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self { value: 1 }
    }
}

/// Source of randomness for dice rolls and the opening-player draw.
pub trait RandomSource {
    /// A uniform dice face in 1..=6.
    fn die(&mut self) -> u8;

    /// A uniform index in 0..len, used to pick the opening player.
    fn index(&mut self, len: usize) -> usize;
}

/// Production randomness backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn die(&mut self) -> u8 {
        rand::thread_rng().gen_range(1..=6)
    }

    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// A scripted roll sequence for deterministic tests.
///
/// Rolls are consumed front to back; running out of script is a test
/// authoring error and panics. The opening-player draw always returns
/// `first_index` (seat 0, red, by default).
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    rolls: std::collections::VecDeque<u8>,
    first_index: usize,
}

impl ScriptedRolls {
    /// Creates a script from the given roll sequence.
    pub fn new(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            first_index: 0,
        }
    }

    /// Makes the opening-player draw land on the given seat.
    pub fn with_first_seat(mut self, index: usize) -> Self {
        self.first_index = index;
        self
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn die(&mut self) -> u8 {
        let value = self.rolls.pop_front().expect("roll script exhausted");
        assert!((1..=6).contains(&value), "scripted roll out of range");
        value
    }

    fn index(&mut self, _len: usize) -> usize {
        self.first_index
    }
}
