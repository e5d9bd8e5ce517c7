//! Board geometry and the stone-moving primitives used by the engine.
//!
//! Layout for `n` pits per player (`P = n + 1` places per side):
//!
//! ```text
//! [p0 pit 0 .. p0 pit n-1, p0 store, p1 pit 0 .. p1 pit n-1, p1 store]
//!  0                       P-1       P                       2P-1
//! ```
//!
//! Slot `i` faces slot `2P - 1 - i`, so player 0's first pit faces player
//! 1's store side and vice versa.

use std::ops::Range;

use crate::domain::config::GameConfig;
use crate::domain::errors::DomainError;
use crate::domain::rules::{opponent, PlayerId, PLAYERS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<u32>,
}

impl Board {
    pub fn new(config: &GameConfig) -> Self {
        let places = config.places_per_player();
        let slots = (0..PLAYERS * places)
            .map(|i| {
                if i % places == places - 1 {
                    0
                } else {
                    config.stones_per_pit
                }
            })
            .collect();
        Self { slots }
    }

    /// Adopt raw slot counts, e.g. from a persisted record.
    ///
    /// The shape must be two halves with at least one pit each, and the
    /// total must fit in a `u32`. Every later sum covers a subset of the
    /// stones, so none of them can overflow.
    pub fn from_slots(slots: Vec<u32>) -> Result<Self, DomainError> {
        if slots.len() < 2 * PLAYERS || slots.len() % PLAYERS != 0 {
            return Err(DomainError::CorruptState(format!(
                "board must have an even length of at least {}, got {}",
                2 * PLAYERS,
                slots.len()
            )));
        }
        if slots
            .iter()
            .try_fold(0u32, |total, &stones| total.checked_add(stones))
            .is_none()
        {
            return Err(DomainError::CorruptState(
                "board holds more stones than can be counted".to_string(),
            ));
        }
        Ok(Self { slots })
    }

    pub fn slots(&self) -> &[u32] {
        &self.slots
    }

    pub fn places_per_player(&self) -> usize {
        self.slots.len() / PLAYERS
    }

    pub fn stones(&self, index: usize) -> u32 {
        self.slots[index]
    }

    pub fn store_index(&self, player: PlayerId) -> usize {
        (player as usize + 1) * self.places_per_player() - 1
    }

    /// Indices of `player`'s pits, store excluded.
    pub fn pit_range(&self, player: PlayerId) -> Range<usize> {
        let start = player as usize * self.places_per_player();
        start..self.store_index(player)
    }

    pub fn is_own_pit(&self, player: PlayerId, index: usize) -> bool {
        self.pit_range(player).contains(&index)
    }

    pub fn is_store_of(&self, player: PlayerId, index: usize) -> bool {
        index == self.store_index(player)
    }

    pub fn opposite(&self, index: usize) -> usize {
        self.slots.len() - 1 - index
    }

    pub fn pit_stones(&self, player: PlayerId) -> u32 {
        self.slots[self.pit_range(player)].iter().sum()
    }

    /// Pits plus store.
    pub fn score(&self, player: PlayerId) -> u32 {
        self.pit_stones(player) + self.slots[self.store_index(player)]
    }

    pub fn total_stones(&self) -> u32 {
        self.slots.iter().sum()
    }

    /// True once either side has no stones left in its pits.
    pub fn has_empty_side(&self) -> bool {
        (0..PLAYERS as PlayerId).any(|p| self.pit_stones(p) == 0)
    }

    /// Lift every stone from `pit` and drop them one by one into the
    /// following slots, wrapping around and passing over the opponent's
    /// store. Returns the landing slot.
    ///
    /// Callers validate ownership and non-emptiness first.
    pub fn sow(&mut self, player: PlayerId, pit: usize) -> usize {
        let skip = self.store_index(opponent(player));
        let mut remaining = std::mem::take(&mut self.slots[pit]);
        let mut current = pit;

        while remaining > 0 {
            current = (current + 1) % self.slots.len();
            if current == skip {
                continue;
            }
            self.slots[current] += 1;
            remaining -= 1;
        }

        current
    }

    /// Move the stones at `index` and at its opposite slot into `player`'s
    /// store. Returns the number of stones moved.
    pub fn capture(&mut self, player: PlayerId, index: usize) -> u32 {
        let opposite = self.opposite(index);
        let captured = std::mem::take(&mut self.slots[index])
            + std::mem::take(&mut self.slots[opposite]);
        let store = self.store_index(player);
        self.slots[store] += captured;
        captured
    }

    /// Each player banks whatever is left in their own pits.
    pub fn sweep(&mut self) {
        for player in 0..PLAYERS as PlayerId {
            let store = self.store_index(player);
            let remaining: u32 = self
                .pit_range(player)
                .map(|i| std::mem::take(&mut self.slots[i]))
                .sum();
            self.slots[store] += remaining;
        }
    }
}
