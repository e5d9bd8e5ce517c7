//! Fixed Kalah rules shared by the board and the engine.

pub type PlayerId = u8; // 0..=1

pub const PLAYERS: usize = 2;
pub const DEFAULT_PITS_PER_PLAYER: usize = 6;
pub const DEFAULT_STONES_PER_PIT: u32 = 6;

// Upper bounds keep client-chosen boards small enough to allocate and sow.
pub const MAX_PITS_PER_PLAYER: usize = 32;
pub const MAX_STONES_PER_PIT: u32 = 64;

/// The player who moves after `player` hands over the turn.
pub fn opponent(player: PlayerId) -> PlayerId {
    (player + 1) % PLAYERS as PlayerId
}

pub fn is_valid_player(player: PlayerId) -> bool {
    (player as usize) < PLAYERS
}
