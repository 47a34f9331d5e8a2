use tracing::warn;

use super::cards::HAND_SIZE;
use super::logic::GameError;

pub const DEFAULT_MIN_PLAYERS: usize = 2;
pub const DEFAULT_MAX_PLAYERS: usize = 10;

const DECK_SIZE: usize = 52;

/// Table limits for dealing and evaluating a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub min_players: usize,
    pub max_players: usize,
}

impl GameConfig {
    /// Reads `MINIPOKER_MIN_PLAYERS` and `MINIPOKER_MAX_PLAYERS`, defaulting to 2 and 10.
    pub fn new() -> Self {
        let min_players = read_env("MINIPOKER_MIN_PLAYERS").unwrap_or(DEFAULT_MIN_PLAYERS);
        let max_players = read_env("MINIPOKER_MAX_PLAYERS").unwrap_or(DEFAULT_MAX_PLAYERS);

        Self::with_bounds(min_players, max_players).unwrap_or_else(|e| {
            warn!(
                min_players,
                max_players,
                error = %e,
                "Ignoring configured player bounds, using defaults"
            );
            Self::standard()
        })
    }

    /// The 2 to 10 player table, ignoring the environment
    pub const fn standard() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: DEFAULT_MAX_PLAYERS,
        }
    }

    /// Every player must be able to hold a full hand from one deck.
    pub fn with_bounds(min_players: usize, max_players: usize) -> Result<Self, GameError> {
        if min_players < 2 || min_players > max_players || max_players * HAND_SIZE > DECK_SIZE {
            return Err(GameError::InvalidConfig {
                min: min_players,
                max: max_players,
            });
        }

        Ok(Self {
            min_players,
            max_players,
        })
    }

    pub fn allows(&self, player_count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&player_count)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Player bound is not a number, using default");
            None
        }
    }
}
