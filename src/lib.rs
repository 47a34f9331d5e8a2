// Library crate for five card showdowns
// This file exposes the public API for the simulator and integration tests

pub mod game;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use game::{
    encode_ranks, Card, ClassifiedHand, Game, GameConfig, GameError, HandCategory, Player,
    PlayerHand, Rank, Showdown, Suit,
};
pub use shared::AppError;
