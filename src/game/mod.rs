// Public API
pub use cards::{encode_ranks, Card, ClassifiedHand, HandCategory, Rank, Suit, HAND_SIZE};
pub use config::GameConfig;
pub use logic::{Game, GameError, Player};
pub use showdown::{PlayerHand, Showdown};

// Internal modules
pub mod cards;
mod config;
mod logic;
mod showdown;
mod validation;
