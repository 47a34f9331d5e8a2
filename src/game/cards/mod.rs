pub mod basic;
pub mod hands;


pub use basic::{Card, Rank, Suit};
pub use hands::{encode_ranks, ClassifiedHand, HandCategory, HAND_SIZE, MAX_ENCODED_RANKS};
