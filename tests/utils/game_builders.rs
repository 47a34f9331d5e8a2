//! Table builders - predetermined hands for showdown scenarios
#![allow(dead_code)] // Test utilities may not all be used in every test

use minipoker::{Card, Player};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(minipoker::Card::new(minipoker::Rank::$rank, minipoker::Suit::$suit)),*]
    };
}

// ============================================================================
// Table Setup Utilities
// ============================================================================

pub struct TableBuilder {
    seats: Vec<Option<Player>>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { seats: vec![] }
    }

    /// Seat a player holding exactly these cards
    pub fn with_player(mut self, name: &str, cards: Vec<Card>) -> Self {
        self.seats.push(Some(Player {
            name: name.to_string(),
            cards: cards.into_iter().map(Some).collect(),
        }));
        self
    }

    /// Seat a player whose hand has an empty slot after the given cards
    pub fn with_incomplete_player(mut self, name: &str, cards: Vec<Card>) -> Self {
        let mut slots: Vec<Option<Card>> = cards.into_iter().map(Some).collect();
        slots.push(None);
        self.seats.push(Some(Player {
            name: name.to_string(),
            cards: slots,
        }));
        self
    }

    pub fn with_missing_seat(mut self) -> Self {
        self.seats.push(None);
        self
    }

    /// Jen, Mike, Bob and Alice: one player per category, Alice's flush wins
    pub fn with_one_of_each_category(self) -> Self {
        self.with_player("Jen", cards![Ace Spades, Ten Hearts, Eight Clubs, Five Diamonds, King Diamonds]) // High card
            .with_player("Mike", cards![Nine Spades, Nine Hearts, Two Clubs, Three Diamonds, Jack Clubs]) // Pair
            .with_player("Bob", cards![Four Spades, Four Hearts, Four Clubs, Six Diamonds, Seven Clubs]) // Three of a kind
            .with_player("Alice", cards![Two Hearts, Five Hearts, Seven Hearts, Queen Hearts, King Hearts]) // Flush
    }

    pub fn build_seats(self) -> Vec<Option<Player>> {
        self.seats
    }

    /// All players, panicking on a missing seat
    pub fn build(self) -> Vec<Player> {
        self.seats
            .into_iter()
            .map(|seat| seat.expect("table has a missing seat, use build_seats"))
            .collect()
    }
}
