//! Showdown assertion helpers - fluent API for verifying winners
#![allow(dead_code)] // Test utilities may not all be used in every test

use minipoker::{HandCategory, Showdown};

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct ShowdownAssertion<'s, 'a> {
    showdown: &'s Showdown<'a>,
}

impl<'s, 'a> ShowdownAssertion<'s, 'a> {
    pub fn for_showdown(showdown: &'s Showdown<'a>) -> Self {
        Self { showdown }
    }

    /// Assert the winners, in seat order
    pub fn won_by(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.showdown.winner_names(),
            expected,
            "unexpected winners"
        );
        self
    }

    pub fn player_has(self, name: &str, category: HandCategory) -> Self {
        let entry = self
            .showdown
            .hands
            .iter()
            .find(|entry| entry.player.name == name)
            .unwrap_or_else(|| panic!("{} should be at the table", name));
        assert_eq!(
            entry.hand.category, category,
            "{} holds the wrong category",
            name
        );
        self
    }

    pub fn every_hand_is_partitioned(self) -> Self {
        for entry in &self.showdown.hands {
            assert_eq!(
                entry.hand.primary_cards.len() + entry.hand.kicker_cards.len(),
                5,
                "{} should split into five cards",
                entry.player.name
            );
        }
        self
    }
}
