use serde::{Deserialize, Serialize};

use super::basic::{Card, Rank};

/// Number of cards in every hand.
pub const HAND_SIZE: usize = 5;

/// Longest rank sequence `encode_ranks` may pack. Each rank takes two decimal
/// digits, so five ranks top out at 1414141414.
pub const MAX_ENCODED_RANKS: usize = 5;

const RANK_BASE: u64 = 100;

/// The ranking tier of a hand. Declaration order is the ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    ThreeOfAKind,
    Flush,
}

impl HandCategory {
    /// Flush and high card hands hold every card as primary, so kickers never decide them.
    pub fn has_kickers(self) -> bool {
        matches!(self, HandCategory::Pair | HandCategory::ThreeOfAKind)
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Flush => "Flush",
        }
    }
}

impl std::fmt::Display for HandCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pack an ordered rank sequence into one integer, two decimal digits per rank,
/// most significant rank first. Equal-length sequences compare like tuples.
pub fn encode_ranks<I>(ranks: I) -> u64
where
    I: IntoIterator<Item = Rank>,
{
    let mut count = 0;
    let score = ranks.into_iter().fold(0, |score, rank| {
        count += 1;
        score * RANK_BASE + u64::from(rank.value())
    });
    debug_assert!(
        count <= MAX_ENCODED_RANKS,
        "encode_ranks only packs up to {MAX_ENCODED_RANKS} ranks, got {count}"
    );
    score
}

fn encode_cards(cards: &[Card]) -> u64 {
    encode_ranks(cards.iter().map(|card| card.rank))
}

/// A five card hand split into scoring and tie-break cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    pub primary_cards: Vec<Card>,
    pub kicker_cards: Vec<Card>,
    pub primary_score: u64,
    pub kicker_score: u64,
}

impl ClassifiedHand {
    pub fn classify(cards: &[Card; HAND_SIZE]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let first_suit = sorted[0].suit;
        if sorted.iter().all(|card| card.suit == first_suit) {
            return Self::without_kickers(HandCategory::Flush, sorted);
        }

        let group = Self::largest_rank_group(&sorted);
        match group.len() {
            0 | 1 => Self::without_kickers(HandCategory::HighCard, sorted),
            size => {
                let category = if size == 2 {
                    HandCategory::Pair
                } else {
                    HandCategory::ThreeOfAKind
                };

                // Four of a kind still scores as three; the leftover card stays a kicker.
                let primary_cards: Vec<Card> = group.into_iter().take(3).collect();
                let kicker_cards: Vec<Card> = sorted
                    .into_iter()
                    .filter(|card| !primary_cards.contains(card))
                    .collect();

                Self {
                    category,
                    primary_score: encode_cards(&primary_cards),
                    kicker_score: encode_cards(&kicker_cards),
                    primary_cards,
                    kicker_cards,
                }
            }
        }
    }

    fn without_kickers(category: HandCategory, cards: Vec<Card>) -> Self {
        Self {
            category,
            primary_score: encode_cards(&cards),
            kicker_score: 0,
            primary_cards: cards,
            kicker_cards: Vec::new(),
        }
    }

    /// Cards of the most repeated rank, higher rank winning ties. Expects `sorted`
    /// in descending order so equal ranks sit next to each other.
    fn largest_rank_group(sorted: &[Card]) -> Vec<Card> {
        let mut groups: Vec<Vec<Card>> = Vec::new();
        for card in sorted {
            match groups.last_mut() {
                Some(group) if group[0].rank == card.rank => group.push(*card),
                _ => groups.push(vec![*card]),
            }
        }

        groups.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b[0].rank.cmp(&a[0].rank)));
        groups.into_iter().next().unwrap_or_default()
    }

    /// Every card of the hand, primary cards first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.primary_cards.iter().chain(self.kicker_cards.iter())
    }
}
