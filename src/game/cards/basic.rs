use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::game::logic::GameError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

// Suits carry no poker value here; the order only makes card sorting deterministic.
impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "C",
                Suit::Diamonds => "D",
                Suit::Hearts => "H",
                Suit::Spades => "S",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Numeric value of the rank, Two = 2 through Ace = 14.
    ///
    /// Scores are built directly from these values, so the mapping is spelled out
    /// instead of being derived from declaration order.
    pub const fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
        }
    }

    pub fn from_value(value: u8) -> Option<Self> {
        Rank::iter().find(|rank| rank.value() == value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(s.to_string()),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn from_string(s: &str) -> Result<Self, GameError> {
        if s.len() != 2 || !s.is_char_boundary(1) {
            return Err(GameError::InvalidCard(s.to_string()));
        }

        let rank = Rank::try_from(&s[0..1]).map_err(|_| GameError::InvalidCard(s.to_string()))?;
        let suit = Suit::try_from(&s[1..2]).map_err(|_| GameError::InvalidCard(s.to_string()))?;

        Ok(Self::new(rank, suit))
    }

    /// The standard 52-card deck, unshuffled.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl std::str::FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_string(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ordering() {
        let card1 = Card::new(Rank::Three, Suit::Clubs);
        let card2 = Card::new(Rank::Three, Suit::Spades);
        let card3 = Card::new(Rank::Ace, Suit::Clubs);

        assert!(card2 > card1); // Same rank, suit decides
        assert!(card3 > card1); // Higher rank
        assert!(card3 > card2); // Rank beats suit
    }

    #[test]
    fn test_card_equality() {
        assert_eq!(
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs)
        );
        assert_ne!(
            Card::new(Rank::Nine, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs)
        );
        assert_ne!(
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Three, Suit::Clubs)
        );
    }

    #[test]
    fn test_card_hash_matches_equality() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        assert!(seen.insert(Card::new(Rank::Three, Suit::Diamonds)));
        assert!(!seen.insert(Card::new(Rank::Three, Suit::Diamonds)));
        assert!(seen.insert(Card::new(Rank::Three, Suit::Hearts)));
    }

    #[test]
    fn test_rank_values() {
        let values: Vec<u8> = Rank::iter().map(Rank::value).collect();
        assert_eq!(values, (2..=14).collect::<Vec<u8>>());

        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_rank_ordering_follows_value() {
        let ranks: Vec<Rank> = Rank::iter().collect();
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1], "{} should be below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_card_from_string() {
        let king_hearts = Card::from_string("KH").unwrap();
        assert_eq!(king_hearts.rank, Rank::King);
        assert_eq!(king_hearts.suit, Suit::Hearts);

        let ten_diamonds: Card = "TD".parse().unwrap();
        assert_eq!(ten_diamonds, Card::new(Rank::Ten, Suit::Diamonds));

        assert!(Card::from_string("ZH").is_err()); // Invalid rank
        assert!(Card::from_string("KX").is_err()); // Invalid suit
        assert!(Card::from_string("K").is_err()); // Too short
        assert!(Card::from_string("KHS").is_err()); // Too long
        assert!(Card::from_string("").is_err());
        assert!(matches!(
            Card::from_string("1S"),
            Err(GameError::InvalidCard(text)) if text == "1S"
        ));
    }

    #[test]
    fn test_card_from_string_multibyte() {
        // Two bytes, but not two ASCII characters
        assert!(Card::from_string("é").is_err());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::King, Suit::Hearts).to_string(), "KH");
        assert_eq!(Card::new(Rank::Two, Suit::Spades).to_string(), "2S");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "TD");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "AC");
    }

    #[test]
    fn test_display_parses_back() {
        for rank in Rank::iter() {
            for suit in Suit::iter() {
                let card = Card::new(rank, suit);
                assert_eq!(Card::from_string(&card.to_string()).unwrap(), card);
            }
        }
    }

    #[test]
    fn test_all_cards() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);

        let unique: std::collections::HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }
}
