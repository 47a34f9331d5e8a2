// Game is the entry point of a showdown. It deals fresh hands from a shuffled deck and
// evaluates a table of players to find the winner or winners.

// Players come in as plain data (possibly deserialized), so missing seats and empty card
// slots are representable and rejected by validation before any hand is classified.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::game::cards::{Card, ClassifiedHand, HAND_SIZE};
use crate::game::config::GameConfig;
use crate::game::showdown::{resolve_winners, PlayerHand, Showdown};
use crate::game::validation::{validate_names, validate_seats};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid number of players '{count}'. A game needs between {min} and {max} players")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Invalid cards for player '{0}'. Players need 5 cards and cards can't be null")]
    InvalidHand(String),
    #[error("Invalid cards. Duplicated cards are not allowed")]
    DuplicateCard,
    #[error("Invalid player name '{0}'. Name can't be empty or null")]
    InvalidName(String),
    #[error("Two or more players have the same name '{0}'")]
    DuplicateName(String),
    #[error("Missing player at seat {0}")]
    NullPlayer(usize),
    #[error("Invalid card '{0}'")]
    InvalidCard(String),
    #[error("Invalid player bounds: min {min}, max {max}")]
    InvalidConfig { min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub cards: Vec<Option<Card>>, // None is an empty slot
}

impl Player {
    pub fn new(name: &str, cards: impl IntoIterator<Item = Card>) -> Result<Self, GameError> {
        Self::with_slots(name, cards.into_iter().map(Some).collect())
    }

    pub fn with_slots(name: &str, cards: Vec<Option<Card>>) -> Result<Self, GameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GameError::InvalidName(name.to_string()));
        }

        Ok(Self {
            name: trimmed.to_string(),
            cards,
        })
    }

    /// The player's cards when they form a complete hand
    pub fn hand(&self) -> Option<[Card; HAND_SIZE]> {
        let cards: Vec<Card> = self.cards.iter().copied().collect::<Option<_>>()?;
        cards.try_into().ok()
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal five cards to each named player from a freshly shuffled deck
    pub fn deal<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Player>, GameError> {
        self.deal_with_rng(names, &mut rand::rng())
    }

    /// Like `deal`, drawing the shuffle from `rng`. Cards go out one per player per round.
    #[instrument(skip_all, fields(players = names.len()))]
    pub fn deal_with_rng<S, R>(&self, names: &[S], rng: &mut R) -> Result<Vec<Player>, GameError>
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        self.check_player_count(names.len())?;
        let names = validate_names(names.iter().map(|name| name.as_ref()))?;

        let mut deck = Card::all_cards();
        deck.shuffle(rng);
        let mut deck = deck.into_iter();

        let mut hands: Vec<Vec<Option<Card>>> = vec![Vec::with_capacity(HAND_SIZE); names.len()];
        for _ in 0..HAND_SIZE {
            for hand in hands.iter_mut() {
                hand.push(deck.next());
            }
        }

        let players: Vec<Player> = names
            .into_iter()
            .zip(hands)
            .map(|(name, cards)| Player {
                name: name.to_string(),
                cards,
            })
            .collect();

        debug!(remaining = deck.len(), "Dealt hands");
        Ok(players)
    }

    pub fn get_winners<'a>(&self, players: &'a [Player]) -> Result<Vec<&'a Player>, GameError> {
        Ok(self.showdown(players)?.winners)
    }

    /// Winners of a table that may contain missing seats
    pub fn get_winners_from_seats<'a>(
        &self,
        seats: &'a [Option<Player>],
    ) -> Result<Vec<&'a Player>, GameError> {
        let seats = seats.iter().map(Option::as_ref).collect();
        Ok(self.evaluate(seats)?.winners)
    }

    /// Every player's classified hand together with the winners
    pub fn showdown<'a>(&self, players: &'a [Player]) -> Result<Showdown<'a>, GameError> {
        self.evaluate(players.iter().map(Some).collect())
    }

    #[instrument(skip_all, fields(seats = seats.len()))]
    fn evaluate<'a>(&self, seats: Vec<Option<&'a Player>>) -> Result<Showdown<'a>, GameError> {
        let table = validate_seats(&seats, &self.config)?;

        let hands: Vec<PlayerHand<'a>> = table
            .into_iter()
            .map(|(player, cards)| {
                let hand = ClassifiedHand::classify(&cards);
                debug!(
                    player = %player.name,
                    category = %hand.category,
                    primary_score = hand.primary_score,
                    kicker_score = hand.kicker_score,
                    "Classified hand"
                );
                PlayerHand { player, hand }
            })
            .collect();

        let winners = resolve_winners(&hands);
        info!(
            winners = ?winners.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            "Resolved showdown"
        );

        Ok(Showdown { hands, winners })
    }

    fn check_player_count(&self, count: usize) -> Result<(), GameError> {
        if self.config.allows(count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            })
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
