use std::collections::HashSet;

use tracing::debug;

use crate::game::cards::{Card, HAND_SIZE};
use crate::game::config::GameConfig;
use crate::game::logic::{GameError, Player};

/// A player that passed validation, with their five cards
pub type SeatedHand<'a> = (&'a Player, [Card; HAND_SIZE]);

/// Check a table before any hand is classified.
///
/// Checks run in a fixed order so the same malformed table always reports the same
/// error: missing seats, player count, incomplete hands, duplicate cards, then names.
pub fn validate_seats<'a>(
    seats: &[Option<&'a Player>],
    config: &GameConfig,
) -> Result<Vec<SeatedHand<'a>>, GameError> {
    let players = seats
        .iter()
        .copied()
        .enumerate()
        .map(|(seat, player)| player.ok_or(GameError::NullPlayer(seat)))
        .collect::<Result<Vec<&Player>, _>>()?;

    if !config.allows(players.len()) {
        return Err(GameError::InvalidPlayerCount {
            count: players.len(),
            min: config.min_players,
            max: config.max_players,
        });
    }

    let table = players
        .iter()
        .map(|player| {
            player
                .hand()
                .map(|cards| (*player, cards))
                .ok_or_else(|| GameError::InvalidHand(player.name.clone()))
        })
        .collect::<Result<Vec<SeatedHand<'a>>, _>>()?;

    let mut seen = HashSet::with_capacity(table.len() * HAND_SIZE);
    if !table.iter().flat_map(|(_, cards)| cards).all(|card| seen.insert(*card)) {
        debug!("Rejected table with a duplicated card");
        return Err(GameError::DuplicateCard);
    }

    validate_names(table.iter().map(|(player, _)| player.name.as_str()))?;

    Ok(table)
}

/// Trimmed names, rejecting blank and repeated ones
pub fn validate_names<'n, I>(names: I) -> Result<Vec<&'n str>, GameError>
where
    I: IntoIterator<Item = &'n str>,
{
    let mut seen = HashSet::new();
    let mut trimmed_names = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GameError::InvalidName(name.to_string()));
        }
        if !seen.insert(trimmed) {
            return Err(GameError::DuplicateName(trimmed.to_string()));
        }
        trimmed_names.push(trimmed);
    }

    Ok(trimmed_names)
}
