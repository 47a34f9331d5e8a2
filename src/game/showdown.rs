use serde::Serialize;

use crate::game::cards::ClassifiedHand;
use crate::game::logic::Player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerHand<'a> {
    pub player: &'a Player,
    pub hand: ClassifiedHand,
}

/// Outcome of evaluating a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showdown<'a> {
    pub hands: Vec<PlayerHand<'a>>, // In seat order
    pub winners: Vec<&'a Player>,
}

impl Showdown<'_> {
    pub fn winner_names(&self) -> Vec<&str> {
        self.winners.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Narrow the table down to its winners: best category, then best primary score, then
/// best kicker score for the categories that have kickers. Every phase runs only while
/// more than one candidate is left, and whoever survives all of them shares the win.
pub fn resolve_winners<'a>(hands: &[PlayerHand<'a>]) -> Vec<&'a Player> {
    let mut candidates: Vec<&PlayerHand<'a>> = hands.iter().collect();

    keep_best(&mut candidates, |h| h.hand.category);

    if candidates.len() > 1 {
        keep_best(&mut candidates, |h| h.hand.primary_score);
    }

    let has_kickers = candidates
        .first()
        .is_some_and(|h| h.hand.category.has_kickers());
    if candidates.len() > 1 && has_kickers {
        keep_best(&mut candidates, |h| h.hand.kicker_score);
    }

    candidates.into_iter().map(|h| h.player).collect()
}

fn keep_best<T, K: Ord>(candidates: &mut Vec<T>, key: impl Fn(&T) -> K) {
    if let Some(best) = candidates.iter().map(&key).max() {
        candidates.retain(|candidate| key(candidate) == best);
    }
}
