use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::errors::EngineError;

/// Раунд ставок (улица).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Round {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Round {
    pub const ALL: [Round; 4] = [Round::Preflop, Round::Flop, Round::Turn, Round::River];

    /// Какой раунд должен идти после `current` (None – раздача ещё не начиналась).
    pub fn next_after(current: Option<Round>) -> Option<Round> {
        match current {
            None => Some(Round::Preflop),
            Some(Round::Preflop) => Some(Round::Flop),
            Some(Round::Flop) => Some(Round::Turn),
            Some(Round::Turn) => Some(Round::River),
            Some(Round::River) => None,
        }
    }

    /// Сколько общих карт открывается в начале раунда.
    pub fn community_cards_dealt(self) -> usize {
        match self {
            Round::Preflop => 0,
            Round::Flop => 3,
            Round::Turn | Round::River => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Round::Preflop => "PREFLOP",
            Round::Flop => "FLOP",
            Round::Turn => "TURN",
            Round::River => "RIVER",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Round {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Round::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| EngineError::InvalidRound(s.to_string()))
    }
}
