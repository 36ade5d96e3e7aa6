use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Round, SeatId, SeatIndex};
use crate::engine::actions::PlayerActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Стол сброшен под новую раздачу.
    HandStarted { dealer: SeatIndex },

    /// Начался раунд ставок.
    RoundStarted { round: Round },

    /// Блайнды (фактически поставленные суммы, могут быть короче номинала).
    BlindsPosted {
        small_blind: (SeatId, Chips),
        big_blind: (SeatId, Chips),
    },

    /// Место получило карманные карты. Сами карты в историю не пишем.
    HoleCardsDealt { seat_id: SeatId },

    /// Открыты общие карты.
    CommunityDealt { round: Round, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        seat_id: SeatId,
        round: Round,
        action: PlayerActionKind,
        /// Ставка места в раунде после действия.
        bet_after: Chips,
        stack_after: Chips,
        pot_after: Chips,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// История одной раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Только действия игроков, в порядке хода.
    pub fn actions(&self) -> impl Iterator<Item = (SeatId, Round, PlayerActionKind)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            HandEventKind::PlayerActed {
                seat_id,
                round,
                action,
                ..
            } => Some((seat_id, round, action)),
            _ => None,
        })
    }
}
