use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Round};

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    pub round: Round,
    /// Максимальная ставка среди мест в этом раунде – её нужно уравнять.
    pub highest_bet: Chips,
    /// Минимальный прирост над `highest_bet` для рейза.
    pub min_raise: Chips,
}

impl BettingState {
    pub fn new(round: Round, big_blind: Chips) -> Self {
        Self {
            round,
            highest_bet: Chips::ZERO,
            min_raise: big_blind,
        }
    }

    /// Минимальная итоговая ставка полного рейза.
    pub fn min_raise_to(&self) -> Chips {
        self.highest_bet + self.min_raise
    }

    /// Является ли рейз до `target` полным (открывает торги заново).
    pub fn is_full_raise(&self, target: Chips) -> bool {
        target >= self.min_raise_to()
    }

    /// Обновить состояние после bet/raise до `target`.
    /// Возвращает true, если рейз полный.
    pub fn on_raise(&mut self, target: Chips) -> bool {
        if target <= self.highest_bet {
            return false;
        }
        let full = self.is_full_raise(target);
        if full {
            self.min_raise = target - self.highest_bet;
        }
        self.highest_bet = target;
        full
    }
}
