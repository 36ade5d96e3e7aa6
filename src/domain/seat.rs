use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatId;

/// Одно место за столом (не важно, кто за ним – человек или бот).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    /// Фишки, доступные для ставок.
    pub stack: Chips,
    /// Карманные карты: 0 (до раздачи) или 2.
    pub hole_cards: Vec<Card>,
    /// Ставка в текущем раунде.
    pub bet: Chips,
    /// Сколько всего вложено за раздачу. Внутри раздачи только растёт.
    pub total_invested: Chips,
    pub is_folded: bool,
    pub is_all_in: bool,
    /// Ходил ли игрок в этом раунде (с начала раунда или с последнего полного рейза).
    pub has_acted: bool,
}

impl Seat {
    pub fn new(id: SeatId, stack: Chips) -> Self {
        Self {
            id,
            stack,
            hole_cards: Vec::new(),
            bet: Chips::ZERO,
            total_invested: Chips::ZERO,
            is_folded: false,
            is_all_in: false,
            has_acted: false,
        }
    }

    /// Может ли место ещё действовать (не сфолдил и не в олл-ине).
    pub fn is_eligible(&self) -> bool {
        !self.is_folded && !self.is_all_in
    }

    /// Участвует ли место в банке.
    pub fn is_in_hand(&self) -> bool {
        !self.is_folded
    }

    /// Сколько нужно доставить до `highest_bet`.
    pub fn to_call(&self, highest_bet: Chips) -> Chips {
        self.bet.shortfall_to(highest_bet)
    }

    /// Максимальная итоговая ставка в раунде (олл-ин).
    pub fn max_total(&self) -> Chips {
        self.stack + self.bet
    }

    /// Перенести `amount` фишек из стека в ставку. Возвращает реально поставленное
    /// (не больше стека); при нулевом остатке место уходит в олл-ин.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.bet += paid;
        self.total_invested += paid;
        if self.stack.is_zero() && !paid.is_zero() {
            self.is_all_in = true;
        }
        paid
    }

    /// Подготовить место к новой раздаче.
    pub(crate) fn reset_for_hand(&mut self, stack: Chips) {
        self.stack = stack;
        self.hole_cards.clear();
        self.bet = Chips::ZERO;
        self.total_invested = Chips::ZERO;
        self.is_all_in = false;
        self.has_acted = false;
        // Пустой стек – в раздаче не участвует.
        self.is_folded = stack.is_zero();
    }
}
