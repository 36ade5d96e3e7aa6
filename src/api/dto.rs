use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Round, Seat, SeatId, SeatIndex};
use crate::engine::table::TableEngine;

/// DTO места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatSnapshot {
    pub id: SeatId,
    pub seat_index: SeatIndex,
    pub stack: Chips,
    pub hole_cards: Vec<Card>,
    pub bet: Chips,
    pub total_invested: Chips,
    pub is_folded: bool,
    pub is_all_in: bool,
    pub has_acted: bool,
}

impl SeatSnapshot {
    fn from_seat(seat_index: SeatIndex, seat: &Seat) -> Self {
        Self {
            id: seat.id,
            seat_index,
            stack: seat.stack,
            hole_cards: seat.hole_cards.clone(),
            bet: seat.bet,
            total_invested: seat.total_invested,
            is_folded: seat.is_folded,
            is_all_in: seat.is_all_in,
            has_acted: seat.has_acted,
        }
    }
}

/// Снапшот стола. Полностью владеет своими данными: его можно хранить
/// и менять, на движок это не влияет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub seats: Vec<SeatSnapshot>,
    pub community_cards: Vec<Card>,
    pub round: Option<Round>,
    pub current_actor_id: Option<SeatId>,
    pub pot: Chips,
    pub highest_bet: Chips,
    pub min_raise: Chips,
    pub dealer_index: SeatIndex,
    pub small_blind_index: SeatIndex,
    pub big_blind_index: SeatIndex,
}

impl TableSnapshot {
    pub fn capture(engine: &TableEngine) -> Self {
        Self {
            seats: engine
                .seats()
                .iter()
                .enumerate()
                .map(|(idx, seat)| SeatSnapshot::from_seat(idx as SeatIndex, seat))
                .collect(),
            community_cards: engine.community_cards().to_vec(),
            round: engine.current_round(),
            current_actor_id: engine.current_actor_id(),
            pot: engine.pot(),
            highest_bet: engine.highest_bet(),
            min_raise: engine.min_raise(),
            dealer_index: engine.dealer_index(),
            small_blind_index: engine.small_blind_index(),
            big_blind_index: engine.big_blind_index(),
        }
    }

    pub fn seat(&self, seat_id: SeatId) -> Option<&SeatSnapshot> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    /// Сколько месту нужно доставить до колла.
    pub fn to_call(&self, seat_id: SeatId) -> Chips {
        self.seat(seat_id)
            .map(|s| s.bet.shortfall_to(self.highest_bet).min(s.stack))
            .unwrap_or(Chips::ZERO)
    }

    /// Копия для другого игрока: чужие карманные карты скрыты.
    pub fn redacted_for(&self, viewer: SeatId) -> Self {
        let mut view = self.clone();
        for seat in view.seats.iter_mut().filter(|s| s.id != viewer) {
            seat.hole_cards.clear();
        }
        view
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
