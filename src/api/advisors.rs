//! Внешние источники решений и подсказок.
//!
//! Движок их не вызывает сам: решение запрашивает драйвер, а результат
//! всё равно проходит проверку в `TableEngine::apply_action`.

use serde::{Deserialize, Serialize};

use crate::api::dto::TableSnapshot;
use crate::domain::SeatId;
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandHistory;

/// Решение источника: действие (сумма внутри Bet/Raise).
pub type Decision = PlayerActionKind;

/// Источник решений (AI-модуль, человек за UI, скрипт).
pub trait DecisionSource {
    fn decide(&mut self, snapshot: &TableSnapshot, seat_id: SeatId) -> Result<Decision, EngineError>;
}

/// Запрос к сервису подсказок: состояние стола + история раздачи.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub seat_id: SeatId,
    pub snapshot: TableSnapshot,
    pub history: HandHistory,
}

/// Сервис подсказок. Только чтение, на стол не влияет.
pub trait SuggestionSource {
    fn suggest(&self, request: &SuggestionRequest) -> Option<Decision>;
}
