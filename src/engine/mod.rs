//! Движок стола: раунды ставок, очередь хода, блайнды, олл-ины.
//!
//! Высокоуровневый объект: `TableEngine`
//! Основные операции:
//!   - `reset` – подготовить стол к новой раздаче
//!   - `start_round` – начать раунд (раздать карты, поставить блайнды)
//!   - `apply_action` – применить действие текущего игрока
//!   - `advance_actor` / `is_round_complete` – очередь хода и конец раунда
//!   - `snapshot` – копия состояния для внешних потребителей

pub mod actions;
pub mod betting;
pub mod driver;
pub mod errors;
pub mod hand_history;
pub mod positions;
pub mod table;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::BettingState;
pub use driver::{request_suggestion, HandDriver, HandOutcome};
pub use errors::EngineError;
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use table::TableEngine;
pub use validation::{ActionPlan, LegalActions};

/// RNG интерфейс для колоды.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
