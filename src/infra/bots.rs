use std::collections::VecDeque;

use crate::api::advisors::{Decision, DecisionSource};
use crate::api::dto::TableSnapshot;
use crate::domain::SeatId;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;

/// Самый простой бот: check, если можно, иначе call.
#[derive(Clone, Debug, Default)]
pub struct PassiveBot;

impl DecisionSource for PassiveBot {
    fn decide(&mut self, snapshot: &TableSnapshot, seat_id: SeatId) -> Result<Decision, EngineError> {
        if snapshot.to_call(seat_id).is_zero() {
            Ok(PlayerActionKind::Check)
        } else {
            Ok(PlayerActionKind::Call)
        }
    }
}

/// Бот по сценарию: отдаёт заготовленные действия, когда до них доходит
/// очередь. Остальные ходы – как `PassiveBot`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedBot {
    script: VecDeque<PlayerAction>,
    fallback: PassiveBot,
}

impl ScriptedBot {
    pub fn new(script: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: PassiveBot,
        }
    }

    /// Сколько действий сценария ещё не отыграно.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionSource for ScriptedBot {
    fn decide(&mut self, snapshot: &TableSnapshot, seat_id: SeatId) -> Result<Decision, EngineError> {
        match self.script.front() {
            Some(next) if next.seat_id == seat_id => {
                let kind = next.kind;
                self.script.pop_front();
                Ok(kind)
            }
            _ => self.fallback.decide(snapshot, seat_id),
        }
    }
}
