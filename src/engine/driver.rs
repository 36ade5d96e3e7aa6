use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::api::advisors::{Decision, DecisionSource, SuggestionRequest, SuggestionSource};
use crate::api::dto::TableSnapshot;
use crate::domain::{Round, SeatId};
use crate::engine::actions::PlayerActionKind;
use crate::engine::errors::EngineError;
use crate::engine::table::TableEngine;
use crate::engine::RandomSource;

/// Чем закончилась раздача для внешнего кода.
///
/// Победителя движок не определяет: это работа шоудауна, он снаружи.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandOutcome {
    /// Последний сыгранный раунд.
    pub last_round: Option<Round>,
    /// Кто не сфолдил к концу раздачи.
    pub contenders: Vec<SeatId>,
    /// Все, кроме одного, сфолдили.
    pub uncontested: bool,
    /// Сколько действий было принято.
    pub actions_applied: usize,
    pub snapshot: TableSnapshot,
}

/// Внешний цикл раздачи поверх `TableEngine`:
/// reset → раунды по порядку → (решение → apply → advance)* до завершения раунда.
#[derive(Clone, Debug)]
pub struct HandDriver {
    /// Сколько неверных решений подряд терпим от источника, прежде чем
    /// сфолдить место.
    pub max_invalid_decisions: u32,
}

impl Default for HandDriver {
    fn default() -> Self {
        Self {
            max_invalid_decisions: 3,
        }
    }
}

impl HandDriver {
    pub fn new(max_invalid_decisions: u32) -> Self {
        Self {
            max_invalid_decisions: max_invalid_decisions.max(1),
        }
    }

    /// Сыграть одну раздачу целиком.
    pub fn play_hand<R, D>(
        &self,
        engine: &mut TableEngine,
        rng: &mut R,
        decider: &mut D,
    ) -> Result<HandOutcome, EngineError>
    where
        R: RandomSource,
        D: DecisionSource,
    {
        engine.reset(rng);
        if engine.seats().iter().filter(|s| s.is_in_hand()).count() < 2 {
            return Err(EngineError::NotEnoughPlayers);
        }
        info!("hand started: dealer seat index {}", engine.dealer_index());

        let mut actions_applied = 0;
        for round in Round::ALL {
            engine.start_round(round)?;
            actions_applied += self.play_round(engine, decider)?;
            if engine.is_hand_over() {
                break;
            }
        }

        let contenders: Vec<SeatId> = engine
            .seats()
            .iter()
            .filter(|s| s.is_in_hand())
            .map(|s| s.id)
            .collect();
        let outcome = HandOutcome {
            last_round: engine.current_round(),
            uncontested: contenders.len() == 1,
            contenders,
            actions_applied,
            snapshot: engine.snapshot(),
        };
        info!(
            "hand finished on {:?}: contenders={:?} pot={}",
            outcome.last_round, outcome.contenders, outcome.snapshot.pot
        );
        Ok(outcome)
    }

    /// Крутить раунд, пока он не завершится. Возвращает число принятых действий.
    pub fn play_round<D: DecisionSource>(
        &self,
        engine: &mut TableEngine,
        decider: &mut D,
    ) -> Result<usize, EngineError> {
        let mut applied = 0;
        while !engine.is_round_complete() {
            let Some(seat_id) = engine.current_actor_id() else {
                break;
            };
            self.act(engine, decider, seat_id)?;
            engine.advance_actor();
            applied += 1;
        }
        debug!("round {:?} complete after {applied} actions", engine.current_round());
        Ok(applied)
    }

    /// Получить решение и применить его; неверные решения переспрашиваем,
    /// после лимита место фолдит.
    fn act<D: DecisionSource>(
        &self,
        engine: &mut TableEngine,
        decider: &mut D,
        seat_id: SeatId,
    ) -> Result<(), EngineError> {
        let mut failures = 0;
        loop {
            let snapshot = engine.snapshot();
            let result = decider
                .decide(&snapshot, seat_id)
                .and_then(|decision| engine.apply_action(seat_id, decision));

            match result {
                Ok(()) => return Ok(()),
                Err(err) => {
                    failures += 1;
                    warn!("seat {seat_id}: decision rejected ({failures}/{}): {err}", self.max_invalid_decisions);
                    if failures >= self.max_invalid_decisions {
                        return engine.apply_action(seat_id, PlayerActionKind::Fold);
                    }
                }
            }
        }
    }
}

/// Спросить подсказку для места. Стол при этом не меняется.
pub fn request_suggestion<S: SuggestionSource + ?Sized>(
    engine: &TableEngine,
    seat_id: SeatId,
    source: &S,
) -> Option<Decision> {
    let request = SuggestionRequest {
        seat_id,
        snapshot: engine.snapshot().redacted_for(seat_id),
        history: engine.hand_history().clone(),
    };
    source.suggest(&request)
}
