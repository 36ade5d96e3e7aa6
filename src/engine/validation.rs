use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Seat};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;

/// Проверенное действие: что именно движок сделает со столом.
///
/// Строится без мутаций, применяется только после успешной проверки.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionPlan {
    Fold,
    Check,
    /// Доставить `amount` фишек (при нехватке стека – олл-ин колл).
    Call { amount: Chips },
    /// Довести ставку до `target` (итоговая сумма, уже обрезанная по стеку).
    RaiseTo { target: Chips },
}

/// Проверка, может ли место выполнить это действие при текущем состоянии ставок.
pub fn validate_action(
    seat: &Seat,
    action: &PlayerActionKind,
    betting: &BettingState,
) -> Result<ActionPlan, EngineError> {
    if !seat.is_eligible() {
        return Err(EngineError::IneligibleActor(seat.id));
    }

    let to_call = seat.to_call(betting.highest_bet);

    match *action {
        PlayerActionKind::Fold => Ok(ActionPlan::Fold),

        PlayerActionKind::Check => {
            if to_call.is_zero() {
                Ok(ActionPlan::Check)
            } else {
                Err(EngineError::CannotCheck { to_call })
            }
        }

        // Call без долга – тот же check.
        PlayerActionKind::Call if to_call.is_zero() => Ok(ActionPlan::Check),
        PlayerActionKind::Call => Ok(ActionPlan::Call {
            amount: to_call.min(seat.stack),
        }),

        PlayerActionKind::Bet(requested) | PlayerActionKind::Raise(requested) => {
            validate_raise(seat, requested, betting)
        }
    }
}

fn validate_raise(seat: &Seat, requested: Chips, betting: &BettingState) -> Result<ActionPlan, EngineError> {
    let max_total = seat.max_total();

    // Стека не хватает даже на колл: принимаем только олл-ин целиком,
    // highest_bet при этом не меняется.
    if max_total <= betting.highest_bet {
        if requested < max_total {
            return Err(EngineError::IllegalRaise { min_total: max_total });
        }
        return Ok(ActionPlan::Call { amount: seat.stack });
    }

    if seat.has_acted {
        return Err(EngineError::RaiseNotReopened);
    }

    let min_total = betting.min_raise_to();
    if max_total < min_total {
        // Короткий стек: единственный легальный рейз – олл-ин.
        if requested < max_total {
            return Err(EngineError::IllegalRaise { min_total: max_total });
        }
        return Ok(ActionPlan::RaiseTo { target: max_total });
    }

    if requested < min_total {
        return Err(EngineError::IllegalRaise { min_total });
    }
    Ok(ActionPlan::RaiseTo {
        target: requested.min(max_total),
    })
}

/// Что сейчас разрешено месту. Для UI и для советчиков.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegalActions {
    pub can_check: bool,
    pub to_call: Chips,
    pub can_raise: bool,
    /// Минимальная итоговая сумма рейза (или олл-ин, если стек короче).
    pub min_raise_to: Chips,
    /// Олл-ин.
    pub max_raise_to: Chips,
}

pub fn legal_actions(seat: &Seat, betting: &BettingState) -> Option<LegalActions> {
    if !seat.is_eligible() {
        return None;
    }
    let to_call = seat.to_call(betting.highest_bet);
    let max_total = seat.max_total();
    let can_raise = max_total > betting.highest_bet && !seat.has_acted;

    Some(LegalActions {
        can_check: to_call.is_zero(),
        to_call: to_call.min(seat.stack),
        can_raise,
        min_raise_to: betting.min_raise_to().min(max_total),
        max_raise_to: max_total,
    })
}
