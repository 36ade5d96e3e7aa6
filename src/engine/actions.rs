use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatId};
use crate::engine::errors::EngineError;

/// Тип действия игрока.
///
/// Суммы у `Bet`/`Raise` – итоговая ставка в раунде, а не прирост.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", content = "amount", rename_all = "UPPERCASE")]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
}

impl PlayerActionKind {
    /// Собрать действие из внешней пары (имя, сумма), например от AI-модуля.
    pub fn parse(name: &str, amount: Option<Chips>) -> Result<Self, EngineError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "FOLD" => Ok(Self::Fold),
            "CHECK" => Ok(Self::Check),
            "CALL" => Ok(Self::Call),
            "BET" => amount.map(Self::Bet).ok_or(EngineError::MissingAmount),
            "RAISE" => amount.map(Self::Raise).ok_or(EngineError::MissingAmount),
            _ => Err(EngineError::UnknownAction(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fold => "FOLD",
            Self::Check => "CHECK",
            Self::Call => "CALL",
            Self::Bet(_) => "BET",
            Self::Raise(_) => "RAISE",
        }
    }

    /// Итоговая сумма для `Bet`/`Raise`.
    pub fn target(&self) -> Option<Chips> {
        match self {
            Self::Bet(amount) | Self::Raise(amount) => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for PlayerActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(amount) => write!(f, "{} {}", self.name(), amount),
            None => f.write_str(self.name()),
        }
    }
}

/// Конкретное действие конкретного места.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    pub seat_id: SeatId,
    pub kind: PlayerActionKind,
}
