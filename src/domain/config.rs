use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

/// Максимум мест за столом.
pub const MAX_SEATS: u8 = 8;

/// Что делать со стеками при `reset` новой раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StackPolicy {
    /// Каждый раз выдавать `starting_stack`.
    #[default]
    ResetToStarting,
    /// Переносить стеки между раздачами; места с пустым стеком не играют.
    CarryForward,
}

/// Конфиг стола. Строится один раз и передаётся в движок по значению,
/// так что у каждого стола свои блайнды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Количество мест (2–8).
    #[serde(default = "default_max_seats")]
    pub max_seats: u8,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub starting_stack: Chips,
    /// Кнопка дилера на раздачу. Ротация кнопки – забота внешнего кода.
    #[serde(default)]
    pub dealer_index: SeatIndex,
    #[serde(default)]
    pub stack_policy: StackPolicy,
}

fn default_max_seats() -> u8 {
    MAX_SEATS
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_seats: MAX_SEATS,
            small_blind: Chips(50),
            big_blind: Chips(100),
            starting_stack: Chips(10_000),
            dealer_index: 0,
            stack_policy: StackPolicy::ResetToStarting,
        }
    }
}

impl TableConfig {
    pub fn new(max_seats: u8, small_blind: Chips, big_blind: Chips, starting_stack: Chips) -> Self {
        Self {
            max_seats,
            small_blind,
            big_blind,
            starting_stack,
            ..Self::default()
        }
    }

    pub fn with_dealer(mut self, dealer_index: SeatIndex) -> Self {
        self.dealer_index = dealer_index;
        self
    }

    pub fn with_stack_policy(mut self, policy: StackPolicy) -> Self {
        self.stack_policy = policy;
        self
    }

    /// Загрузить конфиг из JSON.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: TableConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(2..=MAX_SEATS).contains(&self.max_seats) {
            return Err(EngineError::InvalidConfig(format!(
                "max_seats = {} (допустимо 2..={MAX_SEATS})",
                self.max_seats
            )));
        }
        if self.small_blind.is_zero() || self.big_blind.is_zero() {
            return Err(EngineError::InvalidConfig("блайнды не могут быть нулевыми".into()));
        }
        if self.big_blind < self.small_blind {
            return Err(EngineError::InvalidConfig(format!(
                "big_blind ({}) < small_blind ({})",
                self.big_blind, self.small_blind
            )));
        }
        if self.dealer_index >= self.max_seats {
            return Err(EngineError::InvalidConfig(format!(
                "dealer_index = {} за пределами стола",
                self.dealer_index
            )));
        }
        Ok(())
    }
}
