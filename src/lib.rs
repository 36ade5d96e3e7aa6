//! Движок стола безлимитного техасского холдема.
//!
//! Ведёт стеки, раунды ставок и очередь хода за одним столом и отдаёт
//! наружу снапшот состояния и API применения действий.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{DecisionSource, SuggestionSource, TableSnapshot};
pub use domain::{Chips, Round, SeatId, TableConfig};
pub use engine::{EngineError, PlayerActionKind, TableEngine};
