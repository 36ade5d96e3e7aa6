//! Доменная модель стола: карты, фишки, колода, места, раунды, конфиг.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod round;
pub mod seat;

/// Стабильный идентификатор места.
pub type SeatId = u64;

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use round::*;
pub use seat::*;
