//! Инфраструктура вокруг движка:
//! - RNG-реализации для колоды;
//! - простые источники решений (боты) для dev-CLI и тестов.

pub mod bots;
pub mod rng;

pub use bots::*;
pub use rng::*;
