//! Внешняя сторона движка.
//!
//! - DTO (dto.rs) – снапшот стола для AI-модуля и UI;
//! - advisors.rs – интерфейсы источников решений и подсказок.

pub mod advisors;
pub mod dto;

pub use advisors::*;
pub use dto::*;
