use crate::domain::{Chips, SeatId};

use thiserror::Error;

/// Ошибки движка стола.
///
/// Любая ошибка возвращается до изменения состояния: стол остаётся ровно таким,
/// каким был до вызова.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимый раунд: {0}")]
    InvalidRound(String),

    #[error("Сейчас не ход места id={0}")]
    NotCurrentActor(SeatId),

    #[error("Место id={0} сфолдило или в олл-ине и не может действовать")]
    IneligibleActor(SeatId),

    #[error("Неизвестное действие: {0}")]
    UnknownAction(String),

    #[error("Для BET/RAISE нужна итоговая сумма")]
    MissingAmount,

    #[error("Недопустимый рейз: минимальная итоговая ставка {min_total}")]
    IllegalRaise { min_total: Chips },

    #[error("Рейз закрыт: после неполного олл-ин рейза можно только call или fold")]
    RaiseNotReopened,

    #[error("Невозможно выполнить check – нужно доставить {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("В колоде осталось {remaining} карт, запрошено {requested}")]
    DeckExhausted { requested: usize, remaining: usize },

    #[error("Раунд ставок ещё не начат")]
    NoActiveRound,

    #[error("Недостаточно игроков со стеком для раздачи")]
    NotEnoughPlayers,

    #[error("Места с id={0} нет за столом")]
    UnknownSeat(SeatId),

    #[error("Место блайнда id={0} не участвует в раздаче – переставьте кнопку")]
    BlindSeatOut(SeatId),

    #[error("Раздача уже идёт – стек менять нельзя")]
    HandInProgress,

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(String),
}
