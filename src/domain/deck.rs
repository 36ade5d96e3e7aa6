use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Колода – поставщик карт для одной раздачи.
///
/// Перемешивание делает `RandomSource` (реализации в infra), здесь только
/// хранение и выдача карт сверху.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке токенов (Clubs 2..A, ..., Spades 2..A).
    pub fn standard_52() -> Self {
        let cards = (0..Card::COUNT as u8).filter_map(Card::from_index).collect();
        Deck { cards }
    }

    /// Свежая колода, перемешанная переданным RNG.
    pub fn fresh_shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Карманные карты одному месту.
    pub fn deal_hole(&mut self) -> Result<[Card; 2], EngineError> {
        self.ensure(2)?;
        let first = self.draw()?;
        let second = self.draw()?;
        Ok([first, second])
    }

    /// `count` общих карт. При нехватке колода не трогается.
    pub fn deal_community(&mut self, count: usize) -> Result<Vec<Card>, EngineError> {
        self.ensure(count)?;
        let at = self.cards.len() - count;
        let mut dealt = self.cards.split_off(at);
        // Сверху колоды – конец вектора.
        dealt.reverse();
        Ok(dealt)
    }

    /// Проверить, что в колоде хватит карт.
    pub fn ensure(&self, requested: usize) -> Result<(), EngineError> {
        if self.cards.len() < requested {
            return Err(EngineError::DeckExhausted {
                requested,
                remaining: self.cards.len(),
            });
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::DeckExhausted {
            requested: 1,
            remaining: 0,
        })
    }
}
