use log::debug;

use crate::api::dto::TableSnapshot;
use crate::domain::{
    Card, Chips, Deck, Round, Seat, SeatId, SeatIndex, StackPolicy, TableConfig,
};
use crate::engine::actions::PlayerActionKind;
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{next_eligible_seat, offset_seat, seats_after};
use crate::engine::validation::{legal_actions, validate_action, ActionPlan, LegalActions};
use crate::engine::RandomSource;

/// Состояние одного стола на одну раздачу.
///
/// Движок сам ход не передаёт: внешний драйвер вызывает
/// `start_round` → (`current_actor_id` → `apply_action` → `advance_actor`
/// → `is_round_complete`)* и решает, когда переходить к следующему раунду.
#[derive(Clone, Debug)]
pub struct TableEngine {
    config: TableConfig,
    seats: Vec<Seat>,
    community_cards: Vec<Card>,
    /// Информационная сумма вложений, не используется для расчёта выигрыша.
    pot: Chips,
    current_round: Option<Round>,
    /// `None` – некому ходить.
    current_actor: Option<SeatIndex>,
    betting: BettingState,
    dealer_index: SeatIndex,
    small_blind_index: SeatIndex,
    big_blind_index: SeatIndex,
    deck: Deck,
    history: HandHistory,
}

impl TableEngine {
    /// Стол с id мест 1..=max_seats.
    pub fn new(config: TableConfig) -> Result<Self, EngineError> {
        let ids = (1..=u64::from(config.max_seats)).collect();
        Self::with_seat_ids(config, ids)
    }

    /// Стол с заданными id мест (по одному на место, без повторов).
    pub fn with_seat_ids(config: TableConfig, ids: Vec<SeatId>) -> Result<Self, EngineError> {
        config.validate()?;
        if ids.len() != config.max_seats as usize {
            return Err(EngineError::InvalidConfig(format!(
                "ожидалось {} id мест, передано {}",
                config.max_seats,
                ids.len()
            )));
        }
        if ids.iter().enumerate().any(|(i, id)| ids[..i].contains(id)) {
            return Err(EngineError::InvalidConfig("id мест повторяются".into()));
        }

        let seats = ids
            .into_iter()
            .map(|id| Seat::new(id, config.starting_stack))
            .collect();
        let mut engine = Self {
            betting: BettingState::new(Round::Preflop, config.big_blind),
            seats,
            community_cards: Vec::new(),
            pot: Chips::ZERO,
            current_round: None,
            current_actor: None,
            dealer_index: 0,
            small_blind_index: 0,
            big_blind_index: 0,
            deck: Deck::standard_52(),
            history: HandHistory::new(),
            config,
        };
        engine.place_button();
        Ok(engine)
    }

    /// Сброс стола под новую раздачу: свежая перемешанная колода,
    /// места и состояние раундов заново.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        self.deck = Deck::fresh_shuffled(rng);

        let policy = self.config.stack_policy;
        let starting = self.config.starting_stack;
        for seat in self.seats.iter_mut() {
            let stack = match policy {
                StackPolicy::ResetToStarting => starting,
                StackPolicy::CarryForward => seat.stack,
            };
            seat.reset_for_hand(stack);
        }

        self.community_cards.clear();
        self.pot = Chips::ZERO;
        self.current_round = None;
        self.current_actor = None;
        self.betting = BettingState::new(Round::Preflop, self.config.big_blind);
        self.place_button();

        self.history.clear();
        self.history.push(HandEventKind::HandStarted {
            dealer: self.dealer_index,
        });
        debug!(
            "reset: dealer={} sb={} bb={}",
            self.dealer_index, self.small_blind_index, self.big_blind_index
        );
    }

    /// Переставить кнопку. Действует с ближайшего `reset`.
    pub fn set_dealer(&mut self, dealer_index: SeatIndex) -> Result<(), EngineError> {
        if dealer_index >= self.config.max_seats {
            return Err(EngineError::InvalidConfig(format!(
                "dealer_index = {dealer_index} за пределами стола"
            )));
        }
        self.config.dealer_index = dealer_index;
        Ok(())
    }

    /// Докупка / вывод фишек между `reset` и префлопом. Пустой стек – место
    /// не играет. При `ResetToStarting` следующий `reset` стек перезапишет.
    pub fn set_stack(&mut self, seat_id: SeatId, stack: Chips) -> Result<(), EngineError> {
        // После начала раздачи (даже законченной) фолды и стеки трогать нельзя.
        if self.current_round.is_some() {
            return Err(EngineError::HandInProgress);
        }
        let idx = self.index_of(seat_id).ok_or(EngineError::UnknownSeat(seat_id))?;
        let seat = &mut self.seats[idx as usize];
        seat.stack = stack;
        seat.is_folded = stack.is_zero();
        Ok(())
    }

    fn place_button(&mut self) {
        let n = self.seats.len();
        self.dealer_index = self.config.dealer_index;
        self.small_blind_index = offset_seat(self.dealer_index, 1, n);
        self.big_blind_index = offset_seat(self.dealer_index, 2, n);
    }

    /// Начать раунд ставок. Раунды идут строго Preflop → Flop → Turn → River.
    pub fn start_round(&mut self, round: Round) -> Result<(), EngineError> {
        if Round::next_after(self.current_round) != Some(round) {
            return Err(EngineError::InvalidRound(match self.current_round {
                Some(current) => format!("{round} не может идти после {current}"),
                None => format!("раздача должна начинаться с PREFLOP, а не с {round}"),
            }));
        }

        if round == Round::Preflop {
            for idx in [self.small_blind_index, self.big_blind_index] {
                let seat = &self.seats[idx as usize];
                if !seat.is_in_hand() {
                    return Err(EngineError::BlindSeatOut(seat.id));
                }
            }
        }

        // Карты проверяем до любых изменений стола.
        let cards_needed = match round {
            Round::Preflop => 2 * self.seats.iter().filter(|s| s.is_in_hand()).count(),
            other => other.community_cards_dealt(),
        };
        self.deck.ensure(cards_needed)?;

        self.current_round = Some(round);
        self.betting = BettingState::new(round, self.config.big_blind);
        for seat in self.seats.iter_mut() {
            seat.bet = Chips::ZERO;
            seat.has_acted = false;
        }
        self.history.push(HandEventKind::RoundStarted { round });

        match round {
            Round::Preflop => {
                self.deal_hole_cards()?;
                self.post_blinds();
                let first = offset_seat(self.dealer_index, 3, self.seats.len());
                self.current_actor = next_eligible_seat(&self.seats, first, true);
            }
            _ => {
                self.deal_community(round)?;
                self.current_actor = next_eligible_seat(&self.seats, self.dealer_index, false);
            }
        }

        debug!(
            "start_round {round}: actor={:?} highest_bet={} board={}",
            self.current_actor,
            self.betting.highest_bet,
            self.community_cards.len()
        );
        Ok(())
    }

    /// Карманные карты всем, кто в раздаче, начиная слева от дилера.
    fn deal_hole_cards(&mut self) -> Result<(), EngineError> {
        for idx in seats_after(self.dealer_index, self.seats.len()) {
            let seat = &mut self.seats[idx as usize];
            if !seat.is_in_hand() {
                continue;
            }
            seat.hole_cards = self.deck.deal_hole()?.to_vec();
            self.history
                .push(HandEventKind::HoleCardsDealt { seat_id: seat.id });
        }
        Ok(())
    }

    fn deal_community(&mut self, round: Round) -> Result<(), EngineError> {
        let cards = self.deck.deal_community(round.community_cards_dealt())?;
        self.community_cards.extend_from_slice(&cards);
        self.history
            .push(HandEventKind::CommunityDealt { round, cards });
        Ok(())
    }

    /// Постинг блайндов (только префлоп). Короткий стек ставит сколько есть.
    fn post_blinds(&mut self) {
        let sb = self.small_blind_index as usize;
        let bb = self.big_blind_index as usize;

        let sb_paid = self.seats[sb].commit(self.config.small_blind);
        let bb_paid = self.seats[bb].commit(self.config.big_blind);
        self.pot += sb_paid + bb_paid;

        self.betting.highest_bet = sb_paid.max(bb_paid);

        self.history.push(HandEventKind::BlindsPosted {
            small_blind: (self.seats[sb].id, sb_paid),
            big_blind: (self.seats[bb].id, bb_paid),
        });
    }

    /// Применить действие текущего игрока. При ошибке стол не меняется.
    ///
    /// Ход не передаётся: после успешного действия драйвер вызывает `advance_actor`.
    pub fn apply_action(&mut self, seat_id: SeatId, action: PlayerActionKind) -> Result<(), EngineError> {
        let round = self.current_round.ok_or(EngineError::NoActiveRound)?;

        let idx = self
            .index_of(seat_id)
            .filter(|&idx| Some(idx) == self.current_actor)
            .ok_or(EngineError::NotCurrentActor(seat_id))?;

        let plan = validate_action(&self.seats[idx as usize], &action, &self.betting)?;

        let seat = &mut self.seats[idx as usize];
        match plan {
            ActionPlan::Fold => seat.is_folded = true,
            ActionPlan::Check => {}
            ActionPlan::Call { amount } => {
                self.pot += seat.commit(amount);
            }
            ActionPlan::RaiseTo { target } => {
                let delta = target - seat.bet;
                self.pot += seat.commit(delta);
                if self.betting.on_raise(target) {
                    // Полный рейз: все остальные должны ответить заново.
                    for (i, other) in self.seats.iter_mut().enumerate() {
                        if i != idx as usize {
                            other.has_acted = false;
                        }
                    }
                }
            }
        }

        let seat = &mut self.seats[idx as usize];
        seat.has_acted = true;
        let (bet_after, stack_after) = (seat.bet, seat.stack);

        self.history.push(HandEventKind::PlayerActed {
            seat_id,
            round,
            action,
            bet_after,
            stack_after,
            pot_after: self.pot,
        });
        debug!(
            "{round}: seat {seat_id} {action} -> bet={bet_after} stack={stack_after} highest={}",
            self.betting.highest_bet
        );
        Ok(())
    }

    /// Действие из внешней пары (имя, сумма): "FOLD", "CALL", "RAISE" + 300 и т.п.
    pub fn apply_named_action(
        &mut self,
        seat_id: SeatId,
        name: &str,
        amount: Option<Chips>,
    ) -> Result<(), EngineError> {
        let action = PlayerActionKind::parse(name, amount)?;
        self.apply_action(seat_id, action)
    }

    /// Передать ход следующему, кто ещё может действовать.
    /// `None` – таких мест нет.
    pub fn advance_actor(&mut self) -> Option<SeatIndex> {
        let start = self.current_actor.unwrap_or(self.dealer_index);
        self.current_actor = next_eligible_seat(&self.seats, start, false);
        self.current_actor
    }

    /// Завершён ли текущий раунд ставок.
    pub fn is_round_complete(&self) -> bool {
        if self.current_round.is_none() {
            return false;
        }
        if self.in_hand_count() <= 1 {
            return true;
        }

        let highest = self.betting.highest_bet;
        let mut eligible = self.seats.iter().filter(|s| s.is_eligible()).peekable();
        let Some(first) = eligible.next() else {
            // Все оставшиеся в олл-ине.
            return true;
        };
        if eligible.peek().is_none() {
            // Один, кто может ходить, и отвечать ему некому.
            return first.bet >= highest;
        }

        self.seats
            .iter()
            .filter(|s| s.is_eligible())
            .all(|s| s.has_acted && s.bet == highest)
    }

    /// Раздача решена: остался один игрок или закончен ривер.
    pub fn is_hand_over(&self) -> bool {
        self.in_hand_count() <= 1
            || (self.current_round == Some(Round::River) && self.is_round_complete())
    }

    /// Id места, которое должно ходить. Если на `current_actor` стоит
    /// уже неспособное ходить место, ищем следующее по кругу.
    pub fn current_actor_id(&self) -> Option<SeatId> {
        let start = self.current_actor?;
        next_eligible_seat(&self.seats, start, true).map(|idx| self.seats[idx as usize].id)
    }

    /// Неизменяемая копия стола для внешних потребителей.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self)
    }

    pub fn legal_actions(&self, seat_id: SeatId) -> Option<LegalActions> {
        self.current_round?;
        let idx = self.index_of(seat_id)?;
        legal_actions(&self.seats[idx as usize], &self.betting)
    }

    fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_in_hand()).count()
    }

    fn index_of(&self, seat_id: SeatId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|s| s.id == seat_id)
            .map(|i| i as SeatIndex)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn seat(&self, seat_id: SeatId) -> Option<&Seat> {
        self.index_of(seat_id).map(|idx| &self.seats[idx as usize])
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }

    pub fn current_round(&self) -> Option<Round> {
        self.current_round
    }

    pub fn current_actor_index(&self) -> Option<SeatIndex> {
        self.current_actor
    }

    pub fn betting(&self) -> &BettingState {
        &self.betting
    }

    pub fn highest_bet(&self) -> Chips {
        self.betting.highest_bet
    }

    pub fn min_raise(&self) -> Chips {
        self.betting.min_raise
    }

    pub fn dealer_index(&self) -> SeatIndex {
        self.dealer_index
    }

    pub fn small_blind_index(&self) -> SeatIndex {
        self.small_blind_index
    }

    pub fn big_blind_index(&self) -> SeatIndex {
        self.big_blind_index
    }

    pub fn hand_history(&self) -> &HandHistory {
        &self.history
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
}
