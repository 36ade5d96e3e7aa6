// tests/engine_snapshot_tests.rs

//! Снапшот стола и конфиг:
//! - снапшот – независимая копия;
//! - JSON для внешнего AI-модуля;
//! - скрытие чужих карманных карт;
//! - загрузка и проверка конфига.

use holdem_table::domain::{Chips, Round, StackPolicy, TableConfig};
use holdem_table::engine::{EngineError, PlayerActionKind, RandomSource, TableEngine};

#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

fn preflop_engine() -> TableEngine {
    let config = TableConfig::new(4, Chips(50), Chips(100), Chips(1_000));
    let mut engine = TableEngine::new(config).expect("valid config");
    engine.reset(&mut DummyRng);
    engine.start_round(Round::Preflop).unwrap();
    engine
}

#[test]
fn snapshot_reflects_table_state() {
    let engine = preflop_engine();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.round, Some(Round::Preflop));
    assert_eq!(snapshot.pot, Chips(150));
    assert_eq!(snapshot.highest_bet, Chips(100));
    assert_eq!(snapshot.min_raise, Chips(100));
    assert_eq!(snapshot.current_actor_id, Some(4));
    assert_eq!(snapshot.dealer_index, 0);
    assert_eq!(snapshot.small_blind_index, 1);
    assert_eq!(snapshot.big_blind_index, 2);
    assert_eq!(snapshot.seats.len(), 4);
    assert_eq!(snapshot.to_call(4), Chips(100));
    assert_eq!(snapshot.to_call(2), Chips(50));
    assert_eq!(snapshot.to_call(3), Chips::ZERO);
}

#[test]
fn snapshot_is_independent_copy() {
    let mut engine = preflop_engine();
    let mut snapshot = engine.snapshot();

    // Меняем копию – стол не меняется.
    snapshot.seats[0].stack = Chips(1);
    snapshot.pot = Chips(999_999);
    snapshot.community_cards.clear();
    assert_eq!(engine.seat(1).unwrap().stack, Chips(1_000));
    assert_eq!(engine.pot(), Chips(150));

    // Меняем стол – старая копия не меняется.
    let before = engine.snapshot();
    engine.apply_action(4, PlayerActionKind::Call).unwrap();
    assert_eq!(before.seat(4).unwrap().bet, Chips::ZERO);
    assert_eq!(before.pot, Chips(150));
    assert_eq!(engine.snapshot().pot, Chips(250));
}

#[test]
fn snapshot_json_uses_uppercase_round_names() {
    let engine = preflop_engine();
    let json = engine.snapshot().to_json().unwrap();

    assert!(json.contains("\"round\":\"PREFLOP\""), "json: {json}");
    assert!(json.contains("\"current_actor_id\":4"), "json: {json}");
}

#[test]
fn redacted_snapshot_hides_other_hole_cards() {
    let engine = preflop_engine();
    let view = engine.snapshot().redacted_for(2);

    assert_eq!(view.seat(2).unwrap().hole_cards.len(), 2);
    for seat in view.seats.iter().filter(|s| s.id != 2) {
        assert!(seat.hole_cards.is_empty(), "seat {} видит чужие карты", seat.id);
    }
    // Остальное не трогаем.
    assert_eq!(view.pot, engine.pot());
}

#[test]
fn action_serializes_with_amount() {
    let json = serde_json::to_string(&PlayerActionKind::Raise(Chips(300))).unwrap();
    assert_eq!(json, r#"{"action":"RAISE","amount":300}"#);

    let parsed: PlayerActionKind = serde_json::from_str(r#"{"action":"CALL"}"#).unwrap();
    assert_eq!(parsed, PlayerActionKind::Call);
}

//
// Конфиг
//

#[test]
fn config_loads_from_json_with_defaults() {
    let config = TableConfig::from_json(
        r#"{ "small_blind": 25, "big_blind": 50, "starting_stack": 5000 }"#,
    )
    .unwrap();

    assert_eq!(config.max_seats, 8);
    assert_eq!(config.small_blind, Chips(25));
    assert_eq!(config.big_blind, Chips(50));
    assert_eq!(config.dealer_index, 0);
    assert_eq!(config.stack_policy, StackPolicy::ResetToStarting);

    let config = TableConfig::from_json(
        r#"{ "max_seats": 6, "small_blind": 1, "big_blind": 2, "starting_stack": 200,
             "dealer_index": 5, "stack_policy": "carry_forward" }"#,
    )
    .unwrap();
    assert_eq!(config.max_seats, 6);
    assert_eq!(config.dealer_index, 5);
    assert_eq!(config.stack_policy, StackPolicy::CarryForward);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        TableConfig::new(1, Chips(50), Chips(100), Chips(1_000)),
        TableConfig::new(9, Chips(50), Chips(100), Chips(1_000)),
        TableConfig::new(6, Chips(0), Chips(100), Chips(1_000)),
        TableConfig::new(6, Chips(100), Chips(50), Chips(1_000)),
        TableConfig::new(6, Chips(50), Chips(100), Chips(1_000)).with_dealer(6),
    ];
    for config in bad {
        assert!(
            matches!(TableEngine::new(config.clone()), Err(EngineError::InvalidConfig(_))),
            "конфиг должен быть отклонён: {config:?}"
        );
    }

    assert!(matches!(
        TableConfig::from_json("{ \"small_blind\": 50 }"),
        Err(EngineError::InvalidConfig(_))
    ));
}

#[test]
fn seat_ids_must_be_unique_and_match_seat_count() {
    let config = TableConfig::new(3, Chips(50), Chips(100), Chips(1_000));

    assert!(matches!(
        TableEngine::with_seat_ids(config.clone(), vec![10, 20, 10]),
        Err(EngineError::InvalidConfig(_))
    ));
    assert!(matches!(
        TableEngine::with_seat_ids(config.clone(), vec![10, 20]),
        Err(EngineError::InvalidConfig(_))
    ));

    let engine = TableEngine::with_seat_ids(config, vec![10, 20, 30]).unwrap();
    let ids: Vec<u64> = engine.seats().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn set_stack_is_only_allowed_between_hands() {
    let config = TableConfig::new(3, Chips(50), Chips(100), Chips(1_000));
    let mut engine = TableEngine::new(config).unwrap();
    engine.reset(&mut DummyRng);

    assert_eq!(engine.set_stack(42, Chips(10)), Err(EngineError::UnknownSeat(42)));
    // Место 0 (id 1) – дилер, не блайнд: может сидеть без фишек.
    engine.set_stack(1, Chips(0)).unwrap();
    assert!(engine.seat(1).unwrap().is_folded);

    engine.start_round(Round::Preflop).unwrap();
    assert_eq!(engine.set_stack(1, Chips(10)), Err(EngineError::HandInProgress));
}

#[test]
fn set_stack_cannot_revive_seat_after_uncontested_hand() {
    let config = TableConfig::new(3, Chips(50), Chips(100), Chips(1_000));
    let mut engine = TableEngine::new(config).unwrap();
    engine.reset(&mut DummyRng);
    engine.start_round(Round::Preflop).unwrap();

    // id 1 и id 2 фолдят – раздача закончена без борьбы.
    engine.apply_action(1, PlayerActionKind::Fold).unwrap();
    engine.advance_actor();
    engine.apply_action(2, PlayerActionKind::Fold).unwrap();
    engine.advance_actor();
    assert!(engine.is_hand_over());

    let before = engine.snapshot();
    assert_eq!(engine.set_stack(1, Chips(500)), Err(EngineError::HandInProgress));
    assert_eq!(engine.snapshot(), before);
    assert!(engine.seat(1).unwrap().is_folded);
    assert!(engine.is_hand_over());

    // После reset стек снова можно менять.
    engine.reset(&mut DummyRng);
    engine.set_stack(1, Chips(500)).unwrap();
    assert_eq!(engine.seat(1).unwrap().stack, Chips(500));
    assert!(!engine.seat(1).unwrap().is_folded);
}

#[test]
fn set_dealer_takes_effect_on_next_reset() {
    let config = TableConfig::new(5, Chips(50), Chips(100), Chips(1_000));
    let mut engine = TableEngine::new(config).unwrap();

    assert!(matches!(engine.set_dealer(5), Err(EngineError::InvalidConfig(_))));
    engine.set_dealer(3).unwrap();
    assert_eq!(engine.dealer_index(), 0);

    engine.reset(&mut DummyRng);
    assert_eq!(engine.dealer_index(), 3);
    assert_eq!(engine.small_blind_index(), 4);
    assert_eq!(engine.big_blind_index(), 0);
}
