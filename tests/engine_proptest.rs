/// Property-based tests for the betting engine using proptest
///
/// Random tables and random action streams are played through the engine;
/// the chip accounting and turn order invariants must hold after every call.
use holdem_table::api::TableSnapshot;
use holdem_table::domain::{Chips, Round, SeatId, TableConfig};
use holdem_table::engine::{PlayerActionKind, TableEngine};
use holdem_table::infra::DeterministicRng;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

const MAX_STEPS_PER_ROUND: usize = 500;

// Strategy for a raw action: kind selector + amount
fn action_strategy() -> impl Strategy<Value = PlayerActionKind> {
    (0u8..5, 0u64..=4_000).prop_map(|(kind, amount)| match kind {
        0 => PlayerActionKind::Fold,
        1 => PlayerActionKind::Check,
        2 => PlayerActionKind::Call,
        3 => PlayerActionKind::Bet(Chips(amount)),
        _ => PlayerActionKind::Raise(Chips(amount)),
    })
}

// Strategy for a table: stacks per seat (0 = busted seat) and a dealer index
fn table_strategy() -> impl Strategy<Value = (Vec<u64>, u8)> {
    prop::collection::vec(prop_oneof![1 => Just(0u64), 6 => 1u64..=3_000], 2..=8).prop_flat_map(
        |stacks| {
            let n = stacks.len() as u8;
            (Just(stacks), 0..n)
        },
    )
}

fn check_accounting(engine: &TableEngine, initial: &[(SeatId, Chips)]) -> Result<(), TestCaseError> {
    let seats = engine.seats();

    let invested: Chips = seats.iter().map(|s| s.total_invested).sum();
    let bets: Chips = seats.iter().map(|s| s.bet).sum();
    prop_assert_eq!(engine.pot(), invested, "pot must equal total invested");
    prop_assert!(bets <= invested, "bets in round can't exceed total invested");

    for (seat, (id, start)) in seats.iter().zip(initial) {
        prop_assert_eq!(seat.id, *id);
        prop_assert_eq!(seat.stack + seat.total_invested, *start, "chips leaked on seat {}", id);
    }

    let max_bet = seats.iter().map(|s| s.bet).max().unwrap_or(Chips::ZERO);
    prop_assert_eq!(engine.highest_bet(), max_bet, "highest_bet must track the largest bet");

    if let Some(actor) = engine.current_actor_id() {
        let seat = engine.seat(actor).unwrap();
        prop_assert!(!seat.is_folded && !seat.is_all_in, "seat {} can't act", actor);
    }
    Ok(())
}

fn check_folded_frozen(before: &TableSnapshot, after: &TableSnapshot) -> Result<(), TestCaseError> {
    for (old, new) in before.seats.iter().zip(&after.seats) {
        if old.is_folded {
            prop_assert!(new.is_folded);
            prop_assert_eq!(old.bet, new.bet, "folded seat {} changed its bet", old.id);
            prop_assert_eq!(old.stack, new.stack);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn random_hands_keep_chip_accounting(
        (stacks, dealer) in table_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..120),
        seed in any::<u64>(),
    ) {
        let config = TableConfig::new(stacks.len() as u8, Chips(50), Chips(100), Chips(1_000))
            .with_dealer(dealer);
        let mut engine = TableEngine::new(config).unwrap();
        engine.reset(&mut DeterministicRng::from_seed(seed));
        for (i, stack) in stacks.iter().enumerate() {
            engine.set_stack(i as SeatId + 1, Chips(*stack)).unwrap();
        }

        let funded = stacks.iter().filter(|s| **s > 0).count();
        prop_assume!(funded >= 2);
        // Места блайндов должны быть в игре, иначе префлоп не стартует.
        let n = stacks.len();
        prop_assume!(stacks[(dealer as usize + 1) % n] > 0 && stacks[(dealer as usize + 2) % n] > 0);

        let initial: Vec<(SeatId, Chips)> = engine.seats().iter().map(|s| (s.id, s.stack)).collect();
        let mut stream = actions.into_iter();

        for round in Round::ALL {
            engine.start_round(round).unwrap();
            check_accounting(&engine, &initial)?;

            let mut steps = 0;
            while !engine.is_round_complete() {
                steps += 1;
                prop_assert!(steps < MAX_STEPS_PER_ROUND, "round {} never completes", round);

                let Some(actor) = engine.current_actor_id() else {
                    break;
                };
                let before = engine.snapshot();
                let action = stream.next().unwrap_or(PlayerActionKind::Call);

                if engine.apply_action(actor, action).is_err() {
                    // Отклонённое действие ничего не меняет.
                    prop_assert_eq!(&engine.snapshot(), &before);
                    engine.apply_action(actor, PlayerActionKind::Call).unwrap();
                }
                engine.advance_actor();

                check_accounting(&engine, &initial)?;
                check_folded_frozen(&before, &engine.snapshot())?;
            }

            if engine.is_hand_over() {
                break;
            }
        }

        prop_assert!(engine.is_hand_over());
    }

    #[test]
    fn raise_never_lowers_highest_bet(
        stack in 1u64..=500,
        target in 0u64..=1_000,
    ) {
        let config = TableConfig::new(4, Chips(50), Chips(100), Chips(1_000));
        let mut engine = TableEngine::new(config).unwrap();
        engine.reset(&mut DeterministicRng::from_seed(1));
        // Первым на префлопе ходит id 4.
        engine.set_stack(4, Chips(stack)).unwrap();
        engine.start_round(Round::Preflop).unwrap();

        let before = engine.highest_bet();
        let _ = engine.apply_action(4, PlayerActionKind::Raise(Chips(target)));

        prop_assert!(engine.highest_bet() >= before);
        prop_assert!(engine.seat(4).unwrap().bet <= Chips(stack));
    }
}
