// src/bin/holdem_dev_cli.rs

use holdem_table::api::TableSnapshot;
use holdem_table::domain::{Chips, Round, TableConfig};
use holdem_table::engine::{HandDriver, PlayerAction, PlayerActionKind, TableEngine};
use holdem_table::infra::{DeterministicRng, PassiveBot, ScriptedBot, SystemRng};

fn main() {
    env_logger::init();

    // Необязательный аргумент: seed для воспроизводимой колоды.
    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());

    let config = TableConfig::new(8, Chips::new(50), Chips::new(100), Chips::new(2_000));
    let mut engine = match TableEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[CLI] Некорректный конфиг: {e}");
            std::process::exit(1);
        }
    };

    println!("holdem_dev_cli: 8 мест, блайнды 50/100, стек 2000");

    // 1. Ручной прогон префлопа через низкоуровневое API.
    println!();
    println!("================ MANUAL PREFLOP =================");
    match seed {
        Some(s) => engine.reset(&mut DeterministicRng::from_seed(s)),
        None => engine.reset(&mut SystemRng),
    }
    if let Err(e) = manual_preflop(&mut engine) {
        eprintln!("[CLI] Ошибка движка: {e}");
    }

    // 2. Полная раздача драйвером: место 4 рейзит, остальные пассивны.
    println!();
    println!("================ DRIVEN HAND =================");
    let driver = HandDriver::default();
    let mut bot = ScriptedBot::new([PlayerAction {
        seat_id: 4,
        kind: PlayerActionKind::Raise(Chips::new(300)),
    }]);
    let outcome = match seed {
        Some(s) => driver.play_hand(&mut engine, &mut DeterministicRng::from_seed(s), &mut bot),
        None => driver.play_hand(&mut engine, &mut SystemRng, &mut bot),
    };
    match outcome {
        Ok(outcome) => {
            print_snapshot(&outcome.snapshot);
            println!(
                "[CLI] Раздача закончена на {:?}, в игре: {:?}, действий: {}",
                outcome.last_round, outcome.contenders, outcome.actions_applied
            );
        }
        Err(e) => eprintln!("[CLI] Ошибка раздачи: {e}"),
    }

    // 3. Ещё одна раздача полностью пассивными ботами, снапшот в JSON.
    println!();
    println!("================ PASSIVE HAND (JSON) =================");
    match driver.play_hand(&mut engine, &mut SystemRng, &mut PassiveBot) {
        Ok(outcome) => match outcome.snapshot.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("[CLI] Не удалось сериализовать снапшот: {e}"),
        },
        Err(e) => eprintln!("[CLI] Ошибка раздачи: {e}"),
    }
}

/// Префлоп вручную: все коллируют, BB чекает.
fn manual_preflop(engine: &mut TableEngine) -> Result<(), holdem_table::EngineError> {
    engine.start_round(Round::Preflop)?;
    print_snapshot(&engine.snapshot());

    while !engine.is_round_complete() {
        let Some(seat_id) = engine.current_actor_id() else {
            break;
        };
        engine.apply_named_action(seat_id, "CALL", None)?;
        println!("[CLI] seat {seat_id}: CALL");
        engine.advance_actor();
    }

    println!("[CLI] Префлоп завершён, банк = {}", engine.pot());
    Ok(())
}

fn print_snapshot(snapshot: &TableSnapshot) {
    println!(
        "[STATE] round={:?} pot={} highest_bet={} min_raise={} actor={:?}",
        snapshot.round, snapshot.pot, snapshot.highest_bet, snapshot.min_raise, snapshot.current_actor_id
    );
    let board: Vec<String> = snapshot.community_cards.iter().map(|c| c.to_string()).collect();
    println!("[STATE] board: [{}]", board.join(" "));
    for seat in &snapshot.seats {
        let cards: Vec<String> = seat.hole_cards.iter().map(|c| c.to_string()).collect();
        println!(
            "  seat #{:<2} id={:<2} stack={:<6} bet={:<5} invested={:<5} folded={} all_in={} cards=[{}]",
            seat.seat_index,
            seat.id,
            seat.stack.0,
            seat.bet.0,
            seat.total_invested.0,
            seat.is_folded,
            seat.is_all_in,
            cards.join(" ")
        );
    }
}
