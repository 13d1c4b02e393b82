//! End-to-end runtime scenarios driven through the handle with scripted dice.

use game_core::{
    Archetype, AttackOutcome, BattleEvent, BattleOutcome, Direction, GameConfig, GameMode,
    PlayerAction, Position, ScriptedRng, TickOutcome,
};
use runtime::{Event, Runtime, RuntimeConfig, RuntimeError, SessionEvent, Topic};
use tokio::sync::broadcast::Receiver;

fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn explore_encounter_and_win() {
    // encounter draw, enemy pick (2 -> jaskirat), then every roll is 50
    let runtime = Runtime::builder()
        .hero(Archetype::Swordsman)
        .rng(ScriptedRng::new([1, 2, 50, 50, 50, 50, 50, 50]))
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();
    let mut session_rx = handle.subscribe(Topic::Session);
    let mut battle_rx = handle.subscribe(Topic::Battle);

    // Standing still never draws
    assert_eq!(
        handle.tick().await.unwrap(),
        TickOutcome::Explored { moved: false }
    );

    assert!(handle.move_input(Direction::Right, true).await.unwrap());
    assert_eq!(
        handle.tick().await.unwrap(),
        TickOutcome::EncounterStarted {
            enemy: Archetype::Jaskirat
        }
    );

    let session = handle.query_session().await.unwrap();
    assert_eq!(session.mode(), GameMode::InBattle);
    assert_eq!(session.position(), Position::new(16, 100));
    assert!(!session.velocity().is_moving());
    assert_eq!(
        drain(&mut session_rx),
        vec![Event::Session(SessionEvent::EncounterStarted {
            enemy: Archetype::Jaskirat,
            frame: 2,
            encounter: 1,
        })]
    );

    // Movement is ignored mid-battle
    assert!(!handle.move_input(Direction::Up, true).await.unwrap());

    let first = handle
        .player_action(PlayerAction::PrimaryAttack)
        .await
        .unwrap()
        .expect("attack should be accepted");
    assert_eq!(first.outcome(), None);
    let strikes: Vec<_> = first.attacks().collect();
    assert_eq!(strikes.len(), 2);
    assert_eq!(strikes[0].damage, 5);
    assert_eq!(strikes[1].outcome, AttackOutcome::Critical);
    assert_eq!(strikes[1].defender_health, 19);

    let second = handle
        .player_action(PlayerAction::PrimaryAttack)
        .await
        .unwrap()
        .expect("attack should be accepted");
    assert_eq!(second.outcome(), Some(BattleOutcome::Won));

    let battle_events = drain(&mut battle_rx);
    assert_eq!(battle_events.len(), 4);
    assert_eq!(
        battle_events.last(),
        Some(&Event::Battle(BattleEvent::Concluded {
            outcome: BattleOutcome::Won,
            winner: Some(Archetype::Swordsman),
        }))
    );
    assert_eq!(
        drain(&mut session_rx),
        vec![Event::Session(SessionEvent::BattleEnded {
            outcome: BattleOutcome::Won,
            winner: Some(Archetype::Swordsman),
        })]
    );

    let session = handle.query_session().await.unwrap();
    assert_eq!(session.mode(), GameMode::Exploring);
    assert_eq!(session.hero().current_health(), 19);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn invalid_actions_are_ignored() {
    let runtime = Runtime::builder()
        .hero(Archetype::Archer)
        .rng(ScriptedRng::new([1, 0, 50]))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut battle_rx = handle.subscribe(Topic::Battle);

    // No battle yet
    assert!(
        handle
            .player_action(PlayerAction::Defend)
            .await
            .unwrap()
            .is_none()
    );
    assert!(drain(&mut battle_rx).is_empty());

    let before = handle.query_session().await.unwrap();
    assert_eq!(before.mode(), GameMode::Exploring);
    assert_eq!(before.hero().current_health(), 16);
}

#[tokio::test]
async fn losing_publishes_game_over_and_halts() {
    let config = RuntimeConfig {
        game_config: GameConfig::with_enemy_roster(vec![Archetype::Ghost]),
        ..Default::default()
    };
    // Odd draws roll 1 (ghost misses, then crits), even draws roll 50
    let runtime = Runtime::builder()
        .config(config)
        .hero(Archetype::Archer)
        .rng(ScriptedRng::new([1, 50]))
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut session_rx = handle.subscribe(Topic::Session);

    handle.move_input(Direction::Down, true).await.unwrap();
    assert_eq!(
        handle.tick().await.unwrap(),
        TickOutcome::EncounterStarted {
            enemy: Archetype::Ghost
        }
    );

    let mut outcome = None;
    for _ in 0..10 {
        match handle.player_action(PlayerAction::Defend).await.unwrap() {
            Some(report) => {
                outcome = report.outcome();
                if outcome.is_some() {
                    break;
                }
            }
            None => break,
        }
    }
    assert_eq!(outcome, Some(BattleOutcome::Lost));

    let session_events = drain(&mut session_rx);
    assert!(matches!(
        session_events.last(),
        Some(Event::Session(SessionEvent::GameOver { .. }))
    ));
    assert!(session_events.contains(&Event::Session(SessionEvent::BattleEnded {
        outcome: BattleOutcome::Lost,
        winner: Some(Archetype::Ghost),
    })));

    assert_eq!(handle.tick().await.unwrap(), TickOutcome::Halted);
    assert!(!handle.move_input(Direction::Left, true).await.unwrap());
    assert!(
        handle
            .player_action(PlayerAction::Flee)
            .await
            .unwrap()
            .is_none()
    );
    assert!(handle.query_session().await.unwrap().is_over());
}

#[tokio::test]
async fn seeded_runs_are_replayable() {
    async fn walk(seed: u64) -> Vec<TickOutcome> {
        let runtime = Runtime::builder()
            .hero(Archetype::Swordsman)
            .seed(seed)
            .build()
            .await
            .unwrap();
        let handle = runtime.handle();
        handle.move_input(Direction::Right, true).await.unwrap();

        let mut outcomes = Vec::new();
        for _ in 0..500 {
            outcomes.push(handle.tick().await.unwrap());
        }
        outcomes
    }

    assert_eq!(walk(7).await, walk(7).await);
}

#[tokio::test]
async fn building_requires_a_hero() {
    let missing = Runtime::builder().build().await;
    assert!(matches!(missing, Err(RuntimeError::MissingHero)));

    let enemy = Runtime::builder().hero(Archetype::Slime).build().await;
    assert!(matches!(enemy, Err(RuntimeError::Configuration(_))));
}

#[test]
fn events_serialize_for_external_consumers() {
    let event = Event::Session(SessionEvent::EncounterStarted {
        enemy: Archetype::Ghost,
        frame: 12,
        encounter: 3,
    });
    let json = serde_json::to_string(&event).unwrap();
    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
