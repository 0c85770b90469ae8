mod common;

use std::sync::Arc;

use navarch_core::generator::{GeneratorConfig, ShipGenerator};
use navarch_core::live::{ConnectionRegistry, LiveEvent};
use navarch_core::ships::ShipRepository;

fn generator_with(db: &common::TestDb, registry: Arc<ConnectionRegistry>) -> ShipGenerator {
    ShipGenerator::new(
        Arc::new(ShipRepository::new(db.pool.clone())),
        registry,
        GeneratorConfig::default(),
    )
}

#[tokio::test]
async fn manual_batch_persists_and_broadcasts_five() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());
    let registry = Arc::new(ConnectionRegistry::new());
    let generator = generator_with(&db, registry.clone());

    let (_first_id, mut first_rx) = registry.register().await;
    let (_second_id, mut second_rx) = registry.register().await;

    // The manual trigger must fire even while auto-generation is off.
    generator.disable_auto_generation();
    let created = generator.generate_batch().await.expect("Batch failed");

    assert_eq!(created.len(), 5);
    assert_eq!(ships.count().unwrap(), 5);

    for rx in [&mut first_rx, &mut second_rx] {
        for _ in 0..5 {
            match rx.recv().await.expect("Missing broadcast") {
                LiveEvent::NewShip { data } => {
                    assert_eq!(data.source, "system");
                    assert!(data.id > 0);
                }
                other => panic!("Unexpected event: {:?}", other),
            }
        }
    }
}

#[tokio::test]
async fn cycle_is_skipped_while_disabled_and_resumes_when_enabled() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());
    let registry = Arc::new(ConnectionRegistry::new());
    let generator = generator_with(&db, registry.clone());

    generator.disable_auto_generation();
    assert!(!generator.auto_generation_enabled());
    assert!(generator.run_cycle().await.expect("Cycle failed").is_none());
    assert_eq!(ships.count().unwrap(), 0);

    generator.set_auto_generation(true).await;
    let created = generator.run_cycle().await.expect("Cycle failed");
    assert!(created.is_some());
    assert_eq!(ships.count().unwrap(), 1);
}

#[tokio::test]
async fn toggling_notifies_connected_clients() {
    let db = common::setup_db();
    let registry = Arc::new(ConnectionRegistry::new());
    let generator = generator_with(&db, registry.clone());

    let (_id, mut rx) = registry.register().await;

    generator.set_auto_generation(false).await;
    match rx.recv().await.expect("Missing broadcast") {
        LiveEvent::AutoGeneration { enabled } => assert!(!enabled),
        other => panic!("Unexpected event: {:?}", other),
    }

    generator.set_auto_generation(true).await;
    match rx.recv().await.expect("Missing broadcast") {
        LiveEvent::AutoGeneration { enabled } => assert!(enabled),
        other => panic!("Unexpected event: {:?}", other),
    }
}

#[tokio::test]
async fn generated_ships_pass_catalogue_validation() {
    let db = common::setup_db();
    let registry = Arc::new(ConnectionRegistry::new());
    let generator = generator_with(&db, registry);

    let created = generator.generate_now(10).await.expect("Batch failed");
    assert_eq!(created.len(), 10);
    for ship in created {
        let commissioned = ship.commissioned_date.expect("always commissioned");
        assert!(commissioned >= ship.year_built);
        if let Some(stricken) = ship.stricken_date {
            assert!(stricken >= commissioned + 5);
        }
        assert!(ship.country_of_origin.is_some());
    }
}

#[tokio::test]
async fn start_and_stop_are_idempotent() {
    let db = common::setup_db();
    let registry = Arc::new(ConnectionRegistry::new());
    let generator = generator_with(&db, registry);

    assert!(!generator.is_running().await);
    generator.start().await;
    generator.start().await;
    assert!(generator.is_running().await);

    generator.stop().await;
    assert!(!generator.is_running().await);
    generator.stop().await;
}
