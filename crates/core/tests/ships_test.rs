mod common;

use navarch_core::ships::{NewShip, ShipRepository};

fn ship(name: &str, built: i32, stricken: Option<i32>, country: Option<&str>) -> NewShip {
    NewShip {
        name: name.to_string(),
        year_built: built,
        commissioned_date: Some(built + 1),
        stricken_date: stricken,
        country_of_origin: country.map(str::to_string),
    }
}

#[test]
fn create_and_fetch_roundtrip() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());

    let created = ships
        .create(ship("USS Nautilus", 1952, None, Some("USA")))
        .unwrap();
    assert!(created.id > 0);

    let fetched = ships.get_by_id(created.id).unwrap();
    assert_eq!(fetched, created);

    assert!(ships.get_by_id(created.id + 1).is_err());
}

#[test]
fn batch_insert_is_atomic() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());

    let created = ships
        .create_batch(vec![
            ship("HMS Dreadnought", 1906, Some(1921), Some("UK")),
            ship("HMS Vanguard", 1944, Some(1960), Some("UK")),
        ])
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(ships.count().unwrap(), 2);

    // One invalid row rolls the whole batch back.
    let mut bad = ship("KMS Bismarck", 1939, Some(1941), Some("Germany"));
    bad.commissioned_date = Some(1930);
    let result = ships.create_batch(vec![
        ship("IJN Yamato", 1940, Some(1945), Some("Japan")),
        bad,
    ]);
    assert!(result.is_err());
    assert_eq!(ships.count().unwrap(), 2);
}

#[test]
fn recent_listing_is_newest_first() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());

    for name in ["First", "Second", "Third"] {
        ships.create(ship(name, 1950, None, None)).unwrap();
    }

    let recent = ships.list_recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].name, "Third");
    assert_eq!(recent[1].name, "Second");
}

#[test]
fn statistics_aggregate_the_catalogue() {
    let db = common::setup_db();
    let ships = ShipRepository::new(db.pool.clone());

    assert_eq!(ships.statistics().unwrap().total, 0);

    ships
        .create(ship("USS Iowa", 1940, Some(1990), Some("USA")))
        .unwrap();
    ships
        .create(ship("USS Missouri", 1941, Some(1992), Some("USA")))
        .unwrap();
    ships
        .create(ship("FS Richelieu", 1935, None, Some("France")))
        .unwrap();
    ships.create(ship("Unknown Origin", 1970, None, None)).unwrap();

    let stats = ships.statistics().unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.most_common_country.as_deref(), Some("USA"));
    assert_eq!(stats.most_common_country_count, 2);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.retired, 2);
    assert_eq!(stats.oldest_year, Some(1935));
    assert_eq!(stats.newest_year, Some(1970));
}
