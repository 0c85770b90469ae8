use rand::Rng;

use crate::ships::NewShip;

/// Countries of origin, each with its navy prefix at the same index.
const COUNTRIES: [&str; 15] = [
    "USA",
    "UK",
    "France",
    "Germany",
    "Japan",
    "Italy",
    "Spain",
    "Australia",
    "Canada",
    "Russia",
    "China",
    "Brazil",
    "India",
    "South Korea",
    "South Africa",
];

const PREFIXES: [&str; 15] = [
    "USS", "HMS", "FS", "KMS", "IJN", "RN", "SNS", "HMAS", "HMCS", "RFS", "CNS", "BNS", "INS",
    "ROKS", "SAS",
];

const SHIP_TYPES: [&str; 5] = ["Battleship", "Cruiser", "Destroyer", "Submarine", "Carrier"];

const YEAR_BUILT_MIN: i32 = 1850;
const YEAR_BUILT_MAX: i32 = 2023;
const COMMISSION_MAX_DELAY: i32 = 3;
const SERVICE_SPAN_MIN: i32 = 5;
const SERVICE_SPAN_MAX: i32 = 50;
const RETIRED_PROBABILITY: f64 = 0.7;

/// Synthesizes one ship with randomized but internally consistent fields:
/// the commissioning never precedes the launch, and a stricken ship served
/// at least the minimum span after commissioning. Roughly a third of the
/// fleet is still in service.
pub fn random_ship() -> NewShip {
    let mut rng = rand::thread_rng();

    let country_idx = rng.gen_range(0..COUNTRIES.len());
    let ship_type = SHIP_TYPES[rng.gen_range(0..SHIP_TYPES.len())];
    let year_built = rng.gen_range(YEAR_BUILT_MIN..=YEAR_BUILT_MAX);
    let commissioned = year_built + rng.gen_range(0..=COMMISSION_MAX_DELAY);
    let stricken = if rng.gen_bool(RETIRED_PROBABILITY) {
        Some(commissioned + rng.gen_range(SERVICE_SPAN_MIN..=SERVICE_SPAN_MAX))
    } else {
        None
    };

    NewShip {
        name: format!(
            "{} {}-{:06}",
            PREFIXES[country_idx],
            ship_type,
            rng.gen_range(0..1_000_000)
        ),
        year_built,
        commissioned_date: Some(commissioned),
        stricken_date: stricken,
        country_of_origin: Some(COUNTRIES[country_idx].to_string()),
    }
}
