//! Fixture loading for service tests.
//!
//! Replays the known seed state (ids 3 and 4 per entity) against in-memory
//! stores before a scenario runs, external to the services under test.
//! Seeding uses explicit ids, so the store sequence still hands out id 1 to
//! the first record inserted by a scenario.

use chrono::{DateTime, FixedOffset, TimeZone};
use models::{Championship, Country, Pilot, PilotRace, Race, Speedway, Team};
use store::{MemoryStore, RecordStore};

/// Install the tracing subscriber once for test output.
pub fn init() {
    common::logging::init_logging_default();
}

pub fn race_date(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
}

pub async fn seed_countries(store: &MemoryStore<Country>) {
    store.save(Country::new(3, "Brasil")).await;
    store.save(Country::new(4, "Japão")).await;
}

pub async fn seed_teams(store: &MemoryStore<Team>) {
    store.save(Team::new(3, "Ferrari")).await;
    store.save(Team::new(4, "Red Bull")).await;
}

pub async fn seed_pilots(store: &MemoryStore<Pilot>) {
    store.save(Pilot::new(3, "Leonardo", 3, 3)).await;
    store.save(Pilot::new(4, "Clavison", 4, 4)).await;
}

pub async fn seed_speedways(store: &MemoryStore<Speedway>) {
    store.save(Speedway::new(3, "Pista Curta", 10, 3)).await;
    store.save(Speedway::new(4, "Pista Longa", 15, 4)).await;
}

pub async fn seed_championships(store: &MemoryStore<Championship>) {
    store.save(Championship::new(3, "Mundial", 2022)).await;
    store.save(Championship::new(4, "Mundial Vintage", 2023)).await;
}

pub async fn seed_races(store: &MemoryStore<Race>) {
    store.save(Race::new(3, race_date(2022, 7, 18), 3, 3)).await;
    store.save(Race::new(4, race_date(2023, 7, 18), 4, 4)).await;
}

pub async fn seed_pilot_races(store: &MemoryStore<PilotRace>) {
    store.save(PilotRace::new(3, 1, 3, 3)).await;
    store.save(PilotRace::new(4, 2, 4, 4)).await;
}
