//! Validated CRUD + lookup services over the record stores.
//! - Validation and the two-kind error taxonomy live here.
//! - Persistence, ordering, and concurrency belong to the `store` crate.
//! - Each service is a thin validator-plus-delegator; every derived lookup
//!   composes the generic `Query` capability instead of ad-hoc filtering.
//!
//! Lookup discipline varies per entity, matching the stakeholder-facing
//! contract: most services are strict (empty result is an `ObjectNotFound`),
//! while `ChampionshipService` and parts of `CountryService` are tolerant
//! (absent is expressed as `Option::None` or an empty `Vec`).

pub mod championship_service;
pub mod country_service;
pub mod errors;
pub mod pilot_race_service;
pub mod pilot_service;
pub mod race_service;
pub mod speedway_service;
pub mod team_service;
#[cfg(test)]
pub mod test_support;

pub use championship_service::ChampionshipService;
pub use country_service::CountryService;
pub use errors::ServiceError;
pub use pilot_race_service::PilotRaceService;
pub use pilot_service::PilotService;
pub use race_service::RaceService;
pub use speedway_service::SpeedwayService;
pub use team_service::TeamService;
