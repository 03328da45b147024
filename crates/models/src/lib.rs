//! Entity records for the Formula-1 registry.
//!
//! Plain value records with surrogate integer ids. Relations are stored as
//! foreign ids resolved through the record store, never as embedded copies
//! of the referenced record.

pub mod championship;
pub mod country;
pub mod pilot;
pub mod pilot_race;
pub mod race;
pub mod speedway;
pub mod team;

pub use championship::Championship;
pub use country::Country;
pub use pilot::Pilot;
pub use pilot_race::PilotRace;
pub use race::Race;
pub use speedway::Speedway;
pub use team::Team;
