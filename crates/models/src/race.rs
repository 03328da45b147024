use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use store::Record;

/// A race held on a speedway within a championship.
///
/// The date's year must equal the referenced championship's year; the
/// service enforces this before every write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub id: i32,
    pub date: DateTime<FixedOffset>,
    pub speedway_id: i32,
    pub championship_id: i32,
}

impl Race {
    pub fn new(id: i32, date: DateTime<FixedOffset>, speedway_id: i32, championship_id: i32) -> Self {
        Self { id, date, speedway_id, championship_id }
    }
}

impl Record for Race {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
