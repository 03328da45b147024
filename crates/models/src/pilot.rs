use serde::{Deserialize, Serialize};
use store::Record;

/// A pilot referencing a country and a team by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pilot {
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub team_id: i32,
}

impl Pilot {
    pub fn new(id: i32, name: &str, country_id: i32, team_id: i32) -> Self {
        Self { id, name: name.to_string(), country_id, team_id }
    }
}

impl Record for Pilot {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
