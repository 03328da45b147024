use serde::{Deserialize, Serialize};
use store::Record;

/// Join record linking a pilot to a race with a finishing placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilotRace {
    pub id: i32,
    pub placement: i32,
    pub pilot_id: i32,
    pub race_id: i32,
}

impl PilotRace {
    pub fn new(id: i32, placement: i32, pilot_id: i32, race_id: i32) -> Self {
        Self { id, placement, pilot_id, race_id }
    }
}

impl Record for PilotRace {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
