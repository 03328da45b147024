use serde::{Deserialize, Serialize};
use store::Record;

/// A racing team. Names are unique across teams (enforced by the service).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub name: String,
}

impl Team {
    pub fn new(id: i32, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

impl Record for Team {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
