use serde::{Deserialize, Serialize};
use store::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Championship {
    pub id: i32,
    pub description: String,
    pub year: i32,
}

impl Championship {
    pub fn new(id: i32, description: &str, year: i32) -> Self {
        Self { id, description: description.to_string(), year }
    }
}

impl Record for Championship {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
