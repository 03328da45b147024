use serde::{Deserialize, Serialize};
use store::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

impl Country {
    pub fn new(id: i32, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

impl Record for Country {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
