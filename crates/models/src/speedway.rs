use serde::{Deserialize, Serialize};
use store::Record;

/// A track with its length and host country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Speedway {
    pub id: i32,
    pub name: String,
    pub size: i32,
    pub country_id: i32,
}

impl Speedway {
    pub fn new(id: i32, name: &str, size: i32, country_id: i32) -> Self {
        Self { id, name: name.to_string(), size, country_id }
    }
}

impl Record for Speedway {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
