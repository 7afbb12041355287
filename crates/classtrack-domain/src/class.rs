//! Class type definitions

use serde::{Deserialize, Serialize};

/// A class type offered on the schedule (e.g., "Yoga", "Pilates").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl ClassDefinition {
    pub fn new(name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            description: None,
        }
    }
}
