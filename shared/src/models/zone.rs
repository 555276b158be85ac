//! Zone Model

use serde::{Deserialize, Serialize};

/// Zone entity (hall, terrace, private room, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}
