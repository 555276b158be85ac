//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table entity
///
/// `id` is only unique within its restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub zone_id: String,
    pub capacity: u32,
    pub is_active: bool,
}

impl DiningTable {
    /// Create an active table
    pub fn new(
        id: impl Into<String>,
        restaurant_id: impl Into<String>,
        zone_id: impl Into<String>,
        capacity: u32,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            restaurant_id: restaurant_id.into(),
            zone_id: zone_id.into(),
            capacity,
            is_active: true,
        }
    }
}

/// Table together with its computed availability for one reservation context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAvailability {
    #[serde(flatten)]
    pub table: DiningTable,
    pub available: bool,
}
