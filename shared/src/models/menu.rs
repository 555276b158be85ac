//! Menu Model

use serde::{Deserialize, Serialize};

/// Menu item offered by a restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub is_signature: bool,
}

/// Pre-ordered menu line attached to a booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSelection {
    pub menu_item_id: String,
    pub quantity: u32,
}
