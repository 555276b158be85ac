//! Restaurant Model

use serde::{Deserialize, Serialize};

/// Restaurant entity shown in the browse list and detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub address: String,
    pub phone: String,
    pub description: Option<String>,
    /// Opening time (HH:mm)
    pub open_time: String,
    /// Closing time (HH:mm), exclusive end of the last seating
    pub close_time: String,
    pub deposit: DepositPolicy,
    pub image_url: Option<String>,
}

/// How a restaurant charges a deposit when a booking is created
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositPolicy {
    /// No deposit
    #[default]
    None,
    /// Fixed amount per guest
    PerPerson { amount: f64 },
    /// Percentage (0-100) of the pre-ordered menu subtotal
    Rate { percent: f64 },
}
