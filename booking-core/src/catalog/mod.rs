//! Restaurant catalog
//!
//! [`CatalogProvider`] is what the booking flow reads restaurants, menus
//! and table layouts from. [`MockCatalog`] serves built-in sample data
//! until a real restaurant API is wired in.

mod mock;

pub use mock::MockCatalog;

use shared::models::{DiningTable, MenuItem, Restaurant, Zone};

use crate::utils::AppResult;

/// Read access to restaurants, menus and tables
pub trait CatalogProvider: Send + Sync {
    /// All restaurants, in listing order
    fn restaurants(&self) -> Vec<Restaurant>;

    /// One restaurant, or `RestaurantNotFound`
    fn restaurant(&self, id: &str) -> AppResult<Restaurant>;

    /// Menu of a restaurant (empty when it has none)
    fn menu(&self, restaurant_id: &str) -> Vec<MenuItem>;

    /// Tables of a restaurant, including inactive ones
    fn tables(&self, restaurant_id: &str) -> Vec<DiningTable>;

    /// Seating zones
    fn zones(&self) -> Vec<Zone>;
}
