//! In-memory sample catalog

use shared::models::{DepositPolicy, DiningTable, MenuItem, Restaurant, Zone};

use super::CatalogProvider;
use crate::utils::{AppError, AppResult};

/// Catalog backed by in-memory vectors
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    restaurants: Vec<Restaurant>,
    menu: Vec<MenuItem>,
    tables: Vec<DiningTable>,
    zones: Vec<Zone>,
}

impl MockCatalog {
    /// Catalog with the built-in sample restaurants
    pub fn new() -> Self {
        let mut catalog = Self::empty()
            .with_zone(zone("hall", "Main hall", None))
            .with_zone(zone("window", "Window side", Some("Street view")))
            .with_zone(zone("terrace", "Terrace", Some("Open air, weather permitting")))
            .with_zone(zone("private", "Private room", Some("Closed room for groups")));

        catalog = catalog
            .with_restaurant(restaurant(
                "1",
                "Hanok Table",
                "Korean",
                "12 Bukchon-ro, Jongno-gu, Seoul",
                "0212345678",
                "11:30",
                "22:00",
                DepositPolicy::PerPerson { amount: 10000.0 },
            ))
            .with_menu_item(menu_item("1", "m101", "Galbi-jjim", 38000.0, "main", true))
            .with_menu_item(menu_item("1", "m102", "Haemul pajeon", 18000.0, "side", false))
            .with_menu_item(menu_item("1", "m103", "Doenjang-jjigae", 9000.0, "main", false))
            .with_menu_item(menu_item("1", "m104", "Makgeolli", 7000.0, "drink", false));
        for (id, zone_id, capacity) in [
            ("A1", "hall", 2),
            ("A2", "hall", 2),
            ("B1", "hall", 4),
            ("B2", "hall", 4),
            ("C1", "private", 8),
            ("W1", "window", 2),
            ("W2", "window", 2),
        ] {
            catalog = catalog.with_table(DiningTable::new(id, "1", zone_id, capacity));
        }

        catalog = catalog
            .with_restaurant(restaurant(
                "2",
                "Trattoria Sole",
                "Italian",
                "45 Itaewon-ro, Yongsan-gu, Seoul",
                "027891234",
                "12:00",
                "23:00",
                DepositPolicy::Rate { percent: 10.0 },
            ))
            .with_menu_item(menu_item("2", "m201", "Tagliatelle al ragu", 24000.0, "pasta", true))
            .with_menu_item(menu_item("2", "m202", "Margherita", 19000.0, "pizza", false))
            .with_menu_item(menu_item("2", "m203", "Tiramisu", 9500.0, "dessert", false));
        for (id, zone_id, capacity) in [
            ("T10", "hall", 2),
            ("T11", "hall", 4),
            ("T12", "hall", 4),
            ("P1", "terrace", 4),
            ("P2", "terrace", 6),
            ("BAR-1", "hall", 1),
            ("BAR-2", "hall", 1),
        ] {
            catalog = catalog.with_table(DiningTable::new(id, "2", zone_id, capacity));
        }

        catalog = catalog
            .with_restaurant(restaurant(
                "3",
                "Sushi Kaze",
                "Japanese",
                "8 Apgujeong-ro, Gangnam-gu, Seoul",
                "0315551234",
                "17:00",
                "21:30",
                DepositPolicy::None,
            ))
            .with_menu_item(menu_item("3", "m301", "Omakase", 120000.0, "course", true))
            .with_menu_item(menu_item("3", "m302", "Chirashi", 35000.0, "main", false));
        for (id, zone_id, capacity) in [("S1", "hall", 6), ("S2", "hall", 6), ("K1", "private", 4)] {
            catalog = catalog.with_table(DiningTable::new(id, "3", zone_id, capacity));
        }
        let mut closed = DiningTable::new("K2", "3", "private", 4);
        closed.is_active = false;
        catalog.with_table(closed)
    }

    /// Catalog with no data at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_restaurant(mut self, restaurant: Restaurant) -> Self {
        self.restaurants.push(restaurant);
        self
    }

    pub fn with_menu_item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    pub fn with_table(mut self, table: DiningTable) -> Self {
        self.tables.push(table);
        self
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }
}

impl CatalogProvider for MockCatalog {
    fn restaurants(&self) -> Vec<Restaurant> {
        self.restaurants.clone()
    }

    fn restaurant(&self, id: &str) -> AppResult<Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::restaurant_not_found(id))
    }

    fn menu(&self, restaurant_id: &str) -> Vec<MenuItem> {
        self.menu
            .iter()
            .filter(|m| m.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    fn tables(&self, restaurant_id: &str) -> Vec<DiningTable> {
        self.tables
            .iter()
            .filter(|t| t.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    fn zones(&self) -> Vec<Zone> {
        self.zones.clone()
    }
}

fn zone(id: &str, name: &str, description: Option<&str>) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    cuisine: &str,
    address: &str,
    phone: &str,
    open_time: &str,
    close_time: &str,
    deposit: DepositPolicy,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        description: None,
        open_time: open_time.to_string(),
        close_time: close_time.to_string(),
        deposit,
        image_url: None,
    }
}

fn menu_item(
    restaurant_id: &str,
    id: &str,
    name: &str,
    price: f64,
    category: &str,
    is_signature: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_id: restaurant_id.to_string(),
        name: name.to_string(),
        description: None,
        price,
        category: category.to_string(),
        is_signature,
    }
}
