//! Availability preview for every restaurant of a catalog

use chrono::NaiveDate;
use serde_json::{Value, json};

use super::BookingService;
use crate::availability::AvailabilityOracle;
use crate::catalog::CatalogProvider;
use crate::utils::AppResult;
use crate::utils::time::{format_date_ymd, parse_date_ymd};

/// Preview date: the given `YYYY-MM-DD` argument, or `today` when absent
pub fn resolve_date(arg: Option<&str>, today: NaiveDate) -> AppResult<String> {
    match arg {
        Some(arg) => Ok(format_date_ymd(parse_date_ymd(arg)?)),
        None => Ok(format_date_ymd(today)),
    }
}

/// Availability board of every restaurant for `date`, as JSON
pub fn availability_preview<C: CatalogProvider, O: AvailabilityOracle>(
    service: &BookingService<C, O>,
    date: &str,
) -> AppResult<Value> {
    let mut restaurants = Vec::new();
    for restaurant in service.catalog().restaurants() {
        let board = service.availability_board(&restaurant.id, date)?;
        restaurants.push(json!({
            "restaurant_id": restaurant.id,
            "name": restaurant.name,
            "slots": board,
        }));
    }
    Ok(json!({ "date": date, "restaurants": restaurants }))
}
