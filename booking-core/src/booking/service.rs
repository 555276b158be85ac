//! Booking Service
//!
//! Table availability queries, table selection and booking creation on
//! top of a [`CatalogProvider`] and an [`AvailabilityOracle`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::{
    Booking, BookingCreate, BookingStatus, DiningTable, ReservationContext, Restaurant,
    TableAvailability,
};
use shared::util::{now_millis, snowflake_id};

use super::slots::{is_bookable_time, restaurant_slots};
use crate::availability::AvailabilityOracle;
use crate::catalog::CatalogProvider;
use crate::core::Config;
use crate::pricing::{calculate_deposit, menu_subtotal};
use crate::utils::format::validate_phone;
use crate::utils::time::{format_date_ymd, format_time_hm, parse_date_ymd, parse_time_hm};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Available tables for one slot of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub time: String,
    pub available_table_ids: Vec<String>,
}

/// Validated set of tables for a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSelection {
    pub tables: Vec<DiningTable>,
    pub total_capacity: u64,
}

impl TableSelection {
    pub fn table_ids(&self) -> Vec<String> {
        self.tables.iter().map(|t| t.id.clone()).collect()
    }
}

/// Booking flow over a catalog and an availability oracle
pub struct BookingService<C, O> {
    catalog: C,
    oracle: O,
    config: Config,
}

impl<C: CatalogProvider, O: AvailabilityOracle> BookingService<C, O> {
    pub fn new(catalog: C, oracle: O, config: Config) -> Self {
        Self {
            catalog,
            oracle,
            config,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Active tables of the context's restaurant, each flagged available or not
    pub fn available_tables(&self, ctx: &ReservationContext) -> AppResult<Vec<TableAvailability>> {
        self.catalog.restaurant(&ctx.restaurant_id)?;

        let tables: Vec<DiningTable> = self
            .catalog
            .tables(&ctx.restaurant_id)
            .into_iter()
            .filter(|t| t.is_active)
            .collect();
        let ids: Vec<String> = tables.iter().map(|t| t.id.clone()).collect();
        let available = self.oracle.available(ctx, &ids);

        Ok(tables
            .into_iter()
            .map(|table| TableAvailability {
                available: available.contains(&table.id),
                table,
            })
            .collect())
    }

    /// [`available_tables`](Self::available_tables) narrowed to one zone
    pub fn available_tables_in_zone(
        &self,
        ctx: &ReservationContext,
        zone_id: &str,
    ) -> AppResult<Vec<TableAvailability>> {
        if !self.catalog.zones().iter().any(|z| z.id == zone_id) {
            return Err(AppError::with_message(
                ErrorCode::ZoneNotFound,
                format!("Zone {} not found", zone_id),
            )
            .with_detail("zone_id", zone_id));
        }

        Ok(self
            .available_tables(ctx)?
            .into_iter()
            .filter(|t| t.table.zone_id == zone_id)
            .collect())
    }

    /// Available table ids for every slot of a day
    pub fn availability_board(
        &self,
        restaurant_id: &str,
        date: &str,
    ) -> AppResult<Vec<SlotAvailability>> {
        let date = format_date_ymd(parse_date_ymd(date)?);
        let restaurant = self.catalog.restaurant(restaurant_id)?;
        let ids: Vec<String> = self
            .catalog
            .tables(restaurant_id)
            .into_iter()
            .filter(|t| t.is_active)
            .map(|t| t.id)
            .collect();

        let board = restaurant_slots(&restaurant, self.config.slot_interval_minutes)?
            .into_iter()
            .map(|time| {
                let ctx = ReservationContext::new(restaurant_id, date.as_str(), time.as_str());
                let available = self.oracle.available(&ctx, &ids);
                SlotAvailability {
                    time,
                    available_table_ids: ids
                        .iter()
                        .filter(|id| available.contains(*id))
                        .cloned()
                        .collect(),
                }
            })
            .collect();
        Ok(board)
    }

    /// Check that `table_ids` can seat `party_size` guests in `ctx`
    ///
    /// Ids are deduplicated keeping the first occurrence.
    pub fn select_tables(
        &self,
        ctx: &ReservationContext,
        table_ids: &[String],
        party_size: u32,
    ) -> AppResult<TableSelection> {
        if table_ids.is_empty() {
            return Err(AppError::new(ErrorCode::NoTablesSelected));
        }

        let restaurant_tables = self.catalog.tables(&ctx.restaurant_id);
        let mut seen = HashSet::new();
        let mut tables = Vec::new();

        for id in table_ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            let table = restaurant_tables
                .iter()
                .find(|t| &t.id == id && t.is_active)
                .ok_or_else(|| AppError::table_not_found(id.as_str()))?;

            if !self.oracle.is_available(ctx, id) {
                return Err(AppError::with_message(
                    ErrorCode::TableUnavailable,
                    format!("Table {} is not available at {} {}", id, ctx.date_ymd, ctx.time),
                )
                .with_detail("table_id", id.as_str()));
            }
            tables.push(table.clone());
        }

        let total_capacity: u64 = tables.iter().map(|t| u64::from(t.capacity)).sum();
        if total_capacity < u64::from(party_size) {
            return Err(AppError::with_message(
                ErrorCode::TableCapacityInsufficient,
                format!(
                    "Selected tables seat {} but the party has {}",
                    total_capacity, party_size
                ),
            )
            .with_detail("capacity", total_capacity)
            .with_detail("party_size", party_size));
        }

        Ok(TableSelection {
            tables,
            total_capacity,
        })
    }

    /// Validate a booking request and build the resulting booking
    ///
    /// The booking is returned with `Pending` status and is not stored.
    pub fn create_booking(&self, req: BookingCreate) -> AppResult<Booking> {
        match self.build_booking(req) {
            Ok(booking) => {
                tracing::info!(
                    booking_id = booking.id,
                    restaurant_id = %booking.restaurant_id,
                    date = %booking.date,
                    time = %booking.time,
                    party_size = booking.party_size,
                    deposit = booking.deposit,
                    "Booking created"
                );
                Ok(booking)
            }
            Err(e) => {
                tracing::warn!(code = %e.code, "Booking rejected: {}", e);
                Err(e)
            }
        }
    }

    fn build_booking(&self, req: BookingCreate) -> AppResult<Booking> {
        let restaurant = self.catalog.restaurant(&req.restaurant_id)?;
        let date = format_date_ymd(parse_date_ymd(&req.date)?);
        let time = format_time_hm(parse_time_hm(&req.time)?);
        self.check_time(&restaurant, &time)?;
        self.check_party_size(req.party_size)?;

        validate_required_text(&req.guest_name, "guest_name", MAX_NAME_LEN)?;
        validate_optional_text(&req.note, "note", MAX_NOTE_LEN)?;
        let guest_phone = validate_phone(&req.guest_phone, self.config.min_phone_digits)?;

        let ctx = ReservationContext::new(&restaurant.id, date.as_str(), time.as_str());
        let selection = self.select_tables(&ctx, &req.table_ids, req.party_size)?;

        let menu = self.catalog.menu(&restaurant.id);
        let menu_subtotal = menu_subtotal(&req.menu, &menu)?;
        let deposit = calculate_deposit(&restaurant.deposit, req.party_size, menu_subtotal);

        Ok(Booking {
            id: snowflake_id(),
            restaurant_id: restaurant.id,
            date,
            time,
            party_size: req.party_size,
            table_ids: selection.table_ids(),
            guest_name: req.guest_name.trim().to_string(),
            guest_phone,
            note: req.note.filter(|n| !n.trim().is_empty()),
            menu: req.menu,
            menu_subtotal,
            deposit,
            status: BookingStatus::Pending,
            created_at: now_millis(),
        })
    }

    fn check_time(&self, restaurant: &Restaurant, time: &str) -> AppResult<()> {
        if !is_bookable_time(restaurant, time, self.config.slot_interval_minutes)? {
            return Err(AppError::with_message(
                ErrorCode::BookingTimeUnavailable,
                format!(
                    "{} is not a bookable time ({} - {})",
                    time, restaurant.open_time, restaurant.close_time
                ),
            )
            .with_detail("time", time));
        }
        Ok(())
    }

    fn check_party_size(&self, party_size: u32) -> AppResult<()> {
        if party_size == 0 || party_size > self.config.max_party_size {
            return Err(AppError::with_message(
                ErrorCode::PartySizeOutOfRange,
                format!(
                    "Party size must be between 1 and {}, got {}",
                    self.config.max_party_size, party_size
                ),
            )
            .with_detail("party_size", party_size));
        }
        Ok(())
    }
}
