//! Table availability
//!
//! There is no inventory store behind the booking flow yet, so
//! availability is derived from the reservation context alone: the
//! `(restaurant, date, time)` seed and each table id are hashed, and the
//! table is bookable when the hash lands in the lower 70 of 100 buckets.
//! The result looks random per table and slot but is fully reproducible.
//!
//! [`AvailabilityOracle`] is the seam a real availability query plugs into.

pub mod hash;

use std::collections::BTreeSet;

use shared::models::ReservationContext;

pub use hash::{seed_hash, table_hash};

/// Number of hash buckets a table hash is reduced to
pub const BUCKETS: u32 = 100;

/// Buckets (out of [`BUCKETS`]) that count as available: a 70% target rate
pub const AVAILABLE_BUCKETS: u32 = 70;

/// Source of table availability for a reservation context
pub trait AvailabilityOracle: Send + Sync {
    /// Subset of `table_ids` that can be booked for `ctx`
    fn available(&self, ctx: &ReservationContext, table_ids: &[String]) -> BTreeSet<String>;

    /// Availability verdict for a single table
    fn is_available(&self, ctx: &ReservationContext, table_id: &str) -> bool {
        self.available(ctx, &[table_id.to_string()])
            .contains(table_id)
    }
}

/// Deterministic hash-based oracle
#[derive(Debug, Clone, Copy, Default)]
pub struct HashOracle;

impl AvailabilityOracle for HashOracle {
    fn available(&self, ctx: &ReservationContext, table_ids: &[String]) -> BTreeSet<String> {
        compute_availability(ctx, table_ids)
    }

    fn is_available(&self, ctx: &ReservationContext, table_id: &str) -> bool {
        is_table_available(seed_hash(&ctx.seed()), table_id)
    }
}

/// Tables from `table_ids` that are available for `ctx`
///
/// Each id is judged on its own, so order, duplicates and the presence of
/// other ids never change a verdict. An empty input yields an empty set.
pub fn compute_availability<S: AsRef<str>>(
    ctx: &ReservationContext,
    table_ids: &[S],
) -> BTreeSet<String> {
    let seed = seed_hash(&ctx.seed());
    let available: BTreeSet<String> = table_ids
        .iter()
        .map(|id| id.as_ref())
        .filter(|id| is_table_available(seed, id))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        restaurant_id = %ctx.restaurant_id,
        date = %ctx.date_ymd,
        time = %ctx.time,
        requested = table_ids.len(),
        available = available.len(),
        "Computed table availability"
    );
    available
}

/// Verdict for one table given a precomputed seed hash
///
/// `(h mod 100) / 100 < 0.70`, evaluated on integers.
#[inline]
pub fn is_table_available(seed_hash: u32, table_id: &str) -> bool {
    table_hash(seed_hash, table_id) % BUCKETS < AVAILABLE_BUCKETS
}
