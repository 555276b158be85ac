//! Deposit and menu pricing
//!
//! Deposits are computed when a booking is created.

mod deposit;

pub use deposit::*;
