//! Deposit Calculator
//!
//! Menu subtotal and deposit amounts for a booking.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use shared::models::{DepositPolicy, MenuItem, MenuSelection};

use crate::utils::validation::MAX_MENU_QUANTITY;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Sum of `price * quantity` over the pre-ordered menu
///
/// Every selection must reference an item of `menu` and order between 1
/// and [`MAX_MENU_QUANTITY`] portions.
pub fn menu_subtotal(selections: &[MenuSelection], menu: &[MenuItem]) -> AppResult<f64> {
    let mut total = Decimal::ZERO;

    for selection in selections {
        if selection.quantity == 0 || selection.quantity > MAX_MENU_QUANTITY {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!(
                    "Quantity for {} must be between 1 and {}",
                    selection.menu_item_id, MAX_MENU_QUANTITY
                ),
            )
            .with_detail("menu_item_id", selection.menu_item_id.as_str()));
        }

        let item = menu
            .iter()
            .find(|item| item.id == selection.menu_item_id)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::MenuItemNotFound,
                    format!("Menu item {} not found", selection.menu_item_id),
                )
                .with_detail("menu_item_id", selection.menu_item_id.as_str())
            })?;

        total += to_decimal(item.price) * Decimal::from(selection.quantity);
    }

    Ok(to_f64(total))
}

/// Deposit owed for a booking
///
/// - `None`: 0
/// - `PerPerson`: amount * party size
/// - `Rate`: subtotal * percent / 100
///
/// Never negative.
pub fn calculate_deposit(policy: &DepositPolicy, party_size: u32, menu_subtotal: f64) -> f64 {
    let deposit = match policy {
        DepositPolicy::None => Decimal::ZERO,
        DepositPolicy::PerPerson { amount } => to_decimal(*amount) * Decimal::from(party_size),
        DepositPolicy::Rate { percent } => {
            to_decimal(menu_subtotal) * to_decimal(*percent) / Decimal::ONE_HUNDRED
        }
    };
    to_f64(deposit.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "1".to_string(),
            name: format!("Item {id}"),
            description: None,
            price,
            category: "main".to_string(),
            is_signature: false,
        }
    }

    fn sel(id: &str, quantity: u32) -> MenuSelection {
        MenuSelection {
            menu_item_id: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_menu_subtotal() {
        let menu = vec![item("m1", 12000.0), item("m2", 8500.0)];
        let total = menu_subtotal(&[sel("m1", 2), sel("m2", 1)], &menu).unwrap();
        assert_eq!(total, 32500.0);
        assert_eq!(menu_subtotal(&[], &menu).unwrap(), 0.0);
    }

    #[test]
    fn test_menu_subtotal_precision() {
        let menu = vec![item("m1", 0.1), item("m2", 0.2)];
        let total = menu_subtotal(&[sel("m1", 1), sel("m2", 1)], &menu).unwrap();
        assert_eq!(total, 0.3);
    }

    #[test]
    fn test_menu_subtotal_unknown_item() {
        let menu = vec![item("m1", 12000.0)];
        let err = menu_subtotal(&[sel("ghost", 1)], &menu).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_menu_subtotal_bad_quantity() {
        let menu = vec![item("m1", 12000.0)];
        let err = menu_subtotal(&[sel("m1", 0)], &menu).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(menu_subtotal(&[sel("m1", MAX_MENU_QUANTITY + 1)], &menu).is_err());
    }

    #[test]
    fn test_deposit_none() {
        assert_eq!(calculate_deposit(&DepositPolicy::None, 4, 50000.0), 0.0);
    }

    #[test]
    fn test_deposit_per_person() {
        let policy = DepositPolicy::PerPerson { amount: 10000.0 };
        assert_eq!(calculate_deposit(&policy, 4, 0.0), 40000.0);
        assert_eq!(calculate_deposit(&policy, 1, 99999.0), 10000.0);
    }

    #[test]
    fn test_deposit_rate() {
        let policy = DepositPolicy::Rate { percent: 10.0 };
        assert_eq!(calculate_deposit(&policy, 2, 32500.0), 3250.0);
        assert_eq!(calculate_deposit(&policy, 2, 0.0), 0.0);

        let policy = DepositPolicy::Rate { percent: 12.5 };
        assert_eq!(calculate_deposit(&policy, 2, 10.01), 1.25);
    }

    #[test]
    fn test_deposit_never_negative() {
        let policy = DepositPolicy::PerPerson { amount: -5000.0 };
        assert_eq!(calculate_deposit(&policy, 2, 0.0), 0.0);
    }
}
