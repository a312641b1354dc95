//! Money type for account balances

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Account balance amount with high precision
pub type Money = Decimal;
