//! An immutable monetary value type: an arbitrary-precision decimal amount
//! paired with a currency tag, with arithmetic and comparison operations
//! that are safe against unit mismatch and floating-point rounding error.
//!
//! ```
//! use money_core::Money;
//!
//! let price = Money::new("19.99", "USD")?;
//! let tax = price.multiply("0.08", Some(2))?;
//! let total = price.add(&tax, Some(2))?;
//! assert_eq!(total.amount().to_string(), "21.59");
//! # Ok::<(), money_core::Error>(())
//! ```

pub mod error;
mod util;
pub mod currency;
pub mod money;

pub use crate::currency::Currency;
pub use crate::error::{Error, Result};
pub use crate::money::{Money, ToAmount, MAX_PRECISION};
