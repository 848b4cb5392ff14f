//! The money module holds the `Money` value type: an immutable pairing of a
//! decimal amount with a [`Currency`], with arithmetic that is guarded
//! against unit mismatch and binary floating-point rounding error.
//!
//! Every arithmetic operation takes an optional precision (a number of
//! fractional digits) and falls back to the process-wide default when given
//! `None`. Results are rounded half-to-even (banker's rounding, the decimal
//! engine's default mode) and then rescaled so they carry exactly the
//! resolved number of fractional digits. Comparisons are exact and never
//! round.

use crate::currency::Currency;
use crate::error::{Error, Result};
use getset::Getters;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

/// The largest number of fractional digits the decimal engine can carry.
/// Precisions above this are clamped.
pub const MAX_PRECISION: u32 = 28;

static DEFAULT_PRECISION: AtomicU32 = AtomicU32::new(4);

/// Conversion into the decimal representation used by [`Money`].
///
/// This is the single seam through which constructors and scaling operands
/// accept decimal strings, plain decimals, integers, and other `Money`
/// values. A `Money` operand contributes only its amount; its currency is
/// deliberately ignored, which is what lets `multiply`/`divide` scale by a
/// `Money` of any currency while `add`/`subtract` stay currency-checked.
pub trait ToAmount {
    fn to_amount(&self) -> Result<Decimal>;
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> Result<Decimal> {
        Ok(*self)
    }
}

impl ToAmount for &str {
    fn to_amount(&self) -> Result<Decimal> {
        Decimal::from_str(self).map_err(|_| Error::InvalidAmount(self.to_string()))
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> Result<Decimal> {
        self.as_str().to_amount()
    }
}

impl ToAmount for Money {
    fn to_amount(&self) -> Result<Decimal> {
        Ok(self.amount)
    }
}

impl ToAmount for &Money {
    fn to_amount(&self) -> Result<Decimal> {
        Ok(self.amount)
    }
}

macro_rules! int_to_amount {
    ($($ty:ty),*) => {
        $(
            impl ToAmount for $ty {
                fn to_amount(&self) -> Result<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    }
}
int_to_amount! { i32, i64, u32, u64 }

/// An immutable monetary value: a decimal amount tagged with a currency.
///
/// Construction preserves the amount's representation exactly (no rounding);
/// every arithmetic operation returns a new `Money` and leaves the receiver
/// untouched.
#[derive(Clone, Debug, PartialEq, Getters)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
#[getset(get = "pub")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Create a money value from a decimal operand (string, decimal,
    /// integer, or another `Money`'s amount) and a currency.
    ///
    /// Fails with [`Error::InvalidAmount`] if a string operand is not a
    /// well-formed decimal.
    pub fn new<A, C>(amount: A, currency: C) -> Result<Self>
    where
        A: ToAmount,
        C: Into<Currency>,
    {
        Ok(Self {
            amount: amount.to_amount()?,
            currency: currency.into(),
        })
    }

    /// The process-wide precision used when an operation is called without
    /// an explicit one.
    pub fn default_precision() -> u32 {
        DEFAULT_PRECISION.load(AtomicOrdering::Relaxed)
    }

    /// Set the process-wide default precision (clamped to
    /// [`MAX_PRECISION`]).
    ///
    /// Existing `Money` values are unaffected. A concurrent change races
    /// with in-flight operations that resolve their precision implicitly:
    /// those operations see either the old or the new value
    /// non-deterministically. Callers that need a stable precision in
    /// concurrent contexts should pass it explicitly or set the default
    /// once at startup.
    pub fn set_default_precision(precision: u32) {
        DEFAULT_PRECISION.store(precision.min(MAX_PRECISION), AtomicOrdering::Relaxed);
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add another money value of the same currency.
    pub fn add(&self, other: &Money, precision: Option<u32>) -> Result<Money> {
        self.check_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(Error::Overflow)?;
        Ok(self.derive(sum, precision))
    }

    /// Subtract another money value of the same currency.
    pub fn subtract(&self, other: &Money, precision: Option<u32>) -> Result<Money> {
        self.check_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or(Error::Overflow)?;
        Ok(self.derive(difference, precision))
    }

    /// Negate this money value.
    pub fn negate(&self, precision: Option<u32>) -> Money {
        self.derive(-self.amount, precision)
    }

    /// Scale this money value by a decimal factor.
    ///
    /// A `Money` factor contributes only its amount; the result keeps the
    /// receiver's currency and no currency check is performed.
    pub fn multiply<F: ToAmount>(&self, factor: F, precision: Option<u32>) -> Result<Money> {
        let product = self
            .amount
            .checked_mul(factor.to_amount()?)
            .ok_or(Error::Overflow)?;
        Ok(self.derive(product, precision))
    }

    /// Divide this money value by a decimal divisor.
    ///
    /// Same operand rule as [`multiply`](Self::multiply): no currency check,
    /// the receiver's currency is kept. Fails with
    /// [`Error::DivisionByZero`] when the divisor is zero.
    pub fn divide<D: ToAmount>(&self, divisor: D, precision: Option<u32>) -> Result<Money> {
        let divisor = divisor.to_amount()?;
        if divisor.is_zero() {
            Err(Error::DivisionByZero)?;
        }
        let quotient = self.amount.checked_div(divisor).ok_or(Error::Overflow)?;
        Ok(self.derive(quotient, precision))
    }

    /// Compare two money values of the same currency exactly (no rounding).
    pub fn compare_to(&self, other: &Money) -> Result<Ordering> {
        self.check_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn equals(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn greater_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn greater_than_or_equal(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn less_than_or_equal(&self, other: &Money) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    fn check_currency(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            Err(Error::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })?;
        }
        Ok(())
    }

    /// Build a result in this money's currency, rounded half-to-even and
    /// rescaled to exactly the resolved number of fractional digits.
    fn derive(&self, amount: Decimal, precision: Option<u32>) -> Money {
        let precision = precision
            .unwrap_or_else(Money::default_precision)
            .min(MAX_PRECISION);
        let mut quantized =
            amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven);
        quantized.rescale(precision);
        Money {
            amount: quantized,
            currency: self.currency.clone(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Amounts order across values of the same currency; across currencies
/// there is no order.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        self.amount.partial_cmp(&other.amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Money::add(&self, &other, None).expect("Money::add() -- mismatched currencies or overflow")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Money::subtract(&self, &other, None)
            .expect("Money::sub() -- mismatched currencies or overflow")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate(None)
    }
}
