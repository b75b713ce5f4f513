//! Exact decimal amounts
//!
//! Quantities, prices and totals are held as base-10 decimals so that
//! products and sums match the stored values digit for digit. Nothing in this
//! module ever goes through binary floating point.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// An exact decimal value parsed from a template field
///
/// Equality and ordering are by numeric value, so `37.5 == 37.50`. Display
/// keeps the scale the value was produced with, so `3 * 12.50` renders as
/// `37.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Exact zero
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parse an amount from a template field
    ///
    /// Surrounding whitespace is ignored. Accepts plain decimal literals
    /// ("12.50", "-3", "+0.5") and exponent form ("1.5e2").
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };

        parsed
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }

    /// Multiply exactly
    ///
    /// Returns `None` if the product leaves the decimal range or can only be
    /// represented by rounding away digits.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        let product = self.0.checked_mul(other.0)?;
        if product.scale() == self.0.scale() + other.0.scale() {
            return Some(Self(product));
        }

        // The product was rescaled; keep it only if no digits were dropped
        let (a, a_scale) = reduced_parts(self.0);
        let (b, b_scale) = reduced_parts(other.0);
        let exact = a.checked_mul(b)?;
        is_exact(product, exact, a_scale + b_scale).then_some(Self(product))
    }

    /// Add exactly, returning `None` if the sum leaves the decimal range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let sum = self.0.checked_add(other.0)?;
        self.exact_sum(other, sum, i128::checked_add)
    }

    /// Subtract exactly, returning `None` if the difference leaves the decimal range
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let difference = self.0.checked_sub(other.0)?;
        self.exact_sum(other, difference, i128::checked_sub)
    }

    fn exact_sum(
        self,
        other: Self,
        result: Decimal,
        op: fn(i128, i128) -> Option<i128>,
    ) -> Option<Self> {
        if result.scale() >= self.0.scale().max(other.0.scale()) {
            return Some(Self(result));
        }

        let (a, a_scale) = reduced_parts(self.0);
        let (b, b_scale) = reduced_parts(other.0);
        let scale = a_scale.max(b_scale);
        let a = a.checked_mul(10i128.checked_pow(scale - a_scale)?)?;
        let b = b.checked_mul(10i128.checked_pow(scale - b_scale)?)?;
        let exact = op(a, b)?;
        is_exact(result, exact, scale).then_some(Self(result))
    }
}

/// Mantissa and scale with trailing zeros stripped
fn reduce(mut mantissa: i128, mut scale: u32) -> (i128, u32) {
    while scale > 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    (mantissa, scale)
}

fn reduced_parts(value: Decimal) -> (i128, u32) {
    reduce(value.mantissa(), value.scale())
}

/// Whether `value` equals `mantissa * 10^-scale` exactly
fn is_exact(value: Decimal, mantissa: i128, scale: u32) -> bool {
    reduced_parts(value) == reduce(mantissa, scale)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "empty numeric field"),
            AmountParseError::InvalidFormat(s) => write!(f, "not a decimal number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
