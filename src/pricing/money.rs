//! Currency amounts in whole cents

use std::fmt;
use std::ops::{Add, Mul};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A currency amount stored as integer cents
///
/// On the wire it is a decimal number of currency units (`42.5`), which is how
/// the backend stores prices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Convert a decimal amount, rounding half-up to two decimal places
    pub fn from_decimal(amount: f64) -> Self {
        // Go through thousandths first so that binary noise such as
        // 1.005 -> 1.00499999 does not decide the rounding direction.
        let mills = (amount * 1000.0).round() as i64;
        Money((mills + 5).div_euclid(10))
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Render with a currency prefix, e.g. `R$ 135.00`
    pub fn display_with(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

/// Saturates at the `i64` cent range instead of overflowing
impl Mul<usize> for Money {
    type Output = Money;

    fn mul(self, rhs: usize) -> Money {
        let factor = i64::try_from(rhs).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(factor))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Money::from_decimal)
    }
}
