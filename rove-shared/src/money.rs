use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency tag carried by every amount. Catalog prices are fixed in the
/// source currency; symbol formatting is a display concern handled outside
/// the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

/// A whole-currency-unit amount. Multiplications round to the nearest unit
/// at each step, so itemized figures always add up to the displayed total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub amount: i64,
    pub currency: Currency,
}

impl Money {
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub const fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::Inr)
    }

    /// Multiply by a fractional factor, rounding to the nearest unit.
    pub fn mul_round(self, factor: f64) -> Self {
        Self {
            amount: (self.amount as f64 * factor).round() as i64,
            currency: self.currency,
        }
    }

    /// Multiply by a count of travelers. Exact; no rounding needed.
    pub fn times(self, count: u32) -> Self {
        Self {
            amount: self.amount * i64::from(count),
            currency: self.currency,
        }
    }

    /// Signed difference. Callers only ever compare amounts in one currency.
    pub fn minus(self, other: Money) -> Self {
        debug_assert_eq!(self.currency, other.currency);
        Self {
            amount: self.amount - other.amount,
            currency: self.currency,
        }
    }

    /// Difference when it is strictly positive, `None` otherwise.
    pub fn minus_positive(self, other: Money) -> Option<Self> {
        debug_assert_eq!(self.currency, other.currency);
        let diff = self.amount - other.amount;
        (diff > 0).then(|| Self {
            amount: diff,
            currency: self.currency,
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_round_rounds_to_nearest_unit() {
        assert_eq!(Money::inr(2000).mul_round(1.25).amount, 2500);
        assert_eq!(Money::inr(999).mul_round(1.15).amount, 1149);
        assert_eq!(Money::inr(1000).mul_round(1.0).amount, 1000);
    }

    #[test]
    fn times_scales_exactly() {
        assert_eq!(Money::inr(2500).times(2).amount, 5000);
        assert_eq!(Money::inr(3000).times(1).amount, 3000);
    }

    #[test]
    fn minus_positive_ignores_non_savings() {
        assert_eq!(
            Money::inr(42_000).minus_positive(Money::inr(38_500)),
            Some(Money::inr(3_500))
        );
        assert_eq!(Money::inr(38_500).minus_positive(Money::inr(42_000)), None);
        assert_eq!(Money::inr(100).minus_positive(Money::inr(100)), None);
    }

    #[test]
    fn serializes_with_currency_code() {
        let json = serde_json::to_value(Money::inr(38_500)).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 38500, "currency": "INR" }));
    }
}
