use crate::destination::{SeatingPreference, TourPackage, VehicleOption};
use rove_shared::Money;
use serde::{Deserialize, Serialize};

/// The priced result of one booking configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceQuote {
    /// Per-traveler price after the vehicle rule is applied.
    pub seat_price: Money,
    pub traveler_count: u32,
    pub total: Money,
    /// Old-price savings against the single-seat basis, reported as an
    /// auxiliary value and never subtracted from the total.
    pub savings: Option<Money>,
}

/// Compute the final price for a package, ride, seating preference, and
/// traveler count (primary traveler included).
///
/// Per-seat price: the selected option's seating table if it has an entry
/// for the preference, otherwise `round(base * multiplier)`; no option at
/// all means the base price. Each multiplication rounds to the nearest
/// currency unit so itemized figures match the total.
///
/// Pure; the calculator trusts its inputs. Seating legality against the
/// guest roster is the session's job.
pub fn quote(
    package: &TourPackage,
    option: Option<&VehicleOption>,
    seating: SeatingPreference,
    traveler_count: u32,
) -> PriceQuote {
    let seat_price = match option {
        Some(option) => option.seat_price(package.base_price, seating),
        None => package.base_price,
    };
    let total = seat_price.times(traveler_count);
    let savings = package
        .old_price
        .and_then(|old| old.minus_positive(seat_price));

    PriceQuote {
        seat_price,
        traveler_count,
        total,
        savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn package(base: i64, old: Option<i64>) -> TourPackage {
        TourPackage {
            slug: "trip".to_string(),
            name: "Trip".to_string(),
            duration: "6 days".to_string(),
            base_price: Money::inr(base),
            old_price: old.map(Money::inr),
            vehicle_options: vec![],
            available_dates: None,
        }
    }

    fn multiplier_option(multiplier: f64) -> VehicleOption {
        VehicleOption {
            id: "bike".to_string(),
            name: "Bike".to_string(),
            engine: "411cc".to_string(),
            price_multiplier: multiplier,
            seating_prices: BTreeMap::new(),
            is_backup_vehicle: false,
        }
    }

    #[test]
    fn multiplier_rounds_per_step_then_scales_by_travelers() {
        // base 2000, multiplier 1.25, one guest: round(round(2000*1.25)*2) = 5000
        let package = package(2_000, None);
        let option = multiplier_option(1.25);
        let quote = quote(&package, Some(&option), SeatingPreference::Solo, 2);
        assert_eq!(quote.seat_price, Money::inr(2_500));
        assert_eq!(quote.total, Money::inr(5_000));
    }

    #[test]
    fn seating_table_entry_is_used_verbatim() {
        // base 10000, table { solo: 9000, dual-sharing: 8000 }, dual-sharing,
        // one guest: 8000 * 2 = 16000 regardless of the multiplier.
        let package = package(10_000, None);
        let mut option = multiplier_option(1.9);
        option.seating_prices = BTreeMap::from([
            (SeatingPreference::Solo, Money::inr(9_000)),
            (SeatingPreference::DualSharing, Money::inr(8_000)),
        ]);
        let quote = quote(&package, Some(&option), SeatingPreference::DualSharing, 2);
        assert_eq!(quote.seat_price, Money::inr(8_000));
        assert_eq!(quote.total, Money::inr(16_000));
    }

    #[test]
    fn no_option_prices_at_base() {
        let package = package(3_000, None);
        let quote = quote(&package, None, SeatingPreference::Solo, 1);
        assert_eq!(quote.seat_price, Money::inr(3_000));
        assert_eq!(quote.total, Money::inr(3_000));
        assert_eq!(quote.savings, None);
    }

    #[test]
    fn savings_compare_old_price_to_the_seat_basis() {
        let package = package(38_500, Some(42_000));
        let base_quote = quote(&package, None, SeatingPreference::Solo, 3);
        assert_eq!(base_quote.savings, Some(Money::inr(3_500)));
        // The total is untouched by the savings line.
        assert_eq!(base_quote.total, Money::inr(115_500));

        // An upgrade past the old price reports no savings.
        let option = multiplier_option(1.25);
        let upgraded = quote(&package, Some(&option), SeatingPreference::Solo, 1);
        assert_eq!(upgraded.seat_price, Money::inr(48_125));
        assert_eq!(upgraded.savings, None);
    }

    #[test]
    fn multiplier_grid_matches_round_round_formula() {
        let cases: &[(i64, f64, u32, i64)] = &[
            (2_000, 1.25, 2, 5_000),
            (38_500, 1.15, 1, 44_275),
            (38_500, 1.15, 3, 132_825),
            (999, 1.1, 2, 2_198), // round(999*1.1) = 1099
            (1_000, 0.85, 4, 3_400),
        ];
        for &(base, multiplier, travelers, expected) in cases {
            let package = package(base, None);
            let option = multiplier_option(multiplier);
            let quote = quote(&package, Some(&option), SeatingPreference::Solo, travelers);
            assert_eq!(quote.total, Money::inr(expected), "base {base} x{multiplier} n{travelers}");
        }
    }
}
