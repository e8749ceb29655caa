use chrono::NaiveDate;
use rove_shared::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthetic ride id for riders who bring their own motorbike. Prices at the
/// package base rate.
pub const OWN_BIKE_ID: &str = "own-bike";

/// Synthetic ride id for a seat in the backup vehicle when the package does
/// not list a dedicated backup option.
pub const SEAT_IN_BACKUP_ID: &str = "seat-in-backup";

/// How a traveler is seated relative to the vehicle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SeatingPreference {
    #[default]
    Solo,
    /// Two travelers on one vehicle. Only legal with a non-empty guest
    /// roster; the session enforces that, not the catalog.
    DualSharing,
    SeatInBackup,
}

/// A selectable ride for a package, carrying its own pricing rule: either a
/// multiplier on the package base price, or an absolute per-seat price table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleOption {
    pub id: String,
    pub name: String,
    /// Engine displacement label, e.g. "411cc".
    pub engine: String,
    pub price_multiplier: f64,
    /// Absolute per-seat prices, used when the seat price is not a simple
    /// multiple of the base. An entry here overrides the multiplier.
    #[serde(default)]
    pub seating_prices: BTreeMap<SeatingPreference, Money>,
    #[serde(default)]
    pub is_backup_vehicle: bool,
}

impl VehicleOption {
    /// Per-seat price for this ride. Exactly one pricing mode is
    /// authoritative: a seating-table entry wins, the multiplier only
    /// applies when the table has no entry for the preference.
    pub fn seat_price(&self, base: Money, preference: SeatingPreference) -> Money {
        match self.seating_prices.get(&preference) {
            Some(price) => *price,
            None => base.mul_round(self.price_multiplier),
        }
    }
}

/// A purchasable multi-day itinerary. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourPackage {
    /// Unique within its destination, and expected globally unique so the
    /// booking flow can be entered without a destination context.
    pub slug: String,
    pub name: String,
    pub duration: String,
    pub base_price: Money,
    /// Pre-discount price, shown as a savings line when present.
    pub old_price: Option<Money>,
    #[serde(default)]
    pub vehicle_options: Vec<VehicleOption>,
    /// Allow-list of departure dates. Absent means any future date.
    pub available_dates: Option<Vec<NaiveDate>>,
}

impl TourPackage {
    pub fn option_by_id(&self, id: &str) -> Option<&VehicleOption> {
        self.vehicle_options.iter().find(|option| option.id == id)
    }

    pub fn backup_option(&self) -> Option<&VehicleOption> {
        self.vehicle_options.iter().find(|option| option.is_backup_vehicle)
    }

    pub fn first_option(&self) -> Option<&VehicleOption> {
        self.vehicle_options.first()
    }

    /// Whether a departure date can be booked: never in the past, and on
    /// the allow-list when the package defines one.
    pub fn is_date_available(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if date < today {
            return false;
        }
        match &self.available_dates {
            Some(dates) => dates.contains(&date),
            None => true,
        }
    }
}

/// A marketed region with its packages. Immutable reference data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Destination {
    pub slug: String,
    pub name: String,
    pub region: String,
    pub packages: Vec<TourPackage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_with_table() -> VehicleOption {
        VehicleOption {
            id: "tourer".to_string(),
            name: "Grand Tourer".to_string(),
            engine: "650cc".to_string(),
            price_multiplier: 1.4,
            seating_prices: BTreeMap::from([
                (SeatingPreference::Solo, Money::inr(9_000)),
                (SeatingPreference::DualSharing, Money::inr(8_000)),
            ]),
            is_backup_vehicle: false,
        }
    }

    #[test]
    fn seating_table_entry_overrides_multiplier() {
        let option = option_with_table();
        let base = Money::inr(10_000);
        assert_eq!(
            option.seat_price(base, SeatingPreference::DualSharing),
            Money::inr(8_000)
        );
        assert_eq!(option.seat_price(base, SeatingPreference::Solo), Money::inr(9_000));
    }

    #[test]
    fn multiplier_applies_when_table_has_no_entry() {
        let option = option_with_table();
        let base = Money::inr(10_000);
        assert_eq!(
            option.seat_price(base, SeatingPreference::SeatInBackup),
            Money::inr(14_000)
        );
    }

    #[test]
    fn date_availability_honors_allow_list_and_past_floor() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let open_date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let closed_date = NaiveDate::from_ymd_opt(2026, 6, 16).unwrap();

        let mut package = TourPackage {
            slug: "test".to_string(),
            name: "Test".to_string(),
            duration: "3 days".to_string(),
            base_price: Money::inr(1_000),
            old_price: None,
            vehicle_options: vec![],
            available_dates: Some(vec![open_date]),
        };

        assert!(package.is_date_available(open_date, today));
        assert!(!package.is_date_available(closed_date, today));
        // Past dates are out even when listed.
        assert!(!package.is_date_available(open_date, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));

        // No allow-list: any date from today on.
        package.available_dates = None;
        assert!(package.is_date_available(closed_date, today));
        assert!(!package.is_date_available(NaiveDate::from_ymd_opt(2026, 5, 31).unwrap(), today));
    }

    #[test]
    fn seating_preference_uses_kebab_case_tokens() {
        assert_eq!(
            serde_json::to_string(&SeatingPreference::DualSharing).unwrap(),
            "\"dual-sharing\""
        );
        assert_eq!(
            serde_json::to_string(&SeatingPreference::SeatInBackup).unwrap(),
            "\"seat-in-backup\""
        );
    }
}
