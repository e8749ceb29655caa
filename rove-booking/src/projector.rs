//! Read-only projection of a session snapshot into the confirmation view.
//! Never mutates; the same snapshot always yields the same summary.

use crate::session::BookingSession;
use rove_shared::Money;
use serde::Serialize;

/// The human-facing review record: trip details, traveler info, guest list,
/// and the itemized fare. Structured values only, no rendering concerns.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub destination: String,
    pub package: String,
    pub duration: String,
    pub travel_date: Option<String>,
    pub traveler: TravelerLine,
    pub traveler_count: u32,
    pub vehicle: Option<VehicleLine>,
    pub guests: Vec<GuestLine>,
    pub fare: FareBreakdown,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TravelerLine {
    pub name: String,
    pub email: String,
    /// Dial code plus local number, e.g. "+91 9876543210".
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VehicleLine {
    pub name: String,
    pub engine: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GuestLine {
    /// 1-based display number, following roster order.
    pub number: u32,
    pub name: String,
    pub id_number: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FareBreakdown {
    pub base_per_traveler: Money,
    /// Per-traveler delta against the base when the selected ride is not
    /// priced at base. Negative for cheaper rides.
    pub vehicle_upgrade: Option<Money>,
    /// Old-price savings line, informational only.
    pub savings: Option<Money>,
    pub traveler_count: u32,
    pub total: Money,
}

pub fn summarize(session: &BookingSession) -> BookingSummary {
    let quote = session.price();
    let base = session.package.base_price;
    let vehicle_upgrade = (quote.seat_price != base).then(|| quote.seat_price.minus(base));

    BookingSummary {
        destination: session.destination.name.clone(),
        package: session.package.name.clone(),
        duration: session.package.duration.clone(),
        travel_date: session
            .traveler
            .travel_date
            .map(|date| date.format("%-d %B %Y").to_string()),
        traveler: TravelerLine {
            name: session.traveler.full_name.clone(),
            email: session.traveler.email.clone(),
            phone: format!("{} {}", session.traveler.dial_code, session.traveler.phone_number),
        },
        traveler_count: quote.traveler_count,
        vehicle: session.selected_option().map(|option| VehicleLine {
            name: option.name.clone(),
            engine: option.engine.clone(),
        }),
        guests: session
            .guests
            .iter()
            .enumerate()
            .map(|(index, guest)| GuestLine {
                number: index as u32 + 1,
                name: guest.name.clone(),
                id_number: guest.id_number.reveal().clone(),
            })
            .collect(),
        fare: FareBreakdown {
            base_per_traveler: base,
            vehicle_upgrade,
            savings: quote.savings,
            traveler_count: quote.traveler_count,
            total: quote.total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionAction, TravelerUpdate};
    use chrono::NaiveDate;
    use rove_catalog::sample::sample_catalog;
    use rove_catalog::SeatingPreference;

    const ID: &str = "1111222233334444";

    fn review_session() -> BookingSession {
        BookingSession::begin(&sample_catalog(), "xtreme-ladakh-expedition")
            .unwrap()
            .apply(SessionAction::EditTraveler(TravelerUpdate {
                full_name: Some("Asha Rao".to_string()),
                email: Some("asha@example.com".to_string()),
                phone_number: Some("9876543210".to_string()),
                travel_date: NaiveDate::from_ymd_opt(2026, 9, 12),
                id_number: Some(ID.to_string()),
                ..Default::default()
            }))
            .unwrap()
            .apply(SessionAction::AddGuest {
                name: "Mira".to_string(),
                id_number: "5555666677778888".to_string(),
            })
            .unwrap()
            .apply(SessionAction::NextStep)
            .unwrap()
            .apply(SessionAction::NextStep)
            .unwrap()
    }

    #[test]
    fn summary_carries_trip_traveler_and_guest_details() {
        let summary = review_session().summary();
        assert_eq!(summary.destination, "Ladakh");
        assert_eq!(summary.package, "Xtreme Ladakh");
        assert_eq!(summary.duration, "5 nights · 6 days");
        assert_eq!(summary.travel_date.as_deref(), Some("12 September 2026"));
        assert_eq!(summary.traveler.phone, "+91 9876543210");
        assert_eq!(summary.traveler_count, 2);
        assert_eq!(summary.vehicle.as_ref().unwrap().name, "Royal Enfield Himalayan");

        assert_eq!(summary.guests.len(), 1);
        assert_eq!(summary.guests[0].number, 1);
        assert_eq!(summary.guests[0].name, "Mira");
        assert_eq!(summary.guests[0].id_number, "5555666677778888");
    }

    #[test]
    fn fare_breakdown_itemizes_base_upgrade_and_savings() {
        // Default ride prices at base: no upgrade line, savings present.
        let summary = review_session().summary();
        assert_eq!(summary.fare.base_per_traveler, Money::inr(38_500));
        assert_eq!(summary.fare.vehicle_upgrade, None);
        assert_eq!(summary.fare.savings, Some(Money::inr(3_500)));
        assert_eq!(summary.fare.total, Money::inr(77_000));

        // An upgraded ride adds the per-traveler delta.
        let upgraded = review_session()
            .apply(SessionAction::Rewind { to: crate::session::Step::VehicleSelection })
            .unwrap()
            .apply(SessionAction::SelectRide { vehicle_id: "re-classic-350".to_string() })
            .unwrap();
        let summary = upgraded.summary();
        // round(38500 * 1.15) = 44275
        assert_eq!(summary.fare.vehicle_upgrade, Some(Money::inr(5_775)));
        assert_eq!(summary.fare.total, Money::inr(88_550));
        assert_eq!(summary.fare.savings, None);
    }

    #[test]
    fn dual_sharing_table_price_flows_into_the_summary() {
        let dual = review_session()
            .apply(SessionAction::Rewind { to: crate::session::Step::VehicleSelection })
            .unwrap()
            .apply(SessionAction::SelectRide { vehicle_id: "ktm-390-adventure".to_string() })
            .unwrap()
            .apply(SessionAction::SelectSeating { preference: SeatingPreference::DualSharing })
            .unwrap();
        let summary = dual.summary();
        assert_eq!(summary.fare.vehicle_upgrade, Some(Money::inr(5_500)));
        assert_eq!(summary.fare.total, Money::inr(88_000));
    }

    #[test]
    fn summarize_is_stable_and_does_not_mutate() {
        let session = review_session();
        let before = serde_json::to_value(&session).unwrap();
        let first = summarize(&session);
        let second = summarize(&session);
        assert_eq!(first, second);
        assert_eq!(serde_json::to_value(&session).unwrap(), before);
    }
}
