//! Built-in catalog content for tests and demos. The live site feeds the
//! engine the same shapes from its CMS export.

use crate::destination::{Destination, SeatingPreference, TourPackage, VehicleOption};
use crate::reader::StaticCatalog;
use chrono::NaiveDate;
use rove_shared::Money;
use std::collections::BTreeMap;

pub fn sample_catalog() -> StaticCatalog {
    StaticCatalog::new(sample_destinations())
}

pub fn sample_destinations() -> Vec<Destination> {
    vec![
        Destination {
            slug: "ladakh".to_string(),
            name: "Ladakh".to_string(),
            region: "India".to_string(),
            packages: vec![
                TourPackage {
                    slug: "xtreme-ladakh-expedition".to_string(),
                    name: "Xtreme Ladakh".to_string(),
                    duration: "5 nights · 6 days".to_string(),
                    base_price: Money::inr(38_500),
                    old_price: Some(Money::inr(42_000)),
                    vehicle_options: vec![
                        VehicleOption {
                            id: "re-himalayan-411".to_string(),
                            name: "Royal Enfield Himalayan".to_string(),
                            engine: "411cc".to_string(),
                            price_multiplier: 1.0,
                            seating_prices: BTreeMap::new(),
                            is_backup_vehicle: false,
                        },
                        VehicleOption {
                            id: "re-classic-350".to_string(),
                            name: "Royal Enfield Classic".to_string(),
                            engine: "350cc".to_string(),
                            price_multiplier: 1.15,
                            seating_prices: BTreeMap::new(),
                            is_backup_vehicle: false,
                        },
                        VehicleOption {
                            id: "ktm-390-adventure".to_string(),
                            name: "KTM 390 Adventure".to_string(),
                            engine: "373cc".to_string(),
                            price_multiplier: 1.25,
                            seating_prices: BTreeMap::from([
                                (SeatingPreference::Solo, Money::inr(48_500)),
                                (SeatingPreference::DualSharing, Money::inr(44_000)),
                            ]),
                            is_backup_vehicle: false,
                        },
                        VehicleOption {
                            id: "backup-force-gurkha".to_string(),
                            name: "Force Gurkha Backup".to_string(),
                            engine: "2596cc".to_string(),
                            price_multiplier: 0.9,
                            seating_prices: BTreeMap::from([(
                                SeatingPreference::SeatInBackup,
                                Money::inr(32_000),
                            )]),
                            is_backup_vehicle: true,
                        },
                    ],
                    available_dates: None,
                },
                TourPackage {
                    slug: "nubra-pangong-weekender".to_string(),
                    name: "Nubra & Pangong Weekender".to_string(),
                    duration: "3 nights · 4 days".to_string(),
                    base_price: Money::inr(24_000),
                    old_price: None,
                    vehicle_options: vec![VehicleOption {
                        id: "re-himalayan-411".to_string(),
                        name: "Royal Enfield Himalayan".to_string(),
                        engine: "411cc".to_string(),
                        price_multiplier: 1.0,
                        seating_prices: BTreeMap::new(),
                        is_backup_vehicle: false,
                    }],
                    available_dates: None,
                },
            ],
        },
        Destination {
            slug: "spiti".to_string(),
            name: "Spiti Valley".to_string(),
            region: "India".to_string(),
            packages: vec![TourPackage {
                slug: "spiti-circuit".to_string(),
                name: "Spiti Full Circuit".to_string(),
                duration: "7 nights · 8 days".to_string(),
                base_price: Money::inr(31_000),
                old_price: Some(Money::inr(34_500)),
                // Fixed-departure trip: no rental fleet, riders join the
                // convoy on their own bikes or in the backup vehicle.
                vehicle_options: vec![],
                available_dates: Some(vec![
                    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
                    NaiveDate::from_ymd_opt(2026, 9, 26).unwrap(),
                    NaiveDate::from_ymd_opt(2026, 10, 10).unwrap(),
                ]),
            }],
        },
    ]
}
