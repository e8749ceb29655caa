//! Static locale configuration shared by the traveler and guest validators:
//! country dial codes, per-country phone digit rules, and the fixed
//! identity-document length. Injected here once rather than re-derived per
//! form.

use crate::{BookingError, BookingResult};

/// Identity documents (Aadhaar in the source locale) are 16 digits.
pub const ID_DOCUMENT_DIGITS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneDigits {
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
    pub phone_digits: PhoneDigits,
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "IN", name: "India", dial: "+91", phone_digits: PhoneDigits { min: 10, max: 10 } },
    Country { code: "US", name: "United States", dial: "+1", phone_digits: PhoneDigits { min: 10, max: 10 } },
    Country { code: "GB", name: "United Kingdom", dial: "+44", phone_digits: PhoneDigits { min: 10, max: 11 } },
    Country { code: "CA", name: "Canada", dial: "+1", phone_digits: PhoneDigits { min: 10, max: 10 } },
    Country { code: "AU", name: "Australia", dial: "+61", phone_digits: PhoneDigits { min: 9, max: 9 } },
    Country { code: "DE", name: "Germany", dial: "+49", phone_digits: PhoneDigits { min: 10, max: 11 } },
    Country { code: "FR", name: "France", dial: "+33", phone_digits: PhoneDigits { min: 9, max: 9 } },
    Country { code: "IT", name: "Italy", dial: "+39", phone_digits: PhoneDigits { min: 10, max: 10 } },
    Country { code: "ES", name: "Spain", dial: "+34", phone_digits: PhoneDigits { min: 9, max: 9 } },
    Country { code: "JP", name: "Japan", dial: "+81", phone_digits: PhoneDigits { min: 10, max: 11 } },
    Country { code: "NP", name: "Nepal", dial: "+977", phone_digits: PhoneDigits { min: 10, max: 10 } },
];

/// First country matching a dial code. "+1" resolves to the first entry
/// carrying it, which is how the source picker behaves.
pub fn country_by_dial(dial: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.dial == dial)
}

/// Keep only digits and truncate to the country's maximum length. Unknown
/// countries fall back to the ITU maximum of 15 digits.
pub fn normalize_phone(country: Option<&Country>, raw: &str) -> String {
    let max = country.map(|country| country.phone_digits.max).unwrap_or(15);
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// Normalize an identity-document number: strip whitespace, then require
/// exactly [`ID_DOCUMENT_DIGITS`] digits.
pub fn normalize_id_number(raw: &str) -> BookingResult<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != ID_DOCUMENT_DIGITS || !compact.chars().all(|c| c.is_ascii_digit()) {
        return Err(BookingError::Validation(format!(
            "identity document number must be {ID_DOCUMENT_DIGITS} digits"
        )));
    }
    Ok(compact)
}
