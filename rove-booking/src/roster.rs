use crate::{locale, BookingError, BookingResult};
use rove_shared::Masked;
use serde::{Deserialize, Serialize};

/// A co-traveler beyond the primary traveler. Identity is positional in the
/// roster; two guests with identical details are two seats.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    pub id_number: Masked<String>,
}

/// Ordered co-traveler list. Insertion order drives the "Guest 1, Guest 2"
/// numbering in the confirmation view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuestRoster {
    guests: Vec<Guest>,
}

impl GuestRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a guest. The name must be non-blank and the document number
    /// must normalize to the fixed digit length.
    pub fn add(&mut self, name: &str, id_number: &str) -> BookingResult<()> {
        if name.trim().is_empty() {
            return Err(BookingError::Validation("guest name must not be empty".to_string()));
        }
        let id_number = locale::normalize_id_number(id_number)?;
        self.guests.push(Guest {
            name: name.to_string(),
            id_number: Masked::new(id_number),
        });
        Ok(())
    }

    /// Remove by position; later guests shift down and are renumbered.
    pub fn remove(&mut self, index: usize) -> BookingResult<Guest> {
        if index >= self.guests.len() {
            return Err(BookingError::GuestIndex {
                index,
                len: self.guests.len(),
            });
        }
        Ok(self.guests.remove(index))
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter()
    }
}
