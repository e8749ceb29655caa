use chrono::{DateTime, NaiveDate, Utc};
use rove_catalog::destination::{OWN_BIKE_ID, SEAT_IN_BACKUP_ID};
use rove_catalog::{
    quote, CatalogReader, Destination, LookupError, PriceQuote, SeatingPreference, TourPackage,
    VehicleOption,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::projector::{self, BookingSummary};
use crate::roster::GuestRoster;
use crate::{locale, BookingError, BookingResult};

/// Wizard position. Forward movement is gated; rewinding to an earlier step
/// keeps the accumulated data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    TravelerDetails,
    VehicleSelection,
    Review,
}

/// Primary traveler form. The step-one gate only checks presence; semantic
/// checks on email or phone shape are left to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelerDetails {
    pub full_name: String,
    pub email: String,
    pub dial_code: String,
    pub phone_number: String,
    pub travel_date: Option<NaiveDate>,
    pub id_number: String,
}

impl Default for TravelerDetails {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            dial_code: "+91".to_string(),
            phone_number: String::new(),
            travel_date: None,
            id_number: String::new(),
        }
    }
}

/// Partial traveler edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelerUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub dial_code: Option<String>,
    pub phone_number: Option<String>,
    pub travel_date: Option<NaiveDate>,
    pub id_number: Option<String>,
}

/// One user interaction, applied through [`BookingSession::apply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionAction {
    EditTraveler(TravelerUpdate),
    AddGuest { name: String, id_number: String },
    RemoveGuest { index: usize },
    SelectRide { vehicle_id: String },
    SelectSeating { preference: SeatingPreference },
    NextStep,
    Rewind { to: Step },
}

/// The in-memory aggregate driving the reservation flow: wizard step,
/// traveler form, guest roster, and the coupled ride/seating selection.
/// Ephemeral; it lives for one browsing flow and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSession {
    pub id: Uuid,
    pub destination: Destination,
    pub package: TourPackage,
    pub step: Step,
    pub traveler: TravelerDetails,
    pub guests: GuestRoster,
    pub vehicle_id: Option<String>,
    pub seating: SeatingPreference,
    pub created_at: DateTime<Utc>,
}

impl BookingSession {
    /// Enter the flow without a destination context: resolve the package
    /// slug across the whole catalog. A miss is terminal; the caller
    /// redirects to the destinations listing.
    pub fn begin(catalog: &impl CatalogReader, package_slug: &str) -> Result<Self, LookupError> {
        let (destination, package) = catalog.find_package(package_slug)?;
        Ok(Self::fresh(destination.clone(), package.clone()))
    }

    /// Enter the flow with an explicit destination context.
    pub fn begin_at(
        catalog: &impl CatalogReader,
        destination_slug: &str,
        package_slug: &str,
    ) -> Result<Self, LookupError> {
        let (destination, package) = catalog.package(destination_slug, package_slug)?;
        Ok(Self::fresh(destination.clone(), package.clone()))
    }

    fn fresh(destination: Destination, package: TourPackage) -> Self {
        tracing::info!(package = %package.slug, "booking session started");
        Self {
            id: Uuid::new_v4(),
            destination,
            package,
            step: Step::TravelerDetails,
            traveler: TravelerDetails::default(),
            guests: GuestRoster::new(),
            vehicle_id: None,
            seating: SeatingPreference::Solo,
            created_at: Utc::now(),
        }
    }

    /// Apply one interaction and return the next session value. The
    /// receiver is left untouched, so a refused action leaves the caller
    /// holding the last consistent state and the same action can be retried
    /// after correction.
    pub fn apply(&self, action: SessionAction) -> BookingResult<BookingSession> {
        let mut next = self.clone();
        match action {
            SessionAction::EditTraveler(update) => next.merge_traveler(update),
            SessionAction::AddGuest { name, id_number } => {
                next.guests.add(&name, &id_number)?;
            }
            SessionAction::RemoveGuest { index } => {
                next.guests.remove(index)?;
                // Dual sharing needs a co-traveler; dropping the last guest
                // falls back to riding solo in the same update.
                if next.guests.is_empty() && next.seating == SeatingPreference::DualSharing {
                    next.seating = SeatingPreference::Solo;
                }
            }
            SessionAction::SelectRide { vehicle_id } => next.select_ride(vehicle_id)?,
            SessionAction::SelectSeating { preference } => next.select_seating(preference)?,
            SessionAction::NextStep => next.advance()?,
            SessionAction::Rewind { to } => next.rewind(to)?,
        }
        Ok(next)
    }

    fn merge_traveler(&mut self, update: TravelerUpdate) {
        if let Some(full_name) = update.full_name {
            self.traveler.full_name = full_name;
        }
        if let Some(email) = update.email {
            self.traveler.email = email;
        }
        if let Some(dial_code) = update.dial_code {
            self.traveler.dial_code = dial_code;
        }
        if let Some(phone_number) = update.phone_number {
            let country = locale::country_by_dial(&self.traveler.dial_code);
            self.traveler.phone_number = locale::normalize_phone(country, &phone_number);
        }
        if let Some(travel_date) = update.travel_date {
            self.traveler.travel_date = Some(travel_date);
        }
        if let Some(id_number) = update.id_number {
            self.traveler.id_number = id_number;
        }
    }

    /// Choosing a ride and the seating fallback are one atomic update:
    /// picking any non-backup ride drops the seating preference back to
    /// solo, so a backup price table can never be paired with a regular
    /// vehicle.
    fn select_ride(&mut self, vehicle_id: String) -> BookingResult<()> {
        let known = self.package.option_by_id(&vehicle_id).is_some()
            || vehicle_id == OWN_BIKE_ID
            || vehicle_id == SEAT_IN_BACKUP_ID;
        if !known {
            return Err(BookingError::Validation(format!(
                "unknown vehicle option: {vehicle_id}"
            )));
        }

        let is_backup_ride = vehicle_id == SEAT_IN_BACKUP_ID
            || self
                .package
                .option_by_id(&vehicle_id)
                .is_some_and(|option| option.is_backup_vehicle);
        if !is_backup_ride {
            self.seating = SeatingPreference::Solo;
        }
        self.vehicle_id = Some(vehicle_id);
        Ok(())
    }

    /// Seating and vehicle move together: seat-in-backup forces the backup
    /// ride (or the synthetic id when the fleet has none).
    fn select_seating(&mut self, preference: SeatingPreference) -> BookingResult<()> {
        match preference {
            SeatingPreference::DualSharing if self.guests.is_empty() => {
                Err(BookingError::Validation(
                    "dual sharing needs at least one co-traveler".to_string(),
                ))
            }
            SeatingPreference::SeatInBackup => {
                self.seating = SeatingPreference::SeatInBackup;
                self.vehicle_id = Some(match self.package.backup_option() {
                    Some(backup) => backup.id.clone(),
                    None => SEAT_IN_BACKUP_ID.to_string(),
                });
                Ok(())
            }
            _ => {
                self.seating = preference;
                Ok(())
            }
        }
    }

    fn advance(&mut self) -> BookingResult<()> {
        match self.step {
            Step::TravelerDetails => {
                let traveler = &self.traveler;
                let complete = !traveler.full_name.trim().is_empty()
                    && !traveler.email.trim().is_empty()
                    && !traveler.phone_number.trim().is_empty()
                    && traveler.travel_date.is_some()
                    && !traveler.id_number.trim().is_empty();
                if !complete {
                    return Err(BookingError::MissingFields);
                }
                self.step = Step::VehicleSelection;
                self.enter_vehicle_selection();
            }
            Step::VehicleSelection => {
                if self.vehicle_id.is_none() {
                    return Err(BookingError::Validation("select a ride to continue".to_string()));
                }
                self.step = Step::Review;
            }
            Step::Review => {
                return Err(BookingError::InvalidTransition {
                    from: Step::Review,
                    to: Step::Review,
                });
            }
        }
        tracing::debug!(session = %self.id, step = ?self.step, "booking step advanced");
        Ok(())
    }

    /// Entry action for the vehicle step: the first listed option becomes
    /// the default. Fires only while nothing is selected, so re-entering
    /// the step is a no-op.
    fn enter_vehicle_selection(&mut self) {
        if self.vehicle_id.is_none() {
            if let Some(first) = self.package.first_option() {
                self.vehicle_id = Some(first.id.clone());
            }
        }
    }

    /// Pure rewind to an earlier step; all accumulated data is kept.
    fn rewind(&mut self, to: Step) -> BookingResult<()> {
        if to >= self.step {
            return Err(BookingError::InvalidTransition { from: self.step, to });
        }
        self.step = to;
        Ok(())
    }

    /// Primary traveler plus roster.
    pub fn traveler_count(&self) -> u32 {
        1 + self.guests.len() as u32
    }

    /// The catalog option behind the current ride id. Synthetic ids resolve
    /// to the backup option (seat-in-backup) or to no option at all
    /// (own bike, priced at base).
    pub fn selected_option(&self) -> Option<&VehicleOption> {
        match self.vehicle_id.as_deref() {
            Some(SEAT_IN_BACKUP_ID) => self.package.backup_option(),
            Some(OWN_BIKE_ID) | None => None,
            Some(id) => self.package.option_by_id(id),
        }
    }

    /// Recomputed on every relevant change; cheap and pure.
    pub fn price(&self) -> PriceQuote {
        quote(
            &self.package,
            self.selected_option(),
            self.seating,
            self.traveler_count(),
        )
    }

    /// Seating preferences legal for the current session. Dual sharing is
    /// never offered while the roster is empty.
    pub fn seating_choices(&self) -> Vec<SeatingPreference> {
        let mut choices = vec![SeatingPreference::Solo];
        if !self.guests.is_empty() {
            choices.push(SeatingPreference::DualSharing);
        }
        choices.push(SeatingPreference::SeatInBackup);
        choices
    }

    /// The read-only confirmation view for the review step.
    pub fn summary(&self) -> BookingSummary {
        projector::summarize(self)
    }
}
