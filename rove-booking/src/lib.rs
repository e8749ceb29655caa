pub mod locale;
pub mod projector;
pub mod roster;
pub mod session;
pub mod submit;

use rove_catalog::LookupError;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// Aggregated step-one gate. Deliberately coarse: the flow surfaces one
    /// message for any missing required field, not a per-field map.
    #[error("please fill in all required fields")]
    MissingFields,

    #[error("validation failed: {0}")]
    Validation(String),

    /// Guest removal with a stale index. Callers only offer indices from
    /// the current roster, so this is a programming defect when it fires.
    #[error("guest index {index} out of bounds for roster of {len}")]
    GuestIndex { index: usize, len: usize },

    #[error("invalid step transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: session::Step,
        to: session::Step,
    },

    /// Terminal: the flow redirects away instead of rendering.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("booking submission failed: {0}")]
    Submission(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

pub use projector::{summarize, BookingSummary, FareBreakdown};
pub use roster::{Guest, GuestRoster};
pub use session::{BookingSession, SessionAction, Step, TravelerDetails, TravelerUpdate};
pub use submit::{BookingSubmitter, MockBookingSubmitter};
