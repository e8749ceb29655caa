use crate::projector::BookingSummary;
use crate::BookingError;
use async_trait::async_trait;

/// The confirm-booking hand-off. The engine itself never performs network
/// I/O; confirmation is a single opaque call to an external collaborator
/// with its own failure and retry policy.
#[async_trait]
pub trait BookingSubmitter: Send + Sync {
    /// Submit a confirmed summary, returning the collaborator's booking
    /// reference.
    async fn submit(&self, summary: &BookingSummary) -> Result<String, BookingError>;
}

pub struct MockBookingSubmitter;

#[async_trait]
impl BookingSubmitter for MockBookingSubmitter {
    async fn submit(&self, summary: &BookingSummary) -> Result<String, BookingError> {
        // A real collaborator would post the summary to the agency backend
        // and await an acknowledgement.
        tracing::info!(
            package = %summary.package,
            travelers = summary.traveler_count,
            "submitting booking"
        );
        Ok(format!("RV-{}", uuid::Uuid::new_v4().simple()))
    }
}
