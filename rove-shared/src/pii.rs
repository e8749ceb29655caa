use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A wrapper for identity-document numbers and similar sensitive values.
/// Debug and Display render a fixed mask, so log macros like
/// `tracing::info!("{:?}", session)` never leak the real number.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Masked<T>(T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Masked(value)
    }

    /// Access the real value, e.g. when projecting a confirmation summary.
    pub fn reveal(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Masking applies to logs only; serialized views (summaries, API
        // responses) need the real value.
        self.0.serialize(serializer)
    }
}
