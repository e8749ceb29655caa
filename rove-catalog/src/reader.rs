use crate::destination::{Destination, TourPackage};
use thiserror::Error;

/// A failed lookup is terminal for the booking flow: the caller redirects
/// to the destinations listing instead of rendering a partial session.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("destination not found: {0}")]
    DestinationNotFound(String),

    #[error("package not found: {0}")]
    PackageNotFound(String),
}

/// Read-only catalog access, keyed by slugs. Lookups are deterministic and
/// side-effect-free.
pub trait CatalogReader {
    fn destination(&self, slug: &str) -> Option<&Destination>;

    /// Resolve a package within an explicit destination context.
    fn package(
        &self,
        destination_slug: &str,
        package_slug: &str,
    ) -> Result<(&Destination, &TourPackage), LookupError>;

    /// Resolve a package slug across every destination, for flows entered
    /// without a destination context.
    fn find_package(&self, package_slug: &str) -> Result<(&Destination, &TourPackage), LookupError>;
}

/// In-memory catalog over a fixed destination list.
pub struct StaticCatalog {
    destinations: Vec<Destination>,
}

impl StaticCatalog {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }
}

impl CatalogReader for StaticCatalog {
    fn destination(&self, slug: &str) -> Option<&Destination> {
        self.destinations.iter().find(|destination| destination.slug == slug)
    }

    fn package(
        &self,
        destination_slug: &str,
        package_slug: &str,
    ) -> Result<(&Destination, &TourPackage), LookupError> {
        let destination = self
            .destination(destination_slug)
            .ok_or_else(|| LookupError::DestinationNotFound(destination_slug.to_string()))?;
        let package = destination
            .packages
            .iter()
            .find(|package| package.slug == package_slug)
            .ok_or_else(|| LookupError::PackageNotFound(package_slug.to_string()))?;
        Ok((destination, package))
    }

    fn find_package(&self, package_slug: &str) -> Result<(&Destination, &TourPackage), LookupError> {
        for destination in &self.destinations {
            if let Some(package) = destination.packages.iter().find(|package| package.slug == package_slug)
            {
                return Ok((destination, package));
            }
        }
        Err(LookupError::PackageNotFound(package_slug.to_string()))
    }
}
