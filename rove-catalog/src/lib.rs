pub mod destination;
pub mod pricing;
pub mod reader;
pub mod sample;

pub use destination::{Destination, SeatingPreference, TourPackage, VehicleOption};
pub use pricing::{quote, PriceQuote};
pub use reader::{CatalogReader, LookupError, StaticCatalog};
