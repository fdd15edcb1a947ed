pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_record, BreweryInfo, DisplayRecord, NamedItem, NOT_AVAILABLE};
pub use types::{CatalogResponse, ImageSet, RawCatalogRecord};
