//! Type-safe wrappers for NBA stats identifiers.

pub mod ids;
pub mod season;

pub use ids::PlayerId;
pub use season::SeasonId;
