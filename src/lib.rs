/// Crate-wide error type.
pub mod error;
/// MAST Kepler archive types and search client.
pub mod mast;

pub use error::MastError;
pub use mast::client::MastClient;
