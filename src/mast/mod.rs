/// KOI and confirmed-planet record variants.
pub mod catalog;
/// Search client for the archive's `search.php` endpoints.
pub mod client;
/// Query parameter map and encoding.
pub mod params;
/// Declarative wire-row to record mapping.
pub mod record;
/// Enumeration of the searchable archive tables.
pub mod table;
/// HTTP transport seam.
pub mod transport;
