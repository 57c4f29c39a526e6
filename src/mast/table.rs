/// A searchable table of the Kepler archive.
///
/// Each variant maps to one server-side `search.php` endpoint. Keeping the set
/// closed means an unsupported table name cannot reach the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchTable {
    /// Kepler Objects of Interest (planet candidates).
    Koi,
    /// Confirmed planets.
    ConfirmedPlanets,
    /// Observation data products for a target.
    DataSearch,
}

impl SearchTable {
    /// The path segment of the table's search endpoint.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchTable::Koi => "koi",
            SearchTable::ConfirmedPlanets => "confirmed_planets",
            SearchTable::DataSearch => "data_search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchTable;

    #[test]
    fn endpoints_match_archive_paths() {
        assert_eq!(SearchTable::Koi.endpoint(), "koi");
        assert_eq!(SearchTable::ConfirmedPlanets.endpoint(), "confirmed_planets");
        assert_eq!(SearchTable::DataSearch.endpoint(), "data_search");
    }
}
