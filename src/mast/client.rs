use serde_json::Value;

use crate::error::MastError;
use crate::mast::catalog::{Koi, ObservationRow, Planet};
use crate::mast::params::SearchParams;
use crate::mast::table::SearchTable;
use crate::mast::transport::{ReqwestTransport, Transport};

/// Search endpoint root of the MAST Kepler archive.
pub const DEFAULT_BASE_URL: &str = "http://archive.stsci.edu/kepler";

const DEFAULT_MAX_RECORDS: u32 = 100;

/// HTTP client for the MAST Kepler archive search API.
pub struct MastClient {
    transport: Box<dyn Transport>,
    base_url: String,
}

impl MastClient {
    /// Create a client against the public archive.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default archive root.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_transport(base_url, Box::new(ReqwestTransport::new()))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(base_url: &str, transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit one search against a table and return the decoded JSON response.
    ///
    /// The standing parameters are merged in before submission: `action`
    /// defaults to `Search` (the caller may override it), and `outputformat`,
    /// `coordformat`, and `verb` are always forced. A non-success status is an
    /// error; a body the archive did not render as JSON means no matching
    /// records and comes back as `None`.
    pub async fn request(
        &self,
        table: SearchTable,
        params: &SearchParams,
    ) -> Result<Option<Value>, MastError> {
        let mut params = params.clone();
        params.set_default("action", "Search");
        params.set("outputformat", "JSON");
        params.set("coordformat", "dec");
        params.set("verb", 3);

        let url = format!(
            "{}/{}/search.php?{}",
            self.base_url,
            table.endpoint(),
            params.to_query_string()
        );

        log::debug!("GET {url}");

        let resp = self.transport.get(&url).await?;

        if !(200..300).contains(&resp.status) {
            return Err(MastError::Status {
                status: resp.status,
            });
        }

        // The archive renders "no matching records" either as a non-JSON page
        // or as a literal null body.
        match serde_json::from_str(&resp.body).ok() {
            Some(Value::Null) | None => Ok(None),
            decoded => Ok(decoded),
        }
    }

    /// Search the KOI table and map each result row to a [`Koi`].
    ///
    /// `max_records` defaults to 100 and results are ordered by KOI number.
    /// One page per call; callers page explicitly via `max_records` and
    /// `kepoi` range filters such as `kepoi=>12.01`.
    pub async fn kois(&self, params: SearchParams) -> Result<Vec<Koi>, MastError> {
        let mut params = params;
        params.set_default("max_records", DEFAULT_MAX_RECORDS);
        params.set("ordercolumn1", "kepoi");

        let Some(response) = self.request(SearchTable::Koi, &params).await? else {
            return Ok(vec![]);
        };

        rows_from(response)?.into_iter().map(Koi::from_row).collect()
    }

    /// Search the confirmed-planets table and map each row to a [`Planet`].
    pub async fn planets(&self, params: SearchParams) -> Result<Vec<Planet>, MastError> {
        let Some(response) = self.request(SearchTable::ConfirmedPlanets, &params).await? else {
            return Ok(vec![]);
        };

        rows_from(response)?
            .into_iter()
            .map(Planet::from_row)
            .collect()
    }

    /// List the observation data products for one Kepler ID.
    ///
    /// Rows come back raw and in archive order; interpreting them is left to
    /// data-handling layers.
    pub async fn data(&self, kepler_id: &str) -> Result<Vec<ObservationRow>, MastError> {
        let mut params = SearchParams::new();
        params.set("ktc_kepler_id", kepler_id);

        let Some(response) = self.request(SearchTable::DataSearch, &params).await? else {
            return Ok(vec![]);
        };

        rows_from(response)
    }
}

impl Default for MastClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the flat result rows out of a decoded response body.
fn rows_from(response: Value) -> Result<Vec<ObservationRow>, MastError> {
    let rows = match response {
        Value::Array(rows) => rows,
        other => {
            return Err(MastError::InvalidResponse(format!(
                "expected an array of rows, got {other}"
            )));
        }
    };

    rows.into_iter()
        .map(|row| match row {
            Value::Object(map) => Ok(map),
            other => Err(MastError::InvalidResponse(format!(
                "expected a row object, got {other}"
            ))),
        })
        .collect()
}
