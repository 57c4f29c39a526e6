use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use kepler_mast_client::MastClient;
use kepler_mast_client::error::MastError;
use kepler_mast_client::mast::params::SearchParams;
use kepler_mast_client::mast::table::SearchTable;
use kepler_mast_client::mast::transport::{HttpResponse, Transport};

const BASE_URL: &str = "http://archive.test/kepler";

/// Serves one canned response and records the URLs it was asked for.
struct CannedTransport {
    status: u16,
    body: String,
    seen: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Transport for CannedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, MastError> {
        self.seen.lock().unwrap().push(url.to_string());
        Ok(HttpResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn canned_client(status: u16, body: &str) -> (MastClient, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(vec![]));
    let transport = CannedTransport {
        status,
        body: body.to_string(),
        seen: Arc::clone(&seen),
    };
    (MastClient::with_transport(BASE_URL, Box::new(transport)), seen)
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (client, _) = canned_client(404, "Not Found");

    let err = client
        .request(SearchTable::Koi, &SearchParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_body_means_no_matching_records() {
    let (client, _) = canned_client(200, "no rows found");

    let response = client
        .request(SearchTable::ConfirmedPlanets, &SearchParams::new())
        .await
        .unwrap();
    assert!(response.is_none());

    let kois = client.kois(SearchParams::new()).await.unwrap();
    assert!(kois.is_empty());
}

#[tokio::test]
async fn json_null_body_means_no_matching_records() {
    let (client, _) = canned_client(200, "null");

    let response = client
        .request(SearchTable::Koi, &SearchParams::new())
        .await
        .unwrap();
    assert!(response.is_none());

    let kois = client.kois(SearchParams::new()).await.unwrap();
    assert!(kois.is_empty());

    let rows = client.data("12345678").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn kois_maps_each_row_to_a_candidate() {
    let body = json!([
        {
            "Kepler ID": "11446443",
            "KOI Name": "K00001.01",
            "KOI Number": "1.01",
            "Period": "2.470613",
            "Kepler Disposition": "CANDIDATE",
        },
        {
            "Kepler ID": "10666592",
            "KOI Name": "K00002.01",
            "KOI Number": "2.01",
            "Period": "2.204735",
            "Kepler Disposition": "CANDIDATE",
        },
    ]);
    let (client, seen) = canned_client(200, &body.to_string());

    let mut params = SearchParams::new();
    params.set("max_records", 2);
    let kois = client.kois(params).await.unwrap();

    assert_eq!(kois.len(), 2);
    assert_eq!(kois[0].get("kepid").unwrap().as_i64(), Some(11446443));
    assert_eq!(kois[0].get("koi_period").unwrap().as_f64(), Some(2.470613));
    assert_eq!(kois[0].to_string(), "<KOI(1.01)>");
    assert_eq!(kois[1].to_string(), "<KOI(2.01)>");

    // Caller's max_records wins; ordering and output format are forced.
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0],
        format!(
            "{BASE_URL}/koi/search.php?action=Search&coordformat=dec&max_records=2\
             &ordercolumn1=kepoi&outputformat=JSON&verb=3"
        )
    );
}

#[tokio::test]
async fn kois_forces_default_page_size() {
    let (client, seen) = canned_client(200, "[]");

    client.kois(SearchParams::new()).await.unwrap();

    let seen = seen.lock().unwrap();
    assert!(seen[0].contains("max_records=100"));
    assert!(seen[0].contains("ordercolumn1=kepoi"));
}

#[tokio::test]
async fn planets_empty_array_is_an_empty_list() {
    let (client, seen) = canned_client(200, "[]");

    let planets = client.planets(SearchParams::new()).await.unwrap();
    assert!(planets.is_empty());

    let seen = seen.lock().unwrap();
    assert!(seen[0].starts_with(&format!("{BASE_URL}/confirmed_planets/search.php?")));
}

#[tokio::test]
async fn planets_maps_rows_to_confirmed_entries() {
    let body = json!([
        {
            "Planet Name": "Kepler-2 b",
            "Kepler ID": "10666592",
            "KOI Number": "2.01",
            "Planet Radius": "16.39",
        },
    ]);
    let (client, _) = canned_client(200, &body.to_string());

    let planets = client.planets(SearchParams::new()).await.unwrap();

    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].get("koi_prad").unwrap().as_f64(), Some(16.39));
    assert_eq!(planets[0].to_string(), "<Planet(\"Kepler-2 b\")>");
}

#[tokio::test]
async fn data_with_null_body_yields_empty_list() {
    let (client, seen) = canned_client(200, "");

    let rows = client.data("12345678").await.unwrap();
    assert!(rows.is_empty());

    let seen = seen.lock().unwrap();
    assert!(seen[0].starts_with(&format!("{BASE_URL}/data_search/search.php?")));
    assert!(seen[0].contains("ktc_kepler_id=12345678"));
}

#[tokio::test]
async fn data_rows_stay_raw() {
    let body = json!([
        {"Dataset Name": "KPLR012345678-2009131105131", "Quarter": "1"},
        {"Dataset Name": "KPLR012345678-2009166043257", "Quarter": "2"},
    ]);
    let (client, _) = canned_client(200, &body.to_string());

    let rows = client.data("12345678").await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].get("Dataset Name").and_then(|v| v.as_str()),
        Some("KPLR012345678-2009131105131")
    );
}

#[tokio::test]
async fn unrecognized_wire_field_rejects_the_row() {
    let body = json!([
        {"KOI Number": "1.01", "Brand New Column": "surprise"},
    ]);
    let (client, _) = canned_client(200, &body.to_string());

    let err = client.kois(SearchParams::new()).await.unwrap_err();

    match err {
        MastError::UnrecognizedFields { model, fields } => {
            assert_eq!(model, "KOI");
            assert_eq!(fields, vec!["Brand New Column".to_string()]);
        }
        other => panic!("expected UnrecognizedFields, got {other:?}"),
    }
}
