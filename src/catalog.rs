// src/catalog.rs — vehicle makes/models from the NHTSA vPIC registry
//
// Type -> makes -> models. Both lookups go over gloo-net; the payload parsing is kept
// separate so it can be exercised without a browser.

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::booking::VehicleType;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("registry answered HTTP {0}")]
    Status(u16),
    #[error("bad registry payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct VpicResponse<T> {
    #[serde(rename = "Results", default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Deserialize)]
struct MakeRow {
    #[serde(rename = "MakeName", default)]
    make_name: Option<String>,
}

#[derive(Deserialize)]
struct ModelRow {
    #[serde(rename = "Model_Name", default)]
    model_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VpicCatalog {
    base: String,
}

impl VpicCatalog {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn makes_url(&self, kind: VehicleType) -> String {
        format!(
            "{}/GetMakesForVehicleType/{}?format=json",
            self.base.trim_end_matches('/'),
            kind.key()
        )
    }

    pub fn models_url(&self, make: &str) -> String {
        format!(
            "{}/GetModelsForMake/{}?format=json",
            self.base.trim_end_matches('/'),
            urlencoding::encode(make)
        )
    }

    pub async fn makes_for(&self, kind: VehicleType) -> Result<Vec<String>, CatalogError> {
        let body = fetch_text(&self.makes_url(kind)).await?;
        parse_makes(&body)
    }

    pub async fn models_for(&self, make: &str) -> Result<Vec<String>, CatalogError> {
        let body = fetch_text(&self.models_url(make)).await?;
        parse_models(&body)
    }
}

async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(CatalogError::Status(resp.status()));
    }
    resp.text()
        .await
        .map_err(|e| CatalogError::Request(e.to_string()))
}

pub fn parse_makes(body: &str) -> Result<Vec<String>, CatalogError> {
    let resp: VpicResponse<MakeRow> = serde_json::from_str(body)?;
    Ok(tidy(resp.results.into_iter().filter_map(|r| r.make_name)))
}

pub fn parse_models(body: &str) -> Result<Vec<String>, CatalogError> {
    let resp: VpicResponse<ModelRow> = serde_json::from_str(body)?;
    Ok(tidy(resp.results.into_iter().filter_map(|r| r.model_name)))
}

// blank names out, case-insensitive order, no repeats
fn tidy(names: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = names
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    out.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_registry_urls() {
        let cat = VpicCatalog::new("https://vpic.nhtsa.dot.gov/api/vehicles/");
        assert_eq!(
            cat.makes_url(VehicleType::Truck),
            "https://vpic.nhtsa.dot.gov/api/vehicles/GetMakesForVehicleType/truck?format=json"
        );
        assert_eq!(
            cat.models_url("ALFA ROMEO"),
            "https://vpic.nhtsa.dot.gov/api/vehicles/GetModelsForMake/ALFA%20ROMEO?format=json"
        );
        assert_eq!(
            cat.models_url("A&B"),
            "https://vpic.nhtsa.dot.gov/api/vehicles/GetModelsForMake/A%26B?format=json"
        );
    }

    #[test]
    fn parses_and_sorts_makes() {
        let body = r#"{
            "Count": 4,
            "Message": "Response returned successfully",
            "Results": [
                {"MakeId": 474, "MakeName": "HONDA", "VehicleTypeId": 2},
                {"MakeId": 460, "MakeName": "FORD", "VehicleTypeId": 2},
                {"MakeId": 1, "MakeName": "  ", "VehicleTypeId": 2},
                {"MakeId": 2, "VehicleTypeId": 2},
                {"MakeId": 448, "MakeName": "acura", "VehicleTypeId": 2}
            ]
        }"#;
        let makes = parse_makes(body).unwrap();
        assert_eq!(makes, vec!["acura", "FORD", "HONDA"]);
    }

    #[test]
    fn parses_models_and_drops_repeats() {
        let body = r#"{"Results": [
            {"Make_Name": "FORD", "Model_Name": "Mustang"},
            {"Make_Name": "FORD", "Model_Name": "F-150"},
            {"Make_Name": "FORD", "Model_Name": "Mustang"},
            {"Make_Name": "FORD", "Model_Name": "Escape"}
        ]}"#;
        let models = parse_models(body).unwrap();
        assert_eq!(models, vec!["Escape", "F-150", "Mustang"]);
    }

    #[test]
    fn missing_results_is_an_empty_list() {
        assert!(parse_makes(r#"{"Count": 0}"#).unwrap().is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = parse_models("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("bad registry payload"));
    }
}
