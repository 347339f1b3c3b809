use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub name: String,
    pub native_name: String,
    pub alpha3_code: String,
    pub capital: String,
    pub borders: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

#[derive(Deserialize)]
pub struct NameQuery {
    #[serde(rename = "fullText")]
    pub full_text: Option<String>,
}

#[derive(Deserialize)]
pub struct AlphaQuery {
    pub codes: Option<String>,
}

pub type Db = Arc<Vec<Country>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn country(name: &str, native_name: &str, code: &str, capital: &str, borders: &[&str]) -> Country {
    Country {
        name: name.to_string(),
        native_name: native_name.to_string(),
        alpha3_code: code.to_string(),
        capital: capital.to_string(),
        borders: borders.iter().map(|b| b.to_string()).collect(),
    }
}

/// Spain and its neighbours, plus a couple of countries for edge cases.
pub fn fixture_countries() -> Vec<Country> {
    vec![
        country("Spain", "España", "ESP", "Madrid", &["AND", "FRA", "GIB", "PRT", "MAR"]),
        country("Andorra", "Andorra", "AND", "Andorra la Vella", &["FRA", "ESP"]),
        country(
            "France",
            "France",
            "FRA",
            "Paris",
            &["AND", "BEL", "DEU", "ITA", "LUX", "MCO", "ESP", "CHE"],
        ),
        country("Gibraltar", "Gibraltar", "GIB", "Gibraltar", &["ESP"]),
        country("Portugal", "Portugal", "PRT", "Lisbon", &["ESP"]),
        country("Morocco", "المغرب", "MAR", "Rabat", &["DZA", "ESH", "ESP"]),
        country("Iceland", "Ísland", "ISL", "Reykjavik", &[]),
        country("United Kingdom", "United Kingdom", "GBR", "London", &["IRL"]),
        country("Ireland", "Éire", "IRL", "Dublin", &["GBR"]),
    ]
}

pub fn app() -> Router {
    app_with(fixture_countries())
}

pub fn app_with(countries: Vec<Country>) -> Router {
    let db: Db = Arc::new(countries);
    Router::new()
        .route("/rest/v1/name/{name}", get(countries_by_name))
        .route("/rest/v1/alpha", get(countries_by_codes))
        .route("/rest/v1/alpha/{code}", get(country_by_code))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            status: status.as_u16(),
            message: message.to_string(),
        }),
    )
}

async fn countries_by_name(
    State(db): State<Db>,
    Path(name): Path<String>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Vec<Country>> {
    let full_text = query.full_text.as_deref() == Some("true");
    let needle = name.to_lowercase();
    let matches: Vec<Country> = db
        .iter()
        .filter(|c| {
            let haystack = c.name.to_lowercase();
            if full_text {
                haystack == needle
            } else {
                haystack.contains(&needle)
            }
        })
        .cloned()
        .collect();
    debug!("name/{name} fullText={full_text}: {} matches", matches.len());

    if matches.is_empty() {
        return Err(error(StatusCode::NOT_FOUND, "Not Found"));
    }
    Ok(Json(matches))
}

async fn countries_by_codes(
    State(db): State<Db>,
    Query(query): Query<AlphaQuery>,
) -> ApiResult<Vec<Country>> {
    let codes = query.codes.unwrap_or_default();
    if codes.trim().is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Bad Request"));
    }
    let found: Vec<Country> = codes
        .split(';')
        .filter_map(|code| {
            db.iter()
                .find(|c| c.alpha3_code.eq_ignore_ascii_case(code.trim()))
                .cloned()
        })
        .collect();
    debug!("alpha?codes={codes}: {} found", found.len());
    Ok(Json(found))
}

async fn country_by_code(
    State(db): State<Db>,
    Path(code): Path<String>,
) -> ApiResult<Country> {
    db.iter()
        .find(|c| c.alpha3_code.eq_ignore_ascii_case(&code))
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Not Found"))
}
