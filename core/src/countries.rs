//! Binding of the generic client to the REST Countries service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{join_values, Resource};
use crate::transport::{ReqwestTransport, Transport};

/// Public REST Countries endpoint.
pub const COUNTRIES_BASE_URL: &str = "https://restcountries.eu/rest/v1";

/// A country as returned by the API. Other fields in the payload are
/// ignored; the three below are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    #[serde(rename = "nativeName")]
    pub native_name: String,
    /// Alpha-3 codes of the bordering countries.
    pub borders: Vec<String>,
}

/// Endpoints of the countries API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesApi {
    /// Exact match on the full country name.
    Name(String),
    /// Batch lookup by alpha-3 codes.
    AlphaCodes(Vec<String>),
}

impl Resource for CountriesApi {
    fn path(&self) -> String {
        match self {
            CountriesApi::Name(name) => format!("name/{name}"),
            CountriesApi::AlphaCodes(_) => "alpha".to_string(),
        }
    }

    fn parameters(&self) -> BTreeMap<String, String> {
        match self {
            CountriesApi::Name(_) => BTreeMap::from([("fullText".to_string(), "true".to_string())]),
            CountriesApi::AlphaCodes(codes) => {
                BTreeMap::from([("codes".to_string(), join_values(codes))])
            }
        }
    }
}

/// Typed operations on the countries API.
#[derive(Debug, Clone)]
pub struct CountriesClient<T> {
    api: ApiClient<T>,
}

/// A client for the public countries API over reqwest.
pub fn countries_client() -> Result<CountriesClient<ReqwestTransport>, ApiError> {
    CountriesClient::parse(COUNTRIES_BASE_URL, ReqwestTransport::new())
}

impl<T: Transport> CountriesClient<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    pub fn parse(base_url: &str, transport: T) -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::parse(base_url, transport)?))
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// The country whose full name is `name`.
    ///
    /// The API answers with a list; the first entry wins. An empty list is
    /// `ApiError::NotFound`.
    pub async fn country_with_name(&self, name: &str) -> Result<Country, ApiError> {
        let countries: Vec<Country> = self
            .api
            .objects(&CountriesApi::Name(name.to_string()))
            .await?;
        countries
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    /// The countries with the given alpha-3 codes, in the order the API
    /// returns them. No request is made for an empty list.
    pub async fn countries_with_codes(&self, codes: &[String]) -> Result<Vec<Country>, ApiError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        self.api
            .objects(&CountriesApi::AlphaCodes(codes.to_vec()))
            .await
    }
}
