//! Borders of one country, ready for display.
//!
//! # Design
//! `BordersViewModel` chains two lookups: the country by name, then its
//! neighbours by alpha code in a single batch. Failures never reach the
//! consumer; they are logged and the result degrades to an empty list.
//!
//! The result lives in a `tokio::sync::OnceCell`. Concurrent callers of
//! `borders` share one execution and later callers get the cached value. If
//! every caller is dropped mid-flight the work is cancelled with them and
//! the next caller starts over.

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::countries::{Country, CountriesClient};
use crate::error::ApiError;
use crate::transport::Transport;

/// Display projection of a `Country`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Border {
    pub name: String,
    pub native_name: String,
}

impl From<Country> for Border {
    fn from(country: Country) -> Self {
        Self {
            name: country.name,
            native_name: country.native_name,
        }
    }
}

pub struct BordersViewModel<T> {
    country_name: String,
    client: Arc<CountriesClient<T>>,
    borders: OnceCell<Vec<Border>>,
}

impl<T: Transport> BordersViewModel<T> {
    pub fn new(country_name: impl Into<String>, client: Arc<CountriesClient<T>>) -> Self {
        Self {
            country_name: country_name.into(),
            client,
            borders: OnceCell::new(),
        }
    }

    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    /// The borders of `country_name`, fetched at most once.
    ///
    /// Empty when the country has no borders or when any request failed.
    pub async fn borders(&self) -> &[Border] {
        self.borders
            .get_or_init(|| async {
                match self.fetch_borders().await {
                    Ok(borders) => borders,
                    Err(e) => {
                        warn!("borders of {:?} unavailable: {e}", self.country_name);
                        Vec::new()
                    }
                }
            })
            .await
    }

    async fn fetch_borders(&self) -> Result<Vec<Border>, ApiError> {
        let country = self.client.country_with_name(&self.country_name).await?;
        debug!(
            "{} borders {} countries",
            country.name,
            country.borders.len()
        );
        let neighbours = self.client.countries_with_codes(&country.borders).await?;
        Ok(neighbours.into_iter().map(Border::from).collect())
    }
}
