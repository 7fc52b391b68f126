use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

use crate::error::CatalogError;

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
}

impl MovieSummary {
    /// Full poster URL, if the catalog has a poster for this movie
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", POSTER_BASE_URL, p))
    }

    /// Release year parsed from `release_date` ("YYYY-MM-DD")
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// One page of catalog results.
///
/// TMDB signals logical failures with `success: false` and a
/// `status_message`; successful pages omit both.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
}

impl CatalogPage {
    pub fn into_result(self) -> Result<Vec<MovieSummary>, CatalogError> {
        if self.success == Some(false) {
            return Err(CatalogError::Api {
                message: self.status_message.filter(|m| !m.trim().is_empty()),
            });
        }
        Ok(self.results)
    }
}

/// Which catalog listing a term maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    /// Default listing, most popular first
    Discover,
    /// Free-text title search
    Search(String),
}

impl CatalogQuery {
    /// Blank terms (after trimming) fall back to the discover listing
    pub fn from_term(term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            CatalogQuery::Discover
        } else {
            CatalogQuery::Search(term.to_string())
        }
    }

    /// Path and query string relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            CatalogQuery::Discover => "/discover/movie?sort_by=popularity.desc".to_string(),
            CatalogQuery::Search(term) => {
                format!("/search/movie?query={}", urlencoding::encode(term))
            }
        }
    }
}

#[derive(Clone)]
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl TmdbClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    /// Fetch the listing for a (possibly empty) search term
    pub async fn fetch_movies(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        self.fetch(&CatalogQuery::from_term(term)).await
    }

    pub async fn fetch(&self, query: &CatalogQuery) -> Result<Vec<MovieSummary>, CatalogError> {
        let url = format!("{}{}", self.base_url, query.path());
        tracing::debug!(%url, "fetching movies");

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status });
        }

        let text = response.text().await?;
        let page: CatalogPage = serde_json::from_str(&text)?;

        page.into_result()
    }
}
