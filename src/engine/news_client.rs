use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::config::{NewsConfig, Secret, NEWS_KEY_ENV};
use crate::engine::error::NewsError;
use crate::model::headline::Headline;

/// A keyword search returning recent headlines.
pub trait NewsSource: Send {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Headline>, NewsError>;
}

#[derive(Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
}

/// Decode a news search body, keeping at most `limit` titled articles.
pub fn decode_articles(body: &str, limit: usize) -> Result<Vec<Headline>, NewsError> {
    let resp: NewsResponse = serde_json::from_str(body)?;

    Ok(resp
        .articles
        .into_iter()
        .filter_map(|a| {
            let title = trimmed(a.title).filter(|t| !t.is_empty())?;
            Some(Headline {
                title,
                description: trimmed(a.description).unwrap_or_default(),
            })
        })
        .take(limit)
        .collect())
}

fn trimmed(field: Option<String>) -> Option<String> {
    field.map(|s| s.trim().to_string())
}

/// Client for a NewsAPI-style `everything` endpoint.
pub struct NewsApiClient {
    http: Client,
    base_url: String,
    sort_by: String,
    api_key: Option<Secret>,
    timeout: Duration,
}

impl NewsApiClient {
    pub fn from_config(config: &NewsConfig) -> Result<Self, NewsError> {
        let timeout = config.timeout();
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            sort_by: config.sort_by.clone(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    fn search_url(&self, query: &str) -> Result<Url, NewsError> {
        let params = [("q", query), ("sortBy", self.sort_by.as_str())];
        Url::parse_with_params(&self.base_url, &params)
            .map_err(|e| NewsError::Network(format!("bad news url: {e}")))
    }
}

impl NewsSource for NewsApiClient {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<Headline>, NewsError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(NewsError::MissingCredential(NEWS_KEY_ENV))?;

        let url = self.search_url(query)?;
        debug!("search: GET {} limit={}", url, limit);

        let resp = self
            .http
            .get(url)
            .header("X-Api-Key", api_key.expose())
            .send()
            .map_err(|e| NewsError::from_transport(e, self.timeout))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NewsError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| NewsError::from_transport(e, self.timeout))?;
        decode_articles(&body, limit)
    }
}

/// Best effort: any failure is logged and becomes an empty list.
pub fn fetch_headlines(source: &dyn NewsSource, query: &str, limit: usize) -> Vec<Headline> {
    match source.search(query, limit) {
        Ok(mut headlines) => {
            headlines.truncate(limit);
            headlines
        }
        Err(e) => {
            warn!("Headlines unavailable: {}", e);
            Vec::new()
        }
    }
}
