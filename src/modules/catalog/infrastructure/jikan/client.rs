use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::modules::catalog::application::outcome::ResultSet;
use crate::modules::catalog::application::ports::CatalogProvider;
use crate::modules::catalog::domain::{CatalogQuery, GenreFilter, SeasonFilter};
use crate::shared::{
    errors::{AppError, AppResult},
    utils::RateLimiter,
};

use super::{dto::JikanAnimeListResponse, mapper::JikanMapper};

const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";
const BASE_URL_ENV: &str = "JIKAN_BASE_URL";
const USER_AGENT: &str = "Sagasu-Anime-App/1.0";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Category endpoints request exactly one grid's worth of items.
const CATEGORY_LIMIT: usize = 12;

pub struct JikanClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl JikanClient {
    pub fn new() -> AppResult<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            rate_limiter: RateLimiter::new(3.0), // 3 requests per second (official Jikan limit)
        })
    }

    pub async fn search_anime(&self, text: &str, page: u32) -> AppResult<ResultSet> {
        let url = format!(
            "{}/anime?q={}&page={}",
            self.base_url,
            urlencoding::encode(text.trim()),
            page
        );
        let response = self.fetch_list(&url).await?;
        Ok(JikanMapper::to_result_set(response, true))
    }

    pub async fn top_anime(&self) -> AppResult<ResultSet> {
        let url = format!("{}/top/anime?limit={}", self.base_url, CATEGORY_LIMIT);
        let response = self.fetch_list(&url).await?;
        Ok(JikanMapper::to_result_set(response, false))
    }

    pub async fn airing_now(&self) -> AppResult<ResultSet> {
        let url = format!("{}/seasons/now?limit={}", self.base_url, CATEGORY_LIMIT);
        let response = self.fetch_list(&url).await?;
        Ok(JikanMapper::to_result_set(response, false))
    }

    pub async fn seasonal_anime(&self, filter: &SeasonFilter) -> AppResult<ResultSet> {
        let url = format!(
            "{}/seasons/{}/{}?limit={}",
            self.base_url,
            filter.year,
            filter.season.api_slug(),
            CATEGORY_LIMIT
        );
        let response = self.fetch_list(&url).await?;
        Ok(JikanMapper::to_result_set(response, false))
    }

    pub async fn genre_anime(&self, filter: &GenreFilter) -> AppResult<ResultSet> {
        let url = format!(
            "{}/anime?genres={}&limit={}",
            self.base_url, filter.mal_id, CATEGORY_LIMIT
        );
        let response = self.fetch_list(&url).await?;
        Ok(JikanMapper::to_result_set(response, false))
    }

    async fn fetch_list(&self, url: &str) -> AppResult<JikanAnimeListResponse> {
        self.rate_limiter.acquire().await;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;

        response
            .json::<JikanAnimeListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))
    }
}

#[async_trait]
impl CatalogProvider for JikanClient {
    async fn fetch(&self, query: &CatalogQuery) -> AppResult<ResultSet> {
        match query {
            CatalogQuery::Search { text, page } => self.search_anime(text, *page).await,
            CatalogQuery::Top => self.top_anime().await,
            CatalogQuery::Airing => self.airing_now().await,
            CatalogQuery::Season(filter) => self.seasonal_anime(filter).await,
            CatalogQuery::Genre(filter) => self.genre_anime(filter).await,
        }
    }
}
