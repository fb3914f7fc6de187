use crate::config::NateConfig;
use crate::domain::{ArticleRef, RankingPeriod};
use crate::error::{NewsError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info};

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").unwrap());

/// Fetches raw ranking and comment pages from Nate News.
#[derive(Debug, Clone)]
pub struct NateClient {
    client: Client,
    config: NateConfig,
}

impl NateClient {
    pub fn new(client: Client, config: NateConfig) -> Self {
        Self { client, config }
    }

    pub fn from_config(config: NateConfig) -> Result<Self> {
        let client = config.http_client()?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &NateConfig {
        &self.config
    }

    /// `{ranking_url}?sc=&p={day|week}&date={yyyymmdd}`
    pub fn ranking_url(&self, date: &str, period: RankingPeriod) -> Result<Url> {
        if !DATE_REGEX.is_match(date) {
            return Err(NewsError::MalformedInput(format!(
                "ranking date {date:?} is not yyyymmdd"
            )));
        }
        endpoint(
            &self.config.ranking_url,
            [("sc", ""), ("p", period.as_str()), ("date", date)],
        )
    }

    pub fn comment_url(&self, article: &ArticleRef, page: u32) -> Result<Url> {
        if page == 0 {
            return Err(NewsError::MalformedInput(
                "comment pages start at 1".to_string(),
            ));
        }
        let pairs = self.config.comment_query.pairs(article, page);
        endpoint(
            &self.config.comment_url,
            pairs.iter().map(|(k, v)| (*k, v.as_str())),
        )
    }

    pub async fn fetch_ranking_page(
        &self,
        date: &str,
        period: RankingPeriod,
        timeout: Option<Duration>,
    ) -> Result<String> {
        let url = self.ranking_url(date, period)?;
        self.get_text(url, timeout).await
    }

    pub async fn fetch_comment_page(
        &self,
        article: &ArticleRef,
        page: u32,
        timeout: Option<Duration>,
    ) -> Result<String> {
        let url = self.comment_url(article, page)?;
        self.get_text(url, timeout).await
    }

    async fn get_text(&self, url: Url, timeout: Option<Duration>) -> Result<String> {
        debug!("GET {url}");
        let mut request = self.client.get(url.clone());
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let body = request.send().await?.error_for_status()?.text().await?;
        info!("Fetched {url} ({} bytes)", body.len());
        Ok(body)
    }
}

fn endpoint<'a, I>(base: &str, pairs: I) -> Result<Url>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    Url::parse_with_params(base, pairs)
        .map_err(|e| NewsError::MalformedInput(format!("invalid endpoint {base}: {e}")))
}
