use crate::clients::NateClient;
use crate::config::NateConfig;
use crate::domain::{ArticleRef, Comment, RankEntry, RankingPeriod, ResultTable};
use crate::error::Result;
use crate::scrapers::{extract_comments, extract_ranking};
use std::time::Duration;
use tracing::info;

/// Fetch, extract and assemble in one call. Holds no state between calls.
pub struct NewsService {
    client: NateClient,
}

impl NewsService {
    pub fn new(client: NateClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: NateConfig) -> Result<Self> {
        Ok(Self::new(NateClient::from_config(config)?))
    }

    /// Comment ranking for `date` (`yyyymmdd`), daily or weekly.
    pub async fn get_ranking(&self, date: &str, weekly: bool) -> Result<ResultTable<RankEntry>> {
        self.get_ranking_with_timeout(date, weekly, None).await
    }

    pub async fn get_ranking_with_timeout(
        &self,
        date: &str,
        weekly: bool,
        timeout: Option<Duration>,
    ) -> Result<ResultTable<RankEntry>> {
        let period = RankingPeriod::from_weekly(weekly);
        let html = self
            .client
            .fetch_ranking_page(date, period, timeout)
            .await?;

        let table = extract_ranking(&html)?;
        info!("Ranking {date} ({period}): {} articles", table.len());
        Ok(table)
    }

    /// One page of comments for the article at `article_url`.
    ///
    /// The URL must carry a `mid` query parameter; it is checked before any
    /// request is made.
    pub async fn get_comments(&self, article_url: &str, page: u32) -> Result<ResultTable<Comment>> {
        self.get_comments_with_timeout(article_url, page, None).await
    }

    pub async fn get_comments_with_timeout(
        &self,
        article_url: &str,
        page: u32,
        timeout: Option<Duration>,
    ) -> Result<ResultTable<Comment>> {
        let article = ArticleRef::from_url(article_url)?;
        let html = self
            .client
            .fetch_comment_page(&article, page, timeout)
            .await?;

        let table = extract_comments(&html, &article.artc_sq)?;
        info!(
            "Comments {} page {page}: {} comments",
            article.artc_sq,
            table.len()
        );
        Ok(table)
    }
}
