//! Scrapes Nate News comment rankings and per-article comment listings into
//! tables.
//!
//! ```no_run
//! # async fn demo() -> natenews::Result<()> {
//! let ranking = natenews::get_ranking("20220530", false).await?;
//! for entry in &ranking {
//!     println!("{} {} {}", entry.rank, entry.comment_count, entry.title);
//! }
//!
//! let comments =
//!     natenews::get_comments("https://news.nate.com/view/20220530n31323?mid=n1006", 1).await?;
//! println!("{comments}");
//! # Ok(()) }
//! ```

pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod scrapers;
pub mod services;
pub mod utils;

pub use config::{CommentQuery, NateConfig};
pub use domain::{ArticleRef, Comment, RankEntry, RankingPeriod, Record, ResultTable};
pub use error::{NewsError, Result};
pub use services::NewsService;

/// [`NewsService::get_ranking`] with the default configuration.
pub async fn get_ranking(date: &str, weekly: bool) -> Result<ResultTable<RankEntry>> {
    NewsService::from_config(NateConfig::default())?
        .get_ranking(date, weekly)
        .await
}

/// [`NewsService::get_comments`] with the default configuration.
pub async fn get_comments(article_url: &str, page: u32) -> Result<ResultTable<Comment>> {
    NewsService::from_config(NateConfig::default())?
        .get_comments(article_url, page)
        .await
}
