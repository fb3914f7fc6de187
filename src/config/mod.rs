use crate::config::cli::Args;
use crate::domain::ArticleRef;
use crate::error::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod cli;

pub const RANKING_URL: &str = "https://news.nate.com/rank/cmt";
pub const COMMENT_URL: &str = "https://comm.news.nate.com/Comment/ArticleComment/List";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Endpoints and HTTP settings shared by both scrapers.
#[derive(Debug, Clone)]
pub struct NateConfig {
    pub ranking_url: String,
    pub comment_url: String,
    pub user_agent: String,
    /// Client-wide timeout; a per-request timeout overrides it.
    pub timeout: Duration,
    pub comment_query: CommentQuery,
}

impl Default for NateConfig {
    fn default() -> Self {
        Self {
            ranking_url: RANKING_URL.to_string(),
            comment_url: COMMENT_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            comment_query: CommentQuery::default(),
        }
    }
}

impl NateConfig {
    /// Defaults overridden by whatever endpoints were given on the command line.
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self::default();
        if let Some(url) = &args.ranking_url {
            config.ranking_url = url.clone();
        }
        if let Some(url) = &args.comment_url {
            config.comment_url = url.clone();
        }
        config
    }

    pub fn http_client(&self) -> Result<Client> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}

/// Fixed parameters of the comment listing endpoint.
///
/// The defaults reproduce the portal's own first-load request: no ordering,
/// no filters and an unauthenticated session. Only the article, board and
/// page change between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentQuery {
    /// Sort order (`order`); empty keeps the portal default.
    pub order: String,
    /// Commenter filter flag (`cmtr_fl`).
    pub commenter_filter: u8,
    /// Whether best comments are pinned ahead of the list (`prebest`).
    pub prebest: u8,
    /// Cleanbot filtering level (`clean_idx`); empty disables it.
    pub clean_idx: String,
    /// Restricts the list to a single user's comments (`user_nm`).
    pub user_name: String,
    /// Folded-thread selector (`fold`).
    pub fold: String,
    /// Originating domain (`domain`).
    pub domain: String,
    /// Extra argument list flag (`argList`).
    pub arg_list: u8,
    /// Best comments only (`best`).
    pub best: u8,
    /// Comment to scroll back to (`return_sq`).
    pub return_sq: String,
    /// Sends `connectAuth=Y` when set.
    pub connect_auth: bool,
}

impl CommentQuery {
    /// Query pairs in the order the portal sends them.
    pub fn pairs(&self, article: &ArticleRef, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("artc_sq", article.artc_sq.clone()),
            ("order", self.order.clone()),
            ("cmtr_fl", self.commenter_filter.to_string()),
            ("prebest", self.prebest.to_string()),
            ("clean_idx", self.clean_idx.clone()),
            ("user_nm", self.user_name.clone()),
            ("fold", self.fold.clone()),
            ("mid", article.mid.clone()),
            ("domain", self.domain.clone()),
            ("argList", self.arg_list.to_string()),
            ("best", self.best.to_string()),
            ("return_sq", self.return_sq.clone()),
            ("connectAuth", if self.connect_auth { "Y" } else { "N" }.to_string()),
            ("page", page.to_string()),
        ]
    }
}
