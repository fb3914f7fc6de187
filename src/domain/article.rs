use crate::error::{NewsError, Result};
use percent_encoding::percent_decode_str;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregation window of the comment ranking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPeriod {
    Day,
    Week,
}

impl RankingPeriod {
    pub fn from_weekly(weekly: bool) -> Self {
        if weekly {
            Self::Week
        } else {
            Self::Day
        }
    }

    /// Value of the `p` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for RankingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of an article URL needed to query its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    /// Last path segment, e.g. `20220530n31323`.
    pub artc_sq: String,
    /// Section/board id from the `mid` query parameter, e.g. `n1006`.
    pub mid: String,
}

impl ArticleRef {
    pub fn from_url(article_url: &str) -> Result<Self> {
        let url = Url::parse(article_url).map_err(|e| {
            NewsError::MalformedInput(format!("invalid article URL {article_url}: {e}"))
        })?;

        let segment = url.path().rsplit('/').next().unwrap_or_default();
        let artc_sq = percent_decode_str(segment)
            .decode_utf8()
            .map_err(|e| {
                NewsError::MalformedInput(format!("article identifier in {article_url}: {e}"))
            })?
            .into_owned();
        if artc_sq.is_empty() {
            return Err(NewsError::MalformedInput(format!(
                "no article identifier in path of {article_url}"
            )));
        }

        let mid = url
            .query_pairs()
            .find(|(key, value)| key == "mid" && !value.is_empty())
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| {
                NewsError::MalformedInput(format!("missing mid query parameter in {article_url}"))
            })?;

        Ok(Self { artc_sq, mid })
    }

    /// Publication year, taken from the first four characters of `artc_sq`.
    pub fn year(&self) -> Result<i32> {
        Self::year_of(&self.artc_sq)
    }

    pub fn year_of(artc_sq: &str) -> Result<i32> {
        let prefix = artc_sq.get(..4).unwrap_or_default();
        if prefix.len() != 4 || !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NewsError::Parse(format!(
                "article identifier {artc_sq} does not start with a 4-digit year"
            )));
        }
        prefix
            .parse()
            .map_err(|_| NewsError::Parse(format!("bad year prefix in {artc_sq}")))
    }
}
