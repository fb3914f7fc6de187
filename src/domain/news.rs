use super::table::Record;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One article on the comment ranking page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub rank: u32,
    pub comment_count: u64,
    /// Text of the title node as it appears in the markup, untrimmed.
    pub title: String,
    /// Markup `href` with `https:` prepended, whatever the href looked like.
    pub url: String,
}

/// One comment from an article's comment listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub posted_at: NaiveDateTime,
    pub text: String,
    pub upvotes: u64,
    pub downvotes: u64,
}

impl Record for RankEntry {
    const COLUMNS: &'static [&'static str] = &["rank", "comment_count", "title", "url"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.rank.to_string(),
            self.comment_count.to_string(),
            self.title.clone(),
            self.url.clone(),
        ]
    }
}

impl Record for Comment {
    const COLUMNS: &'static [&'static str] =
        &["author", "posted_at", "text", "upvotes", "downvotes"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.author.clone(),
            self.posted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.text.clone(),
            self.upvotes.to_string(),
            self.downvotes.to_string(),
        ]
    }
}
