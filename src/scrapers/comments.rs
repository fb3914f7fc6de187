use super::{extract_all, nth_required, parse_selector, RecordShape};
use crate::domain::{ArticleRef, Comment, ResultTable};
use crate::error::{NewsError, Result};
use crate::utils::{parse_count, skip_chars, text_of};
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const ITEM_SELECTOR: &str = ".cmt_item";
const DATE_FORMAT: &str = "%Y %m.%d %H:%M";
/// Separator in front of the date text, e.g. `| `.
const DATE_PREFIX_CHARS: usize = 2;

/// A single `.cmt_item`. The listing omits the year, so it is supplied from
/// the article identifier.
pub struct CommentItem {
    year: i32,
    name: Selector,
    date: Selector,
    text: Selector,
    votes: Selector,
}

impl CommentItem {
    pub fn new(year: i32) -> Result<Self> {
        Ok(Self {
            year,
            name: parse_selector(".nameui")?,
            date: parse_selector(".date")?,
            text: parse_selector(".usertxt")?,
            votes: parse_selector(".upDown > .line > strong")?,
        })
    }

    fn posted_at(&self, date_text: &str) -> Result<NaiveDateTime> {
        let stamp = format!("{} {}", self.year, skip_chars(date_text, DATE_PREFIX_CHARS).trim());
        NaiveDateTime::parse_from_str(&stamp, DATE_FORMAT)
            .map_err(|e| NewsError::Parse(format!("comment date {date_text:?}: {e}")))
    }
}

impl RecordShape for CommentItem {
    type Output = Comment;
    const NAME: &'static str = "comment";

    fn extract(&self, element: ElementRef<'_>) -> Result<Comment> {
        let author = nth_required(Self::NAME, element, &self.name, ".nameui", 0)?;
        let date = nth_required(Self::NAME, element, &self.date, ".date", 0)?;
        let text = nth_required(Self::NAME, element, &self.text, ".usertxt", 0)?;

        let votes: Vec<ElementRef<'_>> = element.select(&self.votes).collect();
        let [up, down] = votes.as_slice() else {
            return Err(NewsError::missing(
                Self::NAME,
                format!("exactly 2 vote counts (found {})", votes.len()),
            ));
        };

        Ok(Comment {
            author: text_of(author).trim_end().to_string(),
            posted_at: self.posted_at(&text_of(date))?,
            text: text_of(text).trim().to_string(),
            upvotes: parse_count(&text_of(*up))?,
            downvotes: parse_count(&text_of(*down))?,
        })
    }
}

/// Extracts every comment on one listing page, in document order.
///
/// `artc_sq` must start with the article's 4-digit publication year.
pub fn extract_comments(html: &str, artc_sq: &str) -> Result<ResultTable<Comment>> {
    let year = ArticleRef::year_of(artc_sq)?;
    let document = Html::parse_document(html);
    let items = parse_selector(ITEM_SELECTOR)?;

    let comments = extract_all(&CommentItem::new(year)?, document.select(&items))?;
    debug!("Extracted {} comments for {}", comments.len(), artc_sq);

    Ok(ResultTable::new(comments))
}
