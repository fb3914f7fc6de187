use super::{attr_required, extract_all, nth_required, parse_selector, RecordShape};
use crate::domain::{RankEntry, ResultTable};
use crate::error::Result;
use crate::utils::{parse_count, parse_rank, text_of};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const HEAD_SELECTOR: &str = ".mduSubjectList";
const TAIL_SELECTOR: &str = ".mduSubject > *";
const RANK_MARKER_SELECTOR: &str = ".mduRank";

/// Boxed top-of-page item: the title sits in a `strong` inside the anchor.
pub struct HeadItem {
    em: Selector,
    anchor: Selector,
    strong: Selector,
}

/// Plain list row: the anchor text is the title.
pub struct TailItem {
    em: Selector,
    anchor: Selector,
}

impl HeadItem {
    pub fn new() -> Result<Self> {
        Ok(Self {
            em: parse_selector("em")?,
            anchor: parse_selector("a")?,
            strong: parse_selector("strong")?,
        })
    }
}

impl TailItem {
    pub fn new() -> Result<Self> {
        Ok(Self {
            em: parse_selector("em")?,
            anchor: parse_selector("a")?,
        })
    }
}

/// First `em` is the rank, second the comment count.
fn rank_and_count(
    record: &'static str,
    element: ElementRef<'_>,
    em: &Selector,
) -> Result<(u32, u64)> {
    let rank = nth_required(record, element, em, "em", 0)?;
    let count = nth_required(record, element, em, "em", 1)?;
    Ok((parse_rank(&text_of(rank))?, parse_count(&text_of(count))?))
}

impl RecordShape for HeadItem {
    type Output = RankEntry;
    const NAME: &'static str = "ranking head";

    fn extract(&self, element: ElementRef<'_>) -> Result<RankEntry> {
        let (rank, comment_count) = rank_and_count(Self::NAME, element, &self.em)?;
        let anchor = nth_required(Self::NAME, element, &self.anchor, "a", 0)?;
        let title = nth_required(Self::NAME, anchor, &self.strong, "strong", 0)?;

        Ok(RankEntry {
            rank,
            comment_count,
            title: text_of(title),
            url: attr_required(Self::NAME, anchor, "href")?.to_string(),
        })
    }
}

impl RecordShape for TailItem {
    type Output = RankEntry;
    const NAME: &'static str = "ranking tail";

    fn extract(&self, element: ElementRef<'_>) -> Result<RankEntry> {
        let (rank, comment_count) = rank_and_count(Self::NAME, element, &self.em)?;
        let anchor = nth_required(Self::NAME, element, &self.anchor, "a", 0)?;

        Ok(RankEntry {
            rank,
            comment_count,
            title: text_of(anchor),
            url: attr_required(Self::NAME, anchor, "href")?.to_string(),
        })
    }
}

/// Extracts every ranked article from a ranking page, head items first.
///
/// Links on the page are scheme-relative (`//news.nate.com/...`), so `https:`
/// is prepended to every href as-is.
pub fn extract_ranking(html: &str) -> Result<ResultTable<RankEntry>> {
    let document = Html::parse_document(html);
    let head_selector = parse_selector(HEAD_SELECTOR)?;
    let tail_selector = parse_selector(TAIL_SELECTOR)?;
    let rank_marker = parse_selector(RANK_MARKER_SELECTOR)?;

    let head = extract_all(&HeadItem::new()?, document.select(&head_selector))?;
    let tail = extract_all(
        &TailItem::new()?,
        document
            .select(&tail_selector)
            .filter(|el| el.select(&rank_marker).next().is_some()),
    )?;
    debug!(
        "Extracted {} head and {} tail ranking items",
        head.len(),
        tail.len()
    );

    let rows = head
        .into_iter()
        .chain(tail)
        .map(|mut entry| {
            entry.url = format!("https:{}", entry.url);
            entry
        })
        .collect();

    Ok(ResultTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsError;

    const FIXTURE: &str = include_str!("../../tests/fixtures/ranking.html");

    #[test]
    fn head_items_precede_tail_items() {
        let table = extract_ranking(FIXTURE).unwrap();
        let ranks: Vec<u32> = table.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
        assert!(table.iter().all(|e| e.url.starts_with("https://")));
    }

    #[test]
    fn head_title_comes_from_strong() {
        let table = extract_ranking(FIXTURE).unwrap();
        let first = &table.rows()[0];
        assert_eq!(first.title, "국회, 추경안 본회의 통과");
        assert_eq!(first.comment_count, 1234);
        assert_eq!(first.url, "https://news.nate.com/view/20220530n31323?mid=n1006");
    }

    #[test]
    fn tail_title_is_anchor_text() {
        let table = extract_ranking(FIXTURE).unwrap();
        let last = table.rows().last().unwrap();
        assert_eq!(last.rank, 6);
        assert_eq!(last.title, " 여섯 번째 기사 ");
        assert_eq!(last.comment_count, 87);
    }

    #[test]
    fn titles_keep_markup_whitespace() {
        let html = r#"
            <div class="mduSubjectList"><em>1</em><em>2</em>
              <a href="//news.nate.com/view/1"><strong> 머리 기사 </strong></a></div>
            <ul class="mduSubject">
              <li><span class="mduRank"><em>2</em></span><em>3</em>
                  <a href="//news.nate.com/view/2">  꼬리 기사</a></li>
            </ul>"#;
        let table = extract_ranking(html).unwrap();
        assert_eq!(table.rows()[0].title, " 머리 기사 ");
        assert_eq!(table.rows()[1].title, "  꼬리 기사");
    }

    #[test]
    fn zero_rank_is_parse_error() {
        let html = r#"
            <div class="mduSubjectList">
              <em>0</em><em>20</em>
              <a href="//news.nate.com/view/1"><strong>제목</strong></a>
            </div>"#;
        assert!(matches!(extract_ranking(html), Err(NewsError::Parse(_))));
    }

    #[test]
    fn unranked_rows_are_ignored() {
        let html = r#"
            <ul class="mduSubject">
              <li class="ad"><a href="//ads.example.com">광고</a></li>
              <li><dl class="mduRank"><dt><em>11</em></dt><dd><em>5</em></dd></dl>
                  <a href="//news.nate.com/view/20220530n1">기사</a></li>
            </ul>"#;
        let table = extract_ranking(html).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].rank, 11);
    }

    #[test]
    fn absolute_href_still_gets_prefix() {
        let html = r#"
            <ul class="mduSubject">
              <li><span class="mduRank"><em>1</em></span><em>2</em>
                  <a href="https://news.nate.com/view/x">기사</a></li>
            </ul>"#;
        let table = extract_ranking(html).unwrap();
        assert_eq!(table.rows()[0].url, "https:https://news.nate.com/view/x");
    }

    #[test]
    fn missing_count_em_is_structure_error() {
        let html = r#"
            <div class="mduSubjectList">
              <em>1</em>
              <a href="//news.nate.com/view/1"><strong>제목</strong></a>
            </div>"#;
        let err = extract_ranking(html).unwrap_err();
        assert!(matches!(err, NewsError::Structure { record: "ranking head", .. }));
    }

    #[test]
    fn head_without_strong_is_structure_error() {
        let html = r#"
            <div class="mduSubjectList">
              <em>1</em><em>20</em>
              <a href="//news.nate.com/view/1">제목</a>
            </div>"#;
        let err = extract_ranking(html).unwrap_err();
        assert!(matches!(err, NewsError::Structure { .. }));
    }

    #[test]
    fn non_numeric_rank_is_parse_error() {
        let html = r#"
            <div class="mduSubjectList">
              <em>first</em><em>20</em>
              <a href="//news.nate.com/view/1"><strong>제목</strong></a>
            </div>"#;
        assert!(matches!(extract_ranking(html), Err(NewsError::Parse(_))));
    }

    #[test]
    fn page_without_items_is_empty() {
        let table = extract_ranking("<html><body><p>점검 중</p></body></html>").unwrap();
        assert!(table.is_empty());
    }
}
