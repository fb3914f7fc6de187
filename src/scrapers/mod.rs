use crate::error::{NewsError, Result};
use scraper::{ElementRef, Selector};

pub(crate) mod comments;
pub(crate) mod ranking;

pub use comments::{extract_comments, CommentItem};
pub use ranking::{extract_ranking, HeadItem, TailItem};

/// One kind of repeated record element and how to turn it into a row.
///
/// Implementations name the sub-elements they require and fail with
/// [`NewsError::Structure`] when one is absent.
pub trait RecordShape {
    type Output;

    /// Name used in structure errors.
    const NAME: &'static str;

    fn extract(&self, element: ElementRef<'_>) -> Result<Self::Output>;
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| NewsError::Selector(format!("{selector}: {e}")))
}

/// The `n`-th (0-based) match of `selector` under `element`.
pub(crate) fn nth_required<'a>(
    record: &'static str,
    element: ElementRef<'a>,
    selector: &Selector,
    what: &str,
    n: usize,
) -> Result<ElementRef<'a>> {
    element
        .select(selector)
        .nth(n)
        .ok_or_else(|| NewsError::missing(record, format!("{what} #{}", n + 1)))
}

pub(crate) fn attr_required<'a>(
    record: &'static str,
    element: ElementRef<'a>,
    attr: &str,
) -> Result<&'a str> {
    element
        .value()
        .attr(attr)
        .ok_or_else(|| NewsError::missing(record, format!("{attr} attribute")))
}

/// Runs `shape` over every element, stopping at the first failure.
pub(crate) fn extract_all<'a, S, I>(shape: &S, elements: I) -> Result<Vec<S::Output>>
where
    S: RecordShape,
    I: IntoIterator<Item = ElementRef<'a>>,
{
    elements.into_iter().map(|el| shape.extract(el)).collect()
}
