use crate::error::{NewsError, Result};
use scraper::ElementRef;

/// All descendant text of an element, untrimmed.
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Parses a display rank such as ` 3 `. Ranks start at 1.
pub fn parse_rank(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(rank) if rank > 0 => Ok(rank),
        _ => Err(NewsError::Parse(format!(
            "rank {raw:?} is not a positive integer"
        ))),
    }
}

/// Parses a comma-grouped count such as `1,234`.
pub fn parse_count(raw: &str) -> Result<u64> {
    raw.replace(',', "")
        .trim()
        .parse()
        .map_err(|_| NewsError::Parse(format!("count {raw:?} is not a non-negative integer")))
}

/// Drops the first `n` characters (not bytes).
pub fn skip_chars(raw: &str, n: usize) -> &str {
    match raw.char_indices().nth(n) {
        Some((idx, _)) => &raw[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_counts() {
        assert_eq!(parse_count("1,234").unwrap(), 1234);
        assert_eq!(parse_count("1,234,567").unwrap(), 1_234_567);
        assert_eq!(parse_count(" 0 ").unwrap(), 0);
    }

    #[test]
    fn negative_or_text_counts_fail() {
        assert!(matches!(parse_count("-3"), Err(NewsError::Parse(_))));
        assert!(matches!(parse_count("many"), Err(NewsError::Parse(_))));
        assert!(matches!(parse_count(""), Err(NewsError::Parse(_))));
    }

    #[test]
    fn ranks_tolerate_whitespace() {
        assert_eq!(parse_rank("\n 12 ").unwrap(), 12);
        assert!(parse_rank("1위").is_err());
        assert!(matches!(parse_rank("0"), Err(NewsError::Parse(_))));
    }

    #[test]
    fn skip_chars_counts_characters() {
        assert_eq!(skip_chars("| 05.30 14:02", 2), "05.30 14:02");
        assert_eq!(skip_chars("작성05.30 14:02", 2), "05.30 14:02");
        assert_eq!(skip_chars("a", 2), "");
    }
}
