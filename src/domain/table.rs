use serde::Serialize;
use std::fmt;

/// A flat record with a fixed, ordered column set.
pub trait Record {
    const COLUMNS: &'static [&'static str];

    /// Cell values in `COLUMNS` order.
    fn cells(&self) -> Vec<String>;
}

/// Ordered rows of one record type. Serializes as a plain array of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultTable<T> {
    rows: Vec<T>,
}

impl<T: Record> ResultTable<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        T::COLUMNS
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<T> {
        self.rows
    }
}

impl<T> IntoIterator for ResultTable<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultTable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Tab-separated rendering with a header line.
impl<T: Record> fmt::Display for ResultTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", T::COLUMNS.join("\t"))?;
        for row in &self.rows {
            let cells: Vec<String> = row
                .cells()
                .into_iter()
                .map(|cell| cell.replace(['\t', '\r', '\n'], " "))
                .collect();
            writeln!(f, "{}", cells.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RankEntry;

    fn entry(rank: u32, title: &str) -> RankEntry {
        RankEntry {
            rank,
            comment_count: 10,
            title: title.to_string(),
            url: format!("https://news.nate.com/view/{rank}"),
        }
    }

    #[test]
    fn columns_come_from_the_record_type() {
        let table = ResultTable::new(vec![entry(1, "a")]);
        assert_eq!(table.columns(), &["rank", "comment_count", "title", "url"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table_still_has_columns() {
        let table: ResultTable<RankEntry> = ResultTable::new(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 4);
        assert_eq!(table.to_string(), "rank\tcomment_count\ttitle\turl\n");
    }

    #[test]
    fn display_flattens_control_characters_in_cells() {
        let table = ResultTable::new(vec![entry(2, "two\tlines\nhere")]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2\t10\ttwo lines here\thttps://news.nate.com/view/2");
    }

    #[test]
    fn serializes_as_array_of_rows() {
        let table = ResultTable::new(vec![entry(1, "a"), entry(2, "b")]);
        let json = serde_json::to_value(&table).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["rank"], 1);
        assert_eq!(rows[1]["title"], "b");
    }
}
