use std::collections::{HashMap, HashSet};

use crate::{
    export::{cell_text, read_sheet, write_sheet, Cell},
    stopwords::is_stopword,
    Error, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    /// Number of reviews the word appears in.
    pub count: usize,
}

/// Reads a reviews workbook and returns `"{Title} {Body}"` for every data row.
/// Only the `Title` and `Body` columns are required, in any position.
pub fn read_review_texts(table: &[u8]) -> Result<Vec<String>> {
    let range = read_sheet(table)?;
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|c| cell_text(c).trim().to_string()).collect())
        .unwrap_or_default();
    let column = |name: &'static str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or(Error::MissingColumn(name))
    };
    let (title_col, body_col) = (column("Title")?, column("Body")?);

    let texts = rows
        .map(|row| {
            let text_at = |col: usize| row.get(col).map(cell_text).unwrap_or_default();
            format!("{} {}", text_at(title_col), text_at(body_col))
        })
        .collect();
    Ok(texts)
}

/// Lowercase alphabetic tokens of `text` that aren't stopwords.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .filter(|token| !is_stopword(token))
}

/// Counts in how many texts each word appears. A word repeated inside a single
/// text counts once. Sorted by count, most frequent first, then alphabetically.
pub fn count_unique_words<S: AsRef<str>>(texts: &[S]) -> Vec<WordCount> {
    let mut counter: HashMap<String, usize> = HashMap::new();
    for text in texts {
        let unique: HashSet<String> = tokenize(text.as_ref()).collect();
        for word in unique {
            *counter.entry(word).or_default() += 1;
        }
    }

    let mut counts: Vec<WordCount> = counter
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    counts.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    counts
}

/// Serializes the counts into an xlsx workbook with the columns `Word, Count`.
pub fn word_counts_to_table(counts: &[WordCount]) -> Result<Vec<u8>> {
    let rows = counts
        .iter()
        .map(|wc| [Cell::Text(&wc.word), Cell::Number(wc.count as f64)]);
    write_sheet(&["Word", "Count"], rows)
}
