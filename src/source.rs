//! Normalized single-line rendering of an assertion's source text.
//!
//! Column anchors handed to [`ValueRecorder::capture`](crate::ValueRecorder::capture)
//! index into this text by grapheme cluster. The renderer maps them to
//! terminal cells with [`NormalizedSource::display_offset`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSource {
    text: String,
    /// Byte offset of each grapheme start.
    grapheme_starts: Vec<usize>,
    /// Display cell offset of each grapheme start, plus the total width at the end.
    cell_offsets: Vec<usize>,
}

impl NormalizedSource {
    /// Normalize `raw` source text: every line is trimmed, blank lines are
    /// dropped, and the rest are joined with a single space. Tabs become
    /// single spaces.
    pub fn new(raw: &str) -> Self {
        let text = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .replace('\t', " ");

        let mut grapheme_starts = Vec::new();
        let mut cell_offsets = Vec::new();
        let mut cells = 0;
        for (byte_idx, grapheme) in text.grapheme_indices(true) {
            grapheme_starts.push(byte_idx);
            cell_offsets.push(cells);
            cells += UnicodeWidthStr::width(grapheme);
        }
        cell_offsets.push(cells);

        NormalizedSource {
            text,
            grapheme_starts,
            cell_offsets,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of grapheme clusters, i.e. the first out-of-range column.
    pub fn len(&self) -> usize {
        self.grapheme_starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grapheme_starts.is_empty()
    }

    /// Width of the text in terminal cells.
    pub fn display_width(&self) -> usize {
        self.cell_offsets[self.len()]
    }

    /// Terminal cell offset at which `column` starts.
    ///
    /// Columns past the end of the text continue one cell per column,
    /// saturating at `usize::MAX`.
    pub fn display_offset(&self, column: usize) -> usize {
        match self.cell_offsets.get(column) {
            Some(offset) => *offset,
            None => self.display_width().saturating_add(column - self.len()),
        }
    }

    /// Column anchor of the first occurrence of `needle`.
    pub fn column_of(&self, needle: &str) -> Option<usize> {
        self.nth_column_of(needle, 0)
    }

    /// Column anchor of the `n`-th (zero-based) occurrence of `needle`.
    ///
    /// Occurrences that do not start on a grapheme boundary are skipped.
    pub fn nth_column_of(&self, needle: &str, n: usize) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        self.text
            .match_indices(needle)
            .filter_map(|(byte_idx, _)| self.grapheme_starts.binary_search(&byte_idx).ok())
            .nth(n)
    }
}

impl std::fmt::Display for NormalizedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
