//! Aligned value-trace rendering of a recorded log.

mod config;

pub use config::{DuplicatePolicy, RenderConfig};

use crate::recorder::RecordedValue;
use crate::source::NormalizedSource;
use std::collections::BTreeMap;
use std::fmt::Write;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Renders a recorded log under the source text it was captured against.
///
/// Values are laid out right-to-left. Each one drops down to the first row
/// whose leftmost occupant starts after the value ends, leaving a marker on
/// every row it passes through.
///
/// Anchors past the end of the source are drawn just after it, and anchors
/// that land on an already used cell (zero-width graphemes, overhang) move
/// right to the next free one, so every distinct column keeps its own value.
pub struct ValueTrace<'s> {
    source: &'s NormalizedSource,
    values: &'s [RecordedValue],
    config: RenderConfig,
}

enum Cell {
    Blank,
    Glyph(String),
    /// Second half of a wide glyph.
    Covered,
}

struct Row {
    cells: Vec<Cell>,
    /// Leftmost occupied cell.
    start: usize,
}

impl Row {
    fn new() -> Self {
        Row {
            cells: Vec::new(),
            start: usize::MAX,
        }
    }

    fn reserve_to(&mut self, len: usize) {
        if self.cells.len() < len {
            self.cells.resize_with(len, || Cell::Blank);
        }
    }

    fn put_marker(&mut self, offset: usize, marker: char) {
        self.reserve_to(offset + 1);
        self.cells[offset] = Cell::Glyph(marker.to_string());
        self.start = offset;
    }

    fn put_text(&mut self, offset: usize, text: &str) {
        let mut cell = offset;
        for grapheme in text.graphemes(true) {
            let width = UnicodeWidthStr::width(grapheme);
            if width == 0 {
                continue;
            }
            self.reserve_to(cell + width);
            self.cells[cell] = Cell::Glyph(grapheme.to_string());
            for covered in (cell + 1)..(cell + width) {
                self.cells[covered] = Cell::Covered;
            }
            cell += width;
        }
        self.start = offset;
    }

    fn render(&self) -> String {
        let mut line = String::new();
        for cell in &self.cells {
            match cell {
                Cell::Blank => line.push(' '),
                Cell::Glyph(glyph) => line.push_str(glyph),
                Cell::Covered => {}
            }
        }
        line.truncate(line.trim_end().len());
        line
    }
}

fn text_width(text: &str) -> usize {
    text.graphemes(true).map(UnicodeWidthStr::width).sum()
}

impl<'s> ValueTrace<'s> {
    pub fn new(source: &'s NormalizedSource, values: &'s [RecordedValue]) -> Self {
        ValueTrace {
            source,
            values,
            config: RenderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    fn format_value(&self, recorded: &RecordedValue) -> String {
        let value = recorded.value();
        if self.config.pretty {
            value.pretty().to_string()
        } else {
            value.compact().to_string()
        }
    }

    /// One rendered value per column, picked per the duplicate policy, paired
    /// with a distinct display offset and sorted by it.
    fn anchored_values(&self) -> Vec<(usize, String)> {
        let mut by_column = BTreeMap::new();
        for recorded in self.values {
            match self.config.duplicates {
                DuplicatePolicy::Last => {
                    by_column.insert(recorded.column(), self.format_value(recorded));
                }
                DuplicatePolicy::First => {
                    by_column
                        .entry(recorded.column())
                        .or_insert_with(|| self.format_value(recorded));
                }
            }
        }

        let overhang = self.source.display_width().saturating_add(1);
        let mut next_free = 0;
        by_column
            .into_iter()
            .map(|(column, text)| {
                let offset = self
                    .source
                    .display_offset(column)
                    .min(overhang)
                    .max(next_free);
                next_free = offset + 1;
                (offset, text)
            })
            .collect()
    }
}

// assert a.len() == 3
//        | |     |
//        | 2     false
//        [1, 2]
impl<'s> std::fmt::Display for ValueTrace<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.source.text())?;

        let anchored = self.anchored_values();
        if anchored.is_empty() {
            return Ok(());
        }

        let marker = self.config.marker;
        let mut markers = Row::new();
        let mut rows: Vec<Row> = Vec::new();

        for (offset, text) in anchored.iter().rev() {
            let offset = *offset;
            markers.put_marker(offset, marker);

            let lines: Vec<&str> = text.lines().collect();
            let first = lines.first().copied().unwrap_or("");
            // multi-line values never share a row
            let end = if lines.len() <= 1 {
                offset.saturating_add(text_width(first))
            } else {
                usize::MAX
            };

            let mut placed = false;
            for row in rows.iter_mut() {
                if end < row.start {
                    row.put_text(offset, first);
                    placed = true;
                    break;
                }
                row.put_marker(offset, marker);
            }

            if !placed {
                if lines.len() <= 1 {
                    let mut row = Row::new();
                    row.put_text(offset, first);
                    rows.push(row);
                } else {
                    for line in lines {
                        let mut row = Row::new();
                        row.put_text(offset, line);
                        rows.push(row);
                    }
                }
            }
        }

        f.write_char('\n')?;
        f.write_str(&markers.render())?;
        for row in &rows {
            f.write_char('\n')?;
            f.write_str(&row.render())?;
        }

        Ok(())
    }
}
