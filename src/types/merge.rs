use serde::{Deserialize, Serialize};

use crate::cell_ref::{cell_name, parse_cell_range};
use crate::error::{Result, SheetSpanError};

/// A rectangular block of merged cells.
///
/// Bounds are 0-indexed and inclusive on all sides. The top-left cell
/// (`start_row`, `start_col`) is the anchor; every other cell in the
/// rectangle is subsumed by the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl MergeRange {
    /// Create a merge range from pre-validated 0-indexed inclusive bounds.
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        MergeRange {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Parse a merge range from an A1-style range like "D2:E2".
    ///
    /// # Errors
    /// Returns an error if the reference is unparseable or the end cell
    /// precedes the start cell.
    pub fn parse(range: &str) -> Result<Self> {
        let (start_row, start_col, end_row, end_col) =
            parse_cell_range(range).ok_or_else(|| SheetSpanError::CellRef(range.to_string()))?;
        if end_row < start_row || end_col < start_col {
            return Err(SheetSpanError::Range(range.to_string()));
        }
        Ok(MergeRange::new(start_row, start_col, end_row, end_col))
    }

    /// Number of columns covered by the merge (always >= 1).
    pub fn col_span(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    /// Number of rows covered by the merge (always >= 1).
    pub fn row_span(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Total number of cells in the rectangle.
    pub fn area(&self) -> u64 {
        u64::from(self.row_span()) * u64::from(self.col_span())
    }

    /// Whether the given 0-indexed coordinate lies inside the rectangle.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }

    /// Whether the given coordinate is the top-left (anchor) cell.
    pub fn is_anchor(&self, row: u32, col: u32) -> bool {
        row == self.start_row && col == self.start_col
    }

    /// A1-style reference of the anchor cell (e.g. "B6").
    pub fn anchor_name(&self) -> String {
        cell_name(self.start_row, self.start_col)
    }

    /// The range as an A1-style string (e.g. "A9:G10").
    pub fn to_range_string(&self) -> String {
        format!(
            "{}:{}",
            cell_name(self.start_row, self.start_col),
            cell_name(self.end_row, self.end_col)
        )
    }
}
