use std::collections::HashMap;

use super::MergeRange;

/// Stable identity of a worksheet, used as the span cache key.
///
/// Identities are injected by whoever materializes the worksheet (the
/// calamine adapter uses the sheet's index in the workbook). Two distinct
/// worksheets handed to the same resolver must carry distinct ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub u64);

/// Narrow read-only view of a parsed worksheet.
///
/// This is the seam between the span resolver and whichever spreadsheet
/// library produced the sheet: only used-range bounds, the merge list and
/// per-cell style indexes are visible. Coordinates are 0-indexed;
/// `max_row`/`max_col` are extents (a 7-column sheet has `max_col() == 7`).
pub trait WorksheetView {
    /// Stable identity for caching.
    fn id(&self) -> SheetId;

    /// Number of rows in the used range.
    fn max_row(&self) -> u32;

    /// Number of columns in the used range.
    fn max_col(&self) -> u32;

    /// Merge ranges declared on the sheet, pre-validated and non-overlapping.
    fn merges(&self) -> &[MergeRange];

    /// Style index of the cell at the given 0-indexed coordinate, if any.
    fn style_idx(&self, row: u32, col: u32) -> Option<u32>;
}

/// Owned in-memory worksheet snapshot.
///
/// The concrete `WorksheetView` used by the calamine adapter and by test
/// fixtures. Style indexes are stored sparsely, keyed by (row, col).
#[derive(Debug, Clone, Default)]
pub struct SheetData {
    id: SheetId,
    max_row: u32,
    max_col: u32,
    merges: Vec<MergeRange>,
    style_indexes: HashMap<(u32, u32), u32>,
}

impl SheetData {
    /// Create an empty snapshot with the given identity and used-range extents.
    pub fn new(id: SheetId, max_row: u32, max_col: u32) -> Self {
        SheetData {
            id,
            max_row,
            max_col,
            merges: Vec::new(),
            style_indexes: HashMap::new(),
        }
    }

    /// Add a merge range (builder-style).
    #[must_use]
    pub fn with_merge(mut self, merge: MergeRange) -> Self {
        self.merges.push(merge);
        self
    }

    /// Set the style index of a cell (builder-style).
    #[must_use]
    pub fn with_style_idx(mut self, row: u32, col: u32, idx: u32) -> Self {
        self.style_indexes.insert((row, col), idx);
        self
    }

    /// Replace the merge list wholesale.
    pub fn set_merges(&mut self, merges: Vec<MergeRange>) {
        self.merges = merges;
    }
}

impl WorksheetView for SheetData {
    fn id(&self) -> SheetId {
        self.id
    }

    fn max_row(&self) -> u32 {
        self.max_row
    }

    fn max_col(&self) -> u32 {
        self.max_col
    }

    fn merges(&self) -> &[MergeRange] {
        &self.merges
    }

    fn style_idx(&self, row: u32, col: u32) -> Option<u32> {
        self.style_indexes.get(&(row, col)).copied()
    }
}
