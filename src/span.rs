//! Merged-cell span resolution.
//!
//! Computes, per worksheet, the structures a table renderer needs to emit
//! merged cells: which rows/columns/cells to skip entirely, and the
//! colspan/rowspan plus extra style indexes for each merge anchor. Results
//! are computed once per sheet and cached by [`SheetId`], so repeated
//! queries hand back the same shared instance.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cell_ref::cell_name;
use crate::types::{SheetId, WorksheetView};

/// Span data for the anchor cell of a merge range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanInfo {
    /// Number of columns the anchor's rendering occupies.
    pub colspan: u32,
    /// Number of rows the anchor's rendering occupies. Rows swallowed into
    /// the ignored-rows set are not counted, so this always equals the
    /// number of table rows the renderer actually emits for the merge.
    pub rowspan: u32,
    /// Style indexes of the subsumed cells in row-major order, anchor
    /// excluded. Duplicates are preserved: each entry is a per-cell style
    /// override the renderer folds into the anchor's combined class list.
    pub additional_style_indexes: Vec<u32>,
}

/// Derived artifacts for one worksheet, shared by handle between callers.
#[derive(Debug, Default)]
struct SheetSpans {
    ignored_rows: Arc<BTreeSet<u32>>,
    ignored_columns: Arc<BTreeSet<u32>>,
    ignored_cells: Arc<BTreeSet<String>>,
    merged_cells: Arc<BTreeMap<String, SpanInfo>>,
}

/// Resolves and caches merge spans per worksheet.
///
/// An explicit, caller-owned object: inject one per request (or share one
/// behind a lock) rather than reaching for globals. Worksheet identities
/// ([`SheetId`]) are only required to be unique within a single resolver.
#[derive(Debug, Default)]
pub struct SpanResolver {
    cache: HashMap<SheetId, SheetSpans>,
    empty: SheetSpans,
}

impl SpanResolver {
    /// Create a resolver with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row numbers that the renderer should skip entirely.
    ///
    /// A row is ignored when a merge spanning the full used width of the
    /// sheet swallows it (every row of such a merge after its first).
    /// Returned numbers are 1-based, matching the row component of
    /// A1-style references. Repeated calls for the same worksheet return
    /// the identical cached instance (`Arc::ptr_eq` holds).
    pub fn ignored_rows(&mut self, worksheet: Option<&dyn WorksheetView>) -> Arc<BTreeSet<u32>> {
        Arc::clone(&self.entry(worksheet).ignored_rows)
    }

    /// Column numbers that the renderer should skip entirely.
    ///
    /// Symmetric to [`ignored_rows`](Self::ignored_rows): columns after the
    /// first of any merge spanning the full used height. 1-based.
    pub fn ignored_columns(&mut self, worksheet: Option<&dyn WorksheetView>) -> Arc<BTreeSet<u32>> {
        Arc::clone(&self.entry(worksheet).ignored_columns)
    }

    /// A1-style references of every subsumed (non-anchor) cell of every
    /// merge, including cells of partial merges that trigger no
    /// row/column-level ignoring.
    pub fn ignored_cells(&mut self, worksheet: Option<&dyn WorksheetView>) -> Arc<BTreeSet<String>> {
        Arc::clone(&self.entry(worksheet).ignored_cells)
    }

    /// Span data keyed by anchor cell reference (e.g. "B6").
    pub fn merged_cells(
        &mut self,
        worksheet: Option<&dyn WorksheetView>,
    ) -> Arc<BTreeMap<String, SpanInfo>> {
        Arc::clone(&self.entry(worksheet).merged_cells)
    }

    /// Drop all cached results.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn entry(&mut self, worksheet: Option<&dyn WorksheetView>) -> &SheetSpans {
        let Some(sheet) = worksheet else {
            // Absent worksheets yield the shared empty artifacts, which are
            // as reference-stable as cached ones.
            return &self.empty;
        };
        self.cache
            .entry(sheet.id())
            .or_insert_with(|| resolve(sheet))
    }
}

/// Build all four artifacts for a sheet in one pass over its merge list.
fn resolve(sheet: &dyn WorksheetView) -> SheetSpans {
    let max_row = sheet.max_row();
    let max_col = sheet.max_col();
    let merges = sheet.merges();

    // Rows swallowed by full-width merges and columns swallowed by
    // full-height merges, 0-indexed. A merge covering only part of the
    // used width/height contributes nothing here; its cells are still
    // ignored individually below.
    let mut swallowed_rows: BTreeSet<u32> = BTreeSet::new();
    let mut swallowed_cols: BTreeSet<u32> = BTreeSet::new();
    for merge in merges {
        if max_col > 0 && merge.start_col == 0 && merge.end_col == max_col - 1 {
            swallowed_rows.extend(merge.start_row + 1..=merge.end_row);
        }
        if max_row > 0 && merge.start_row == 0 && merge.end_row == max_row - 1 {
            swallowed_cols.extend(merge.start_col + 1..=merge.end_col);
        }
    }

    let mut ignored_cells: BTreeSet<String> = BTreeSet::new();
    let mut merged_cells: BTreeMap<String, SpanInfo> = BTreeMap::new();
    for merge in merges {
        // The reported span counts only the rows/columns the renderer will
        // emit: rows swallowed into the ignored set collapse out of the
        // rowspan (a full-width A9:G10 merge renders as one row with
        // rowspan 1, row 10 being skipped), and symmetrically for columns.
        let rows_inside = count_in_range(&swallowed_rows, merge.start_row, merge.end_row);
        let cols_inside = count_in_range(&swallowed_cols, merge.start_col, merge.end_col);
        let rowspan = merge.row_span().saturating_sub(rows_inside).max(1);
        let colspan = merge.col_span().saturating_sub(cols_inside).max(1);

        let mut additional_style_indexes = Vec::new();
        for row in merge.start_row..=merge.end_row {
            for col in merge.start_col..=merge.end_col {
                if merge.is_anchor(row, col) {
                    continue;
                }
                ignored_cells.insert(cell_name(row, col));
                if let Some(idx) = sheet.style_idx(row, col) {
                    additional_style_indexes.push(idx);
                }
            }
        }

        merged_cells.insert(
            merge.anchor_name(),
            SpanInfo {
                colspan,
                rowspan,
                additional_style_indexes,
            },
        );
    }

    SheetSpans {
        // Exported row/column sets are 1-based like A1 references.
        ignored_rows: Arc::new(swallowed_rows.iter().map(|r| r + 1).collect()),
        ignored_columns: Arc::new(swallowed_cols.iter().map(|c| c + 1).collect()),
        ignored_cells: Arc::new(ignored_cells),
        merged_cells: Arc::new(merged_cells),
    }
}

fn count_in_range(set: &BTreeSet<u32>, start: u32, end: u32) -> u32 {
    u32::try_from(set.range(start..=end).count()).unwrap_or(u32::MAX)
}
