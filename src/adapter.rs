//! Adapter translating calamine workbooks into the narrow worksheet view.
//!
//! Span resolution itself never touches files; this module is the seam to
//! the external parsing library. Each sheet becomes an owned [`SheetData`]
//! snapshot carrying used-range bounds and merge ranges, with the sheet's
//! index as its identity. calamine's range API exposes no per-cell style
//! indexes, so snapshots built here leave them unset.

use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

use crate::error::Result;
use crate::types::{MergeRange, SheetData, SheetId};

/// Load every worksheet of an XLSX file as a span-resolvable snapshot.
///
/// # Errors
/// Returns an error if the file cannot be opened or a worksheet fails to
/// parse.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<SheetData>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    workbook.load_merged_regions()?;

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::with_capacity(names.len());
    for (index, name) in names.iter().enumerate() {
        let range = workbook.worksheet_range(name)?;
        // Used range measured from A1, matching how renderers address cells.
        let (max_row, max_col) = match range.end() {
            Some((row, col)) => (row + 1, col + 1),
            None => (0, 0),
        };

        let merges = workbook
            .merged_regions_by_sheet(name)
            .into_iter()
            .map(|(_, _, region)| {
                MergeRange::new(region.start.0, region.start.1, region.end.0, region.end.1)
            })
            .collect();

        let mut sheet = SheetData::new(SheetId(index as u64), max_row, max_col);
        sheet.set_merges(merges);
        sheets.push(sheet);
    }

    Ok(sheets)
}
