//! Common test fixtures.
//!
//! `fixture_sheet` is the reference worksheet most tests run against: a
//! 10x7 (A1:G10) used range with a horizontal merge
//! D2:E2, a vertical merge B6:B7 and a full-width merge A9:G10.
//! `build_fixture_xlsx` writes the same worksheet as a minimal XLSX archive
//! for exercising the calamine adapter.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::ZipWriter;

use sheetspan::{MergeRange, SheetData, SheetId};

/// Style indexes carried by the subsumed cells of the fixture merges.
///
/// Row-major per merge: E2 for the D2:E2 merge, B7 for B6:B7, then
/// B9..G9 and A10..G10 for A9:G10.
pub const E2_STYLE: u32 = 12;
pub const B7_STYLE: u32 = 22;
pub const ROW9_STYLES: [u32; 6] = [31, 32, 33, 34, 35, 36];
pub const ROW10_STYLES: [u32; 7] = [40, 41, 42, 43, 44, 45, 46];

/// In-memory snapshot of the fixture worksheet.
pub fn fixture_sheet() -> SheetData {
    let mut sheet = SheetData::new(SheetId(0), 10, 7)
        .with_style_idx(1, 4, E2_STYLE)
        .with_style_idx(6, 1, B7_STYLE);
    for (col, idx) in ROW9_STYLES.iter().enumerate() {
        sheet = sheet.with_style_idx(8, col as u32 + 1, *idx);
    }
    for (col, idx) in ROW10_STYLES.iter().enumerate() {
        sheet = sheet.with_style_idx(9, col as u32, *idx);
    }
    sheet.set_merges(fixture_merges());
    sheet
}

/// The fixture's merge list on its own.
pub fn fixture_merges() -> Vec<MergeRange> {
    ["D2:E2", "B6:B7", "A9:G10"]
        .iter()
        .map(|r| MergeRange::parse(r).unwrap())
        .collect()
}

/// Write the fixture worksheet as a minimal but valid XLSX archive.
pub fn build_fixture_xlsx() -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default();

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
    )
    .unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Fixture" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
    )
    .unwrap();

    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#,
    )
    .unwrap();

    // Numeric cells at the used-range corners pin the A1:G10 extent; the
    // rest of the grid stays sparse like the real fixture file.
    zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<dimension ref="A1:G10"/>
<sheetData>
<row r="1"><c r="A1"><v>1</v></c></row>
<row r="2"><c r="D2"><v>2</v></c></row>
<row r="6"><c r="B6"><v>3</v></c></row>
<row r="9"><c r="A9"><v>4</v></c></row>
<row r="10"><c r="G10"><v>0</v></c></row>
</sheetData>
<mergeCells count="3">
<mergeCell ref="D2:E2"/>
<mergeCell ref="B6:B7"/>
<mergeCell ref="A9:G10"/>
</mergeCells>
</worksheet>"#,
    )
    .unwrap();

    zip.finish().unwrap().into_inner()
}
