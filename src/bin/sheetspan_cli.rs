//! CLI tool for sheetspan - resolves merge spans of an XLSX file to JSON
//!
//! Usage:
//!   sheetspan_cli <input.xlsx>              # Output JSON to stdout
//!   sheetspan_cli <input.xlsx> -o out.json  # Output JSON to file

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use serde_json::json;
use sheetspan::adapter::load_workbook;
use sheetspan::{SpanResolver, WorksheetView};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: sheetspan_cli <input.xlsx> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Load worksheets through the calamine adapter
    let sheets = match load_workbook(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Resolve spans per sheet
    let mut resolver = SpanResolver::new();
    let resolved: Vec<serde_json::Value> = sheets
        .iter()
        .map(|sheet| {
            let ignored_rows = resolver.ignored_rows(Some(sheet));
            let ignored_columns = resolver.ignored_columns(Some(sheet));
            let ignored_cells = resolver.ignored_cells(Some(sheet));
            let merged_cells = resolver.merged_cells(Some(sheet));
            json!({
                "sheet": sheet.id().0,
                "ignoredRows": &*ignored_rows,
                "ignoredColumns": &*ignored_columns,
                "ignoredCells": &*ignored_cells,
                "mergedCells": &*merged_cells,
            })
        })
        .collect();

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&resolved) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
