//! sheetspan - merged-cell span resolution for spreadsheet rendering
//!
//! Given a parsed worksheet snapshot (used-range bounds, merge ranges,
//! per-cell style indexes), derives the structures a table renderer needs:
//! - ignored rows/columns (swallowed by full-width/full-height merges)
//! - ignored cells (every subsumed, non-anchor cell of every merge)
//! - per-anchor [`SpanInfo`] (colspan, rowspan, extra style indexes)
//!
//! Results are memoized per worksheet identity inside a caller-owned
//! [`SpanResolver`]. File parsing is delegated to calamine behind the
//! [`adapter`] module; the resolver itself performs no I/O.
//!
//! # Usage
//!
//! ```
//! use sheetspan::{MergeRange, SheetData, SheetId, SpanResolver};
//!
//! let sheet = SheetData::new(SheetId(0), 10, 7)
//!     .with_merge(MergeRange::parse("D2:E2")?);
//!
//! let mut resolver = SpanResolver::new();
//! let merged = resolver.merged_cells(Some(&sheet));
//! assert_eq!(merged["D2"].colspan, 2);
//! # Ok::<(), sheetspan::SheetSpanError>(())
//! ```

pub mod adapter;
pub mod cell_ref;
pub mod error;
pub mod span;
pub mod types;

pub use error::{Result, SheetSpanError};
pub use span::{SpanInfo, SpanResolver};
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
