//! Markdown pipe-table alignment.
//!
//! This crate is the pure core of `mdalign`: it rewrites contiguous runs of
//! pipe-table lines so columns line up and separator rows use consistent
//! dash/colon padding. It performs no I/O; the CLI driver owns file reading,
//! writing, and reporting.
//!
//! - Row classification and cell parsing (`row`)
//! - Per-block width computation and row rebuilding (`align`)
//! - Whole-document partitioning and reassembly (`document`)
//!
//! Parsing is total over arbitrary input: ragged and malformed tables are
//! repaired best-effort (missing cells padded, odd separators rebuilt), never
//! rejected.
//!
//! # Example
//!
//! ```
//! use mdalign_tables::realign_document;
//!
//! let outcome = realign_document("| a | bb |\n|---|----|\n| c | ddddd |\n");
//! assert!(outcome.changed);
//! assert_eq!(
//!     outcome.text,
//!     "| a   | bb    |\n|-----|-------|\n| c   | ddddd |\n"
//! );
//! ```

mod align;
mod document;
mod row;

pub use align::align_block;
pub use document::{RealignOutcome, realign_document};
pub use row::{cell_width, is_separator_row, is_table_row, parse_cells};
