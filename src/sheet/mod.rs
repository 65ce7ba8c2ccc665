//! Spreadsheet input: workbook decoding and column selection.

mod columns;
mod reader;

pub use columns::{ColumnSelection, ColumnVocabulary, CODE_HEADERS, PLACE_HEADERS};
pub use reader::SheetTable;
