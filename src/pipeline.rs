//! Workbook → JSON conversion.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::warn;

use crate::error::ConvertError;
use crate::models::LookupStats;
use crate::normalize::{NormalizeStats, Normalizer};
use crate::output::write_json;
use crate::sheet::{ColumnVocabulary, SheetTable};

/// Counters from a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertReport {
    pub rows: NormalizeStats,
    pub lookup: LookupStats,
}

/// Read `input`, normalize its rows and write the lookup table to `output`.
///
/// `pb` is advanced once per data row; pass `ProgressBar::hidden()` for none.
pub fn convert(
    input: &Path,
    output: &Path,
    vocabulary: &ColumnVocabulary,
    pb: &ProgressBar,
) -> Result<ConvertReport, ConvertError> {
    let sheet = SheetTable::open(input)?;
    let mut normalizer = Normalizer::new();

    if sheet.is_blank() {
        warn!("Worksheet '{}' is empty", sheet.sheet_name);
    } else {
        let selection = sheet.select_columns(vocabulary)?;
        sheet.log_preview(selection);

        pb.set_length(sheet.row_count() as u64);
        for row in sheet.rows(selection) {
            pb.inc(1);
            normalizer.push(&row);
        }
        pb.finish_and_clear();
    }

    let (table, rows) = normalizer.finish();
    write_json(&table, output)?;

    Ok(ConvertReport {
        rows,
        lookup: table.stats(),
    })
}
