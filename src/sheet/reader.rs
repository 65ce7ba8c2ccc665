//! Workbook reading via calamine.

use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use tracing::{debug, info, warn};

use super::columns::{ColumnSelection, ColumnVocabulary};
use crate::error::ConvertError;
use crate::models::RawRow;

/// Number of data rows echoed at debug level.
const PREVIEW_ROWS: usize = 5;

/// First worksheet of a workbook, split into header and data rows.
#[derive(Debug)]
pub struct SheetTable {
    pub sheet_name: String,
    pub headers: Vec<String>,
    range: Range<Data>,
}

impl SheetTable {
    /// Open a workbook and load its first worksheet.
    ///
    /// The format is picked from the extension first. If that fails the
    /// content is sniffed instead, so an xlsx file named `.xls` still loads.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConvertError::InputNotFound(path.to_path_buf()));
        }

        info!("Reading workbook: {}", path.display());

        let (sheet_name, range) = match open_workbook_auto(path) {
            Ok(workbook) => first_sheet(workbook, path)?,
            Err(source) => {
                warn!(
                    "Could not open {} by extension ({}), detecting format from content",
                    path.display(),
                    source
                );
                let bytes = fs::read(path).map_err(|e| ConvertError::Io {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                match open_workbook_auto_from_rs(Cursor::new(bytes)) {
                    Ok(workbook) => first_sheet(workbook, path)?,
                    Err(_) => {
                        return Err(ConvertError::Workbook {
                            path: path.to_path_buf(),
                            source,
                        })
                    }
                }
            }
        };

        let headers: Vec<String> = range
            .rows()
            .next()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .unwrap_or_default();

        info!(
            "Sheet '{}': {} columns, {} data rows",
            sheet_name,
            headers.len(),
            range.height().saturating_sub(1)
        );
        debug!("Columns: {:?}", headers);

        Ok(Self {
            sheet_name,
            headers,
            range,
        })
    }

    /// Number of rows below the header.
    pub fn row_count(&self) -> usize {
        self.range.height().saturating_sub(1)
    }

    /// True when the worksheet holds no cells at all.
    pub fn is_blank(&self) -> bool {
        self.range.is_empty()
    }

    /// Choose the code and place columns for this sheet.
    pub fn select_columns(
        &self,
        vocabulary: &ColumnVocabulary,
    ) -> Result<ColumnSelection, ConvertError> {
        let selection = vocabulary
            .select(&self.headers)
            .ok_or(ConvertError::TooFewColumns(self.headers.len()))?;

        info!(
            "Postal code column: {:?}{}",
            self.headers[selection.code],
            if selection.code_matched { "" } else { " (positional)" }
        );
        info!(
            "Place column: {:?}{}",
            self.headers[selection.place],
            if selection.place_matched { "" } else { " (positional)" }
        );

        Ok(selection)
    }

    /// Log the first few data rows at debug level.
    pub fn log_preview(&self, selection: ColumnSelection) {
        for (idx, raw) in self.rows(selection).take(PREVIEW_ROWS).enumerate() {
            debug!(
                "Row {}: code={:?}, place={:?}",
                idx + 1,
                raw.code,
                raw.place
            );
        }
    }

    /// Data rows projected onto the selected columns.
    pub fn rows(&self, selection: ColumnSelection) -> impl Iterator<Item = RawRow> + '_ {
        self.range
            .rows()
            .skip(1)
            .map(move |row| RawRow::new(row.get(selection.code), row.get(selection.place)))
    }
}

fn first_sheet<RS: Read + Seek>(
    mut workbook: Sheets<RS>,
    path: &Path,
) -> Result<(String, Range<Data>), ConvertError> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::NoSheets(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| ConvertError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    Ok((sheet_name, range))
}
