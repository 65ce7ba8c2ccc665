//! Row normalization into a [`LookupTable`].
//!
//! Rows that fail validation are skipped and counted; normalization itself
//! never fails.

use crate::models::{Cell, LookupTable, RawRow};

/// Length of a canonical postal code.
pub const CODE_LEN: usize = 4;

/// Why a row was left out of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingField,
    InvalidCode,
    EmptyPlace,
}

/// What happened to a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Inserted,
    Duplicate,
    Skipped(SkipReason),
}

/// Diagnostic counters collected while folding rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeStats {
    pub rows: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub missing_field: usize,
    pub invalid_code: usize,
    pub empty_place: usize,
}

impl NormalizeStats {
    pub fn skipped(&self) -> usize {
        self.missing_field + self.invalid_code + self.empty_place
    }

    fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingField => self.missing_field += 1,
            SkipReason::InvalidCode => self.invalid_code += 1,
            SkipReason::EmptyPlace => self.empty_place += 1,
        }
    }
}

/// Derive the canonical 4-digit postal code from a cell.
///
/// Numbers are truncated and zero-padded; text keeps only its ASCII digits.
pub fn postal_code(cell: &Cell) -> Option<String> {
    let code = match cell {
        Cell::Numeric(n) => {
            let n = n.trunc();
            if !n.is_finite() || n < 0.0 {
                return None;
            }
            format!("{:0width$}", n as u64, width = CODE_LEN)
        }
        Cell::Text(s) => s.trim().chars().filter(char::is_ascii_digit).collect(),
        Cell::Missing => return None,
    };

    (code.len() == CODE_LEN).then_some(code)
}

/// Derive the canonical place name: trimmed, inner whitespace collapsed.
pub fn place_name(cell: &Cell) -> Option<String> {
    let name = match cell {
        Cell::Text(s) => s.split_whitespace().collect::<Vec<_>>().join(" "),
        Cell::Numeric(n) => n.to_string(),
        Cell::Missing => return None,
    };

    if name.is_empty() || name.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(name)
    }
}

/// Builds a lookup table by folding rows in source order.
#[derive(Debug, Default)]
pub struct Normalizer {
    table: LookupTable,
    stats: NormalizeStats,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the table.
    pub fn push(&mut self, row: &RawRow) -> RowOutcome {
        self.stats.rows += 1;
        let outcome = match Self::canonicalize(row) {
            Ok((code, place)) => {
                if self.table.insert(code, place) {
                    RowOutcome::Inserted
                } else {
                    RowOutcome::Duplicate
                }
            }
            Err(reason) => RowOutcome::Skipped(reason),
        };
        match outcome {
            RowOutcome::Inserted => self.stats.inserted += 1,
            RowOutcome::Duplicate => self.stats.duplicates += 1,
            RowOutcome::Skipped(reason) => self.stats.record_skip(reason),
        }
        outcome
    }

    fn canonicalize(row: &RawRow) -> Result<(String, String), SkipReason> {
        if row.code.is_missing() || row.place.is_missing() {
            return Err(SkipReason::MissingField);
        }
        let code = postal_code(&row.code).ok_or(SkipReason::InvalidCode)?;
        let place = place_name(&row.place).ok_or(SkipReason::EmptyPlace)?;
        Ok((code, place))
    }

    /// Sort the place lists and hand back the table with its counters.
    pub fn finish(mut self) -> (LookupTable, NormalizeStats) {
        self.table.finalize();
        (self.table, self.stats)
    }
}

/// Normalize a whole row sequence in one pass.
pub fn normalize<I>(rows: I) -> (LookupTable, NormalizeStats)
where
    I: IntoIterator<Item = RawRow>,
{
    let mut normalizer = Normalizer::new();
    for row in rows {
        normalizer.push(&row);
    }
    normalizer.finish()
}
