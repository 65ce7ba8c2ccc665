//! Spreadsheet cell classification.

use calamine::Data;

/// A spreadsheet value classified before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Integer or floating point cell
    Numeric(f64),
    /// Any textual cell (booleans and dates use their display form)
    Text(String),
    /// Empty, error, NaN or a textual "nan" marker
    Missing,
}

impl Cell {
    /// Classify a text value. Blank text and the "nan" marker count as missing.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            Cell::Missing
        } else {
            Cell::Text(value)
        }
    }

    /// Classify a number. Non-finite values count as missing.
    pub fn numeric(value: f64) -> Self {
        if value.is_finite() {
            Cell::Numeric(value)
        } else {
            Cell::Missing
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::numeric(*i as f64),
            Data::Float(f) => Cell::numeric(*f),
            Data::String(s) => Cell::text(s.as_str()),
            Data::Bool(_) | Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => {
                Cell::text(data.to_string())
            }
            Data::Error(_) | Data::Empty => Cell::Missing,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::numeric(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Missing, Into::into)
    }
}

/// One (code, place) pair taken from the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub code: Cell,
    pub place: Cell,
}

impl RawRow {
    pub fn new(code: impl Into<Cell>, place: impl Into<Cell>) -> Self {
        Self {
            code: code.into(),
            place: place.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_calamine_values() {
        assert_eq!(Cell::from(&Data::Float(8128.0)), Cell::Numeric(8128.0));
        assert_eq!(Cell::from(&Data::Int(1011)), Cell::Numeric(1011.0));
        assert_eq!(
            Cell::from(&Data::String("Pécs".to_string())),
            Cell::Text("Pécs".to_string())
        );
        assert_eq!(Cell::from(&Data::Empty), Cell::Missing);
        assert_eq!(Cell::from(&Data::Float(f64::NAN)), Cell::Missing);
    }

    #[test]
    fn test_nan_marker_is_missing() {
        assert!(Cell::text("nan").is_missing());
        assert!(Cell::text(" NaN ").is_missing());
        assert!(Cell::text("   ").is_missing());
        assert!(!Cell::text("Nana").is_missing());
    }

    #[test]
    fn test_option_conversion() {
        let row = RawRow::new(None::<&str>, Some("Győr"));
        assert!(row.code.is_missing());
        assert_eq!(row.place, Cell::Text("Győr".to_string()));
    }
}
