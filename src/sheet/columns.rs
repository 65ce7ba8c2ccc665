use serde::Deserialize;

/// Header fragments that identify the postal code column.
pub const CODE_HEADERS: &[&str] = &["irányítószám", "irsz", "zip", "postal"];

/// Header fragments that identify the settlement column.
pub const PLACE_HEADERS: &[&str] = &["település", "város", "city", "place"];

/// Header vocabulary used to pick the code and place columns.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ColumnVocabulary {
    pub code_headers: Vec<String>,
    pub place_headers: Vec<String>,
}

impl Default for ColumnVocabulary {
    fn default() -> Self {
        Self {
            code_headers: CODE_HEADERS.iter().map(|s| s.to_string()).collect(),
            place_headers: PLACE_HEADERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Chosen column indices, and whether each came from a header match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelection {
    pub code: usize,
    pub place: usize,
    pub code_matched: bool,
    pub place_matched: bool,
}

impl ColumnVocabulary {
    /// Pick the code and place columns from header text.
    ///
    /// Matching is a case-insensitive substring test. Unmatched columns fall
    /// back to position: code first, place the first remaining column.
    /// Returns `None` when there are fewer than two columns.
    pub fn select(&self, headers: &[String]) -> Option<ColumnSelection> {
        if headers.len() < 2 {
            return None;
        }

        let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

        let code_match = find_header(&normalized, &self.code_headers, None);
        let place_match = find_header(&normalized, &self.place_headers, code_match);

        let code = code_match.unwrap_or(match place_match {
            Some(0) => 1,
            _ => 0,
        });
        let place = place_match.unwrap_or(if code == 0 { 1 } else { 0 });

        Some(ColumnSelection {
            code,
            place,
            code_matched: code_match.is_some(),
            place_matched: place_match.is_some(),
        })
    }
}

fn normalize_header(header: &str) -> String {
    header.replace(['\n', '\r'], " ").to_lowercase()
}

fn find_header(headers: &[String], vocabulary: &[String], exclude: Option<usize>) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .find(|(idx, header)| {
            Some(*idx) != exclude
                && vocabulary
                    .iter()
                    .any(|word| header.contains(word.to_lowercase().as_str()))
        })
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hungarian_headers() {
        let vocab = ColumnVocabulary::default();
        let sel = vocab
            .select(&headers(&["Megye", "Település", "IRSZ"]))
            .unwrap();
        assert_eq!(sel.code, 2);
        assert_eq!(sel.place, 1);
        assert!(sel.code_matched && sel.place_matched);
    }

    #[test]
    fn test_multiline_header() {
        let vocab = ColumnVocabulary::default();
        let sel = vocab
            .select(&headers(&["Irányító-\nszám", "Postal\r\nCode", "City"]))
            .unwrap();
        assert_eq!(sel.code, 1);
        assert_eq!(sel.place, 2);
    }

    #[test]
    fn test_positional_fallback() {
        let vocab = ColumnVocabulary::default();
        let sel = vocab.select(&headers(&["A", "B", "C"])).unwrap();
        assert_eq!((sel.code, sel.place), (0, 1));
        assert!(!sel.code_matched && !sel.place_matched);
    }

    #[test]
    fn test_place_in_first_column() {
        let vocab = ColumnVocabulary::default();
        let sel = vocab.select(&headers(&["Város", "Kód"])).unwrap();
        assert_eq!((sel.code, sel.place), (1, 0));
    }

    #[test]
    fn test_code_match_only() {
        let vocab = ColumnVocabulary::default();
        let sel = vocab.select(&headers(&["Név", "Zip", "Megye"])).unwrap();
        assert_eq!((sel.code, sel.place), (1, 0));
    }

    #[test]
    fn test_same_column_not_used_twice() {
        // "Postal place" matches both vocabularies; code wins it.
        let vocab = ColumnVocabulary::default();
        let sel = vocab.select(&headers(&["Postal place", "Other"])).unwrap();
        assert_eq!((sel.code, sel.place), (0, 1));
        assert!(!sel.place_matched);
    }

    #[test]
    fn test_too_few_columns() {
        let vocab = ColumnVocabulary::default();
        assert!(vocab.select(&headers(&["Irányítószám"])).is_none());
    }
}
