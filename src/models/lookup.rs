//! Postal code → settlement lookup table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a canonical 4-digit postal code to the settlements it serves.
///
/// Codes are kept in ascending order so serialization is deterministic.
/// Place lists keep insertion order until [`LookupTable::finalize`] sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupTable {
    entries: BTreeMap<String, Vec<String>>,
}

/// Summary of a finished table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupStats {
    pub codes: usize,
    pub single_place: usize,
    pub multi_place: usize,
}

impl LookupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place under a code. Returns false if it was already listed.
    pub fn insert(&mut self, code: String, place: String) -> bool {
        let places = self.entries.entry(code).or_default();
        if places.contains(&place) {
            return false;
        }
        places.push(place);
        true
    }

    /// Sort every place list in code-point order.
    pub fn finalize(&mut self) {
        for places in self.entries.values_mut() {
            places.sort();
        }
    }

    pub fn get(&self, code: &str) -> Option<&[String]> {
        self.entries.get(code).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> LookupStats {
        let single_place = self.entries.values().filter(|p| p.len() == 1).count();
        LookupStats {
            codes: self.entries.len(),
            single_place,
            multi_place: self.entries.values().filter(|p| p.len() > 1).count(),
        }
    }
}
