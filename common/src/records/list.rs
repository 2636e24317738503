use std::fmt;

use tracing::info;

use crate::records::{Details, Identified, RecordId};

const RECORD_SEPARATOR: &str = "--------------------------------------";

/// An insertion-ordered list of records, searched by identifier.
///
/// Lookups are a linear scan. Records are never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T: Identified> RecordList<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends `record` and announces it.
    pub fn add(&mut self, record: T) {
        let id = record.id();
        self.records.push(record);
        info!("Record {} successfully added to the list", id);
    }

    /// Appends `record` without announcing it. Used when bulk loading.
    pub fn add_silent(&mut self, record: T) {
        self.records.push(record);
    }

    /// First record whose id equals `id`.
    pub fn find(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == id)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Identified + Details> RecordList<T> {
    /// Renders every record in insertion order, each followed by a separator.
    pub fn display_all(&self) -> String {
        self.to_string()
    }
}

impl<T: Identified> Default for RecordList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a RecordList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T: Identified + Details> fmt::Display for RecordList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return writeln!(f, "No records found.");
        }
        for record in &self.records {
            writeln!(f, "--- {} ---", record.heading())?;
            for (label, value) in record.details() {
                writeln!(f, "{label}: {value}")?;
            }
            writeln!(f, "{RECORD_SEPARATOR}")?;
        }
        Ok(())
    }
}
