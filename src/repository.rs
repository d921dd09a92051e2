// 📚 Repository - ordered, owning collection of one record kind
//
// Append-only: no removal, no update, no duplicate-id check.
// Dropping the repository drops every record it holds.

use crate::entities::Record;
use std::io::{self, Write};
use tracing::debug;

/// Notice written by `display_all` when there is nothing to show
pub const NO_RECORDS: &str = "No records found.";

#[derive(Debug, Clone)]
pub struct Repository<T> {
    records: Vec<T>,
}

impl<T: Record> Repository<T> {
    pub fn new() -> Self {
        Repository {
            records: Vec::new(),
        }
    }

    /// Append a record. Always succeeds.
    pub fn add(&mut self, record: T) {
        debug!(
            kind = T::KIND,
            id = record.identity().id(),
            position = self.records.len(),
            "record added"
        );
        self.records.push(record);
    }

    /// Write every record's display line in insertion order, or a single
    /// "no records" notice when empty.
    pub fn display_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if self.records.is_empty() {
            return writeln!(out, "{}", NO_RECORDS);
        }

        for record in &self.records {
            writeln!(out, "{}", record.display())?;
        }

        Ok(())
    }

    /// Read-only view of all records, in insertion order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Record> IntoIterator for &'a Repository<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
