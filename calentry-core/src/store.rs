//! The session's event store.

use crate::error::ValidationError;
use crate::event::EventRecord;

/// An ordered, append-only collection of event records, held for the
/// lifetime of a user session.
///
/// Insertion order is significant: it defines both table display order and
/// the order of VEVENT blocks in the exported document. Records are never
/// mutated in place; the only removals are the explicit `remove`/`clear`
/// operations the UI exposes.
#[derive(Debug, Default)]
pub struct EventStore {
    records: Vec<EventRecord>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, re-checking the `start <= end` invariant.
    ///
    /// On rejection the store is left unchanged.
    pub fn add(&mut self, record: EventRecord) -> Result<(), ValidationError> {
        if record.start > record.end {
            return Err(ValidationError::EndBeforeStart {
                start: record.start,
                end: record.end,
            });
        }

        self.records.push(record);
        Ok(())
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[EventRecord] {
        &self.records
    }

    /// A contiguous slice for pagination.
    ///
    /// An `offset` past the end, or a `size` of zero, yields an empty slice.
    pub fn page(&self, offset: usize, size: usize) -> &[EventRecord] {
        if size == 0 || offset >= self.records.len() {
            return &[];
        }

        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[offset..end]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove the record at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<EventRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Recurrence;
    use chrono::{NaiveDate, NaiveDateTime};

    fn dt(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn record(description: &str) -> EventRecord {
        EventRecord::new(dt(9), dt(10), Recurrence::None, description).unwrap()
    }

    fn store_of(n: usize) -> EventStore {
        let mut store = EventStore::new();
        for i in 0..n {
            store.add(record(&format!("event {i}"))).unwrap();
        }
        store
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = EventStore::new();
        let first = record("first");
        let second = record("second");

        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        assert_eq!(store.all(), &[first, second]);
    }

    #[test]
    fn add_rejects_invalid_record_and_leaves_store_unchanged() {
        let mut store = store_of(2);

        // Built via struct literal to sidestep constructor validation
        let bad = EventRecord {
            start: dt(12),
            end: dt(11),
            ..record("bad")
        };

        assert!(store.add(bad).is_err());
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].description, "event 1");
    }

    #[test]
    fn page_returns_contiguous_slice() {
        let store = store_of(25);

        let page = store.page(0, 10);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].description, "event 0");
        assert_eq!(page[9].description, "event 9");

        let last = store.page(20, 10);
        assert_eq!(last.len(), 5);
        assert_eq!(last[4].description, "event 24");
    }

    #[test]
    fn page_out_of_range_is_empty() {
        let store = store_of(25);
        assert!(store.page(30, 10).is_empty());
        assert!(store.page(25, 10).is_empty());
        assert!(store.page(0, 0).is_empty());
        assert!(store.page(usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn remove_shifts_later_records() {
        let mut store = store_of(3);

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.description, "event 1");
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].description, "event 2");

        assert!(store.remove(2).is_none());
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = store_of(3);
        store.clear();
        assert!(store.is_empty());
    }
}
