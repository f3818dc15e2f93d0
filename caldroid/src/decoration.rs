//! Per-date presentation overrides.
//!
//! Backgrounds, text colors and similar styling are owned by the host. A
//! [`DecorationTable`] is the lookup the renderer consults per cell; the
//! paging and selection logic never reads or writes it.
use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// A date-keyed table of style values.
#[derive(Debug, Clone)]
pub struct DecorationTable<S> {
    entries: FxHashMap<NaiveDate, S>,
}

impl<S> Default for DecorationTable<S> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<S> DecorationTable<S> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the style for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&S> {
        self.entries.get(&date)
    }

    /// Sets the style for `date`, returning the previous one.
    pub fn set(&mut self, date: NaiveDate, style: S) -> Option<S> {
        self.entries.insert(date, style)
    }

    /// Merges `entries` into the table.
    pub fn set_all(&mut self, entries: impl IntoIterator<Item = (NaiveDate, S)>) {
        self.entries.extend(entries);
    }

    /// Replaces the whole table with `entries`.
    ///
    /// An empty input is ignored and the current table is kept; returns
    /// whether the table was replaced.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = (NaiveDate, S)>) -> bool {
        let replacement: FxHashMap<_, _> = entries.into_iter().collect();
        if replacement.is_empty() {
            return false;
        }
        self.entries = replacement;
        true
    }

    /// Removes the style for `date`.
    pub fn clear(&mut self, date: NaiveDate) -> Option<S> {
        self.entries.remove(&date)
    }

    /// Removes the styles for every date in `dates`.
    pub fn clear_all(&mut self, dates: impl IntoIterator<Item = NaiveDate>) {
        for date in dates {
            self.entries.remove(&date);
        }
    }

    /// Removes every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &S)> {
        self.entries.iter().map(|(date, style)| (*date, style))
    }
}
