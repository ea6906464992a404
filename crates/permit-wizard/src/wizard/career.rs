use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on entries per career list.
pub const MAX_CAREER_ENTRIES: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerEntry {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub content: String,
}

impl CareerEntry {
    pub fn new(
        year: impl Into<String>,
        month: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            content: content.into(),
        }
    }

    fn with(&self, field: CareerField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            CareerField::Year => next.year = value,
            CareerField::Month => next.month = value,
            CareerField::Content => next.content = value,
        }
        next
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerField {
    Year,
    Month,
    Content,
}

#[derive(Debug, thiserror::Error)]
#[error("career history holds at most {max} entries, found {found}", max = MAX_CAREER_ENTRIES)]
pub struct CareerCapacityError {
    pub found: usize,
}

/// Ordered career entries in insertion order, never more than [`MAX_CAREER_ENTRIES`].
///
/// Edits return a new list; the receiver is left as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CareerEntry>", into = "Vec<CareerEntry>")]
pub struct CareerHistory {
    entries: Vec<CareerEntry>,
}

impl CareerHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from the first [`MAX_CAREER_ENTRIES`] entries of `entries`.
    pub fn from_entries(entries: impl IntoIterator<Item = CareerEntry>) -> Self {
        Self {
            entries: entries.into_iter().take(MAX_CAREER_ENTRIES).collect(),
        }
    }

    pub fn entries(&self) -> &[CareerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_CAREER_ENTRIES
    }

    /// Appends one blank entry, or returns an unchanged copy when full.
    pub fn appended(&self) -> Self {
        if self.is_full() {
            debug!(len = self.len(), "career history full, append ignored");
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.push(CareerEntry::default());
        Self { entries }
    }

    /// Drops the entry at 0-based `index`; later entries shift down. Out of range is a no-op.
    pub fn removed(&self, index: usize) -> Self {
        if index >= self.len() {
            debug!(index, len = self.len(), "career removal out of range ignored");
            return self.clone();
        }
        let entries = self
            .entries
            .iter()
            .enumerate()
            .filter(|(position, _)| *position != index)
            .map(|(_, entry)| entry.clone())
            .collect();
        Self { entries }
    }

    /// Replaces one field of one entry. Out of range is a no-op.
    pub fn with_field(&self, index: usize, field: CareerField, value: impl Into<String>) -> Self {
        if index >= self.len() {
            debug!(index, len = self.len(), ?field, "career update out of range ignored");
            return self.clone();
        }
        let value = value.into();
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                if position == index {
                    entry.with(field, value.clone())
                } else {
                    entry.clone()
                }
            })
            .collect();
        Self { entries }
    }
}

impl TryFrom<Vec<CareerEntry>> for CareerHistory {
    type Error = CareerCapacityError;

    fn try_from(entries: Vec<CareerEntry>) -> Result<Self, Self::Error> {
        if entries.len() > MAX_CAREER_ENTRIES {
            return Err(CareerCapacityError {
                found: entries.len(),
            });
        }
        Ok(Self { entries })
    }
}

impl From<CareerHistory> for Vec<CareerEntry> {
    fn from(value: CareerHistory) -> Self {
        value.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> CareerHistory {
        CareerHistory::from_entries(
            (0..count).map(|index| CareerEntry::new("2020", "4", format!("entry {index}"))),
        )
    }

    #[test]
    fn append_stops_at_capacity() {
        let mut history = CareerHistory::new();
        for _ in 0..MAX_CAREER_ENTRIES {
            history = history.appended();
        }
        assert_eq!(history.len(), MAX_CAREER_ENTRIES);
        assert!(history.is_full());

        let unchanged = history.appended();
        assert_eq!(unchanged, history);
    }

    #[test]
    fn removing_second_entry_shifts_later_entries_down() {
        // Indices are 0-based; entry 1 is the one labelled 職歴 2.
        let history = filled(3);
        let next = history.removed(1);

        assert_eq!(next.len(), 2);
        assert_eq!(next.entries()[0].content, "entry 0");
        assert_eq!(next.entries()[1].content, "entry 2");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let history = filled(2);
        assert_eq!(history.removed(5), history);
        assert_eq!(history.with_field(2, CareerField::Content, "x"), history);
    }

    #[test]
    fn with_field_touches_one_entry() {
        let history = filled(2).with_field(1, CareerField::Month, "12");
        assert_eq!(history.entries()[0].month, "4");
        assert_eq!(history.entries()[1].month, "12");
        assert_eq!(history.entries()[1].content, "entry 1");
    }

    #[test]
    fn deserializing_an_overlong_list_fails() {
        let entries: Vec<CareerEntry> = (0..7).map(|_| CareerEntry::default()).collect();
        let json = serde_json::to_string(&entries).expect("serialize entries");
        let parsed: Result<CareerHistory, _> = serde_json::from_str(&json);
        assert!(parsed.is_err());

        let truncated = CareerHistory::from_entries(entries);
        assert_eq!(truncated.len(), MAX_CAREER_ENTRIES);
    }
}
