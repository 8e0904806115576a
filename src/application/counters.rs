use crate::domain::{Entry, EntryId, EntryKind};

/// Next id sequence number per entry kind.
///
/// Rebuilt from stored entries on load (highest seen + 1) so ids minted
/// after a restart never collide with stored ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdCounters {
    income: u64,
    expense: u64,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut counters = Self::new();
        for entry in entries {
            counters.observe(&entry.id());
        }
        counters
    }

    /// The id the next entry of this kind will get. Does not advance.
    pub fn peek(&self, kind: EntryKind) -> EntryId {
        EntryId::new(kind, *self.slot(kind))
    }

    /// Make sure future ids of this kind sort after `id`.
    pub fn observe(&mut self, id: &EntryId) {
        let slot = self.slot_mut(id.kind());
        *slot = (*slot).max(id.seq().saturating_add(1));
    }

    fn slot(&self, kind: EntryKind) -> &u64 {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expense,
        }
    }

    fn slot_mut(&mut self, kind: EntryKind) -> &mut u64 {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expense,
        }
    }
}
