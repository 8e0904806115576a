use super::{Amount, Entry, EntryId, EntryKind};

/// In-memory store of income and expense entries with their running totals.
///
/// Totals always match a fresh sum over the current entries:
/// `total == total_income - total_expense`.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Vec<Entry>,
    expenses: Vec<Entry>,
    total: Amount,
    total_income: Amount,
    total_expense: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted sequences, replaying them in order.
    pub fn from_entries(
        income: impl IntoIterator<Item = Entry>,
        expenses: impl IntoIterator<Item = Entry>,
    ) -> Self {
        let mut ledger = Self::new();
        for entry in income.into_iter().chain(expenses) {
            ledger.add_entry(entry);
        }
        ledger
    }

    /// Append an entry to the list of its kind and update the totals.
    /// Amount and description are not checked here.
    pub fn add_entry(&mut self, entry: Entry) {
        match entry.kind() {
            EntryKind::Income => {
                self.total_income += entry.amount();
                self.income.push(entry);
            }
            EntryKind::Expense => {
                self.total_expense += entry.amount();
                self.expenses.push(entry);
            }
        }
        self.total = self.total_income - self.total_expense;
    }

    /// Remove the entry with the given id.
    ///
    /// The total of the affected kind is summed again from the remaining
    /// entries rather than decremented. Unknown ids are a no-op and return `None`.
    pub fn remove_entry(&mut self, id: &EntryId) -> Option<Entry> {
        let list = self.list_mut(id.kind());
        let position = list.iter().position(|entry| entry.id() == *id)?;
        let removed = list.remove(position);

        let recomputed = sum_amounts(list);
        match id.kind() {
            EntryKind::Income => self.total_income = recomputed,
            EntryKind::Expense => self.total_expense = recomputed,
        }
        self.total = self.total_income - self.total_expense;

        Some(removed)
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn total_income(&self) -> Amount {
        self.total_income
    }

    pub fn total_expense(&self) -> Amount {
        self.total_expense
    }

    pub fn income_list(&self) -> &[Entry] {
        &self.income
    }

    pub fn expense_list(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.income,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.entries(id.kind()).iter().any(|entry| entry.id() == *id)
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    fn list_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.income,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

/// Sum of amounts, folded left to right from zero.
pub fn sum_amounts(entries: &[Entry]) -> Amount {
    entries.iter().fold(0.0, |sum, entry| sum + entry.amount())
}
