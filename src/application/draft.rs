use crate::domain::{parse_amount, Amount, Entry, EntryId, EntryKind, ParseAmountError};

use super::AppError;

/// Raw request to record an entry, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub description: String,
    pub amount: Amount,
}

impl EntryDraft {
    pub fn new(kind: EntryKind, description: impl Into<String>, amount: Amount) -> Self {
        Self {
            kind,
            description: description.into().trim().to_string(),
            amount,
        }
    }

    /// Build a draft from form input, parsing and validating the amount text.
    pub fn parse(kind: EntryKind, description: &str, amount: &str) -> Result<Self, AppError> {
        let draft = Self::new(kind, description, parse_amount(amount)?);
        draft.validate()?;
        Ok(draft)
    }

    /// A draft needs a description and a finite, non-negative amount.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.description.is_empty() {
            return Err(AppError::EmptyDescription);
        }
        if !self.amount.is_finite() {
            return Err(ParseAmountError::InvalidFormat.into());
        }
        if self.amount < 0.0 {
            return Err(ParseAmountError::Negative.into());
        }
        Ok(())
    }

    pub(crate) fn into_entry(self, seq: u64) -> Entry {
        Entry::new(EntryId::new(self.kind, seq), self.description, self.amount)
    }
}
