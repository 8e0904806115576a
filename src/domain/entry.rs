use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Amount;

/// Which side of the budget an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "inc")]
    Income,
    #[serde(rename = "exp")]
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    /// Short tag used in persisted records ("inc" / "exp").
    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Income => "inc",
            EntryKind::Expense => "exp",
        }
    }

    /// Prefix of the textual entry id ("income-3", "expense-0").
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Key the sequence of this kind is stored under.
    pub fn storage_key(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expenses",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id_prefix())
    }
}

/// Identifier of an entry, rendered as `<kind>-<seq>`.
///
/// The kind is part of the id, so an id alone is enough to route a removal
/// to the right sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId {
    kind: EntryKind,
    seq: u64,
}

impl EntryId {
    pub fn new(kind: EntryKind, seq: u64) -> Self {
        Self { kind, seq }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.id_prefix(), self.seq)
    }
}

impl FromStr for EntryId {
    type Err = ParseEntryIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, seq) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ParseEntryIdError(s.to_string()))?;

        let kind = EntryKind::ALL
            .into_iter()
            .find(|kind| kind.id_prefix() == prefix)
            .ok_or_else(|| ParseEntryIdError(s.to_string()))?;
        // Only the canonical form: digits, no sign, no leading zeros.
        let canonical = !seq.is_empty()
            && seq.bytes().all(|b| b.is_ascii_digit())
            && (seq == "0" || !seq.starts_with('0'));
        if !canonical {
            return Err(ParseEntryIdError(s.to_string()));
        }
        let seq = seq.parse().map_err(|_| ParseEntryIdError(s.to_string()))?;

        Ok(Self { kind, seq })
    }
}

impl TryFrom<String> for EntryId {
    type Error = ParseEntryIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEntryIdError(String);

impl fmt::Display for ParseEntryIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid entry id '{}' (expected income-<n> or expense-<n>)",
            self.0
        )
    }
}

impl std::error::Error for ParseEntryIdError {}

/// A single income or expense record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntryRecord")]
pub struct Entry {
    id: EntryId,
    kind: EntryKind,
    description: String,
    amount: Amount,
}

impl Entry {
    /// Build an entry. The kind is taken from the id.
    ///
    /// No validation happens here: callers check description and amount
    /// before minting an id (see `EntryDraft::validate`).
    pub fn new(id: EntryId, description: impl Into<String>, amount: Amount) -> Self {
        Self {
            id,
            kind: id.kind(),
            description: description.into(),
            amount,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

// Wire shape of an entry. Older records carry the tag under `type`.
#[derive(Deserialize)]
struct EntryRecord {
    id: EntryId,
    #[serde(alias = "type")]
    kind: EntryKind,
    description: String,
    amount: Amount,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = KindMismatchError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        if record.kind != record.id.kind() {
            return Err(KindMismatchError {
                id: record.id,
                kind: record.kind,
            });
        }
        Ok(Entry::new(record.id, record.description, record.amount))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindMismatchError {
    id: EntryId,
    kind: EntryKind,
}

impl fmt::Display for KindMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry {} is tagged '{}'", self.id, self.kind.tag())
    }
}

impl std::error::Error for KindMismatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_display_and_parse() {
        let id = EntryId::new(EntryKind::Expense, 12);
        assert_eq!(id.to_string(), "expense-12");
        assert_eq!("expense-12".parse::<EntryId>(), Ok(id));
        assert_eq!(
            "income-0".parse::<EntryId>(),
            Ok(EntryId::new(EntryKind::Income, 0))
        );
    }

    #[test]
    fn test_entry_id_parse_invalid() {
        assert!("expenses-1".parse::<EntryId>().is_err());
        assert!("income".parse::<EntryId>().is_err());
        assert!("income-".parse::<EntryId>().is_err());
        assert!("income--1".parse::<EntryId>().is_err());
        assert!("savings-3".parse::<EntryId>().is_err());
    }

    #[test]
    fn test_entry_id_parse_rejects_non_canonical_suffix() {
        assert!("income-007".parse::<EntryId>().is_err());
        assert!("income-00".parse::<EntryId>().is_err());
        assert!("income-+3".parse::<EntryId>().is_err());
        assert!("expense-1_000".parse::<EntryId>().is_err());
        assert_eq!(
            "expense-10".parse::<EntryId>(),
            Ok(EntryId::new(EntryKind::Expense, 10))
        );
    }

    #[test]
    fn test_stored_non_canonical_id_is_rejected() {
        let json = r#"{"id":"income-007","kind":"inc","description":"Salary","amount":1}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }

    #[test]
    fn test_entry_takes_kind_from_id() {
        let entry = Entry::new(EntryId::new(EntryKind::Income, 0), "Salary", 1000.0);
        assert_eq!(entry.kind(), EntryKind::Income);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = Entry::new(EntryId::new(EntryKind::Expense, 0), "Rent", 400.0);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "expense-0",
                "kind": "exp",
                "description": "Rent",
                "amount": 400.0
            })
        );
    }

    #[test]
    fn test_entry_accepts_legacy_type_field() {
        let json = r#"{"id":"income-2","type":"inc","description":"Bonus","amount":250}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id(), EntryId::new(EntryKind::Income, 2));
        assert_eq!(entry.amount(), 250.0);
    }

    #[test]
    fn test_entry_rejects_tag_prefix_mismatch() {
        let json = r#"{"id":"income-2","kind":"exp","description":"Bonus","amount":250}"#;
        assert!(serde_json::from_str::<Entry>(json).is_err());
    }
}
