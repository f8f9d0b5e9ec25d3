use crate::domain::{Name, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level store: one record per name. Owns its records exclusively
/// and iterates them in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<Name, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record under its name, returning any record it replaced.
    pub fn upsert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name().clone(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record for `name`; `None` when it was never there.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}
