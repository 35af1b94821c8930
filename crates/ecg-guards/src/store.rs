use std::collections::HashMap;

use triage_core::AnalysisRecord;
use uuid::Uuid;

/// Keeps finished analyses around for later lookup.
pub trait AnalysisStore {
    fn save(&mut self, record: AnalysisRecord) -> &AnalysisRecord;
    fn get(&self, id: &Uuid) -> Option<&AnalysisRecord>;
    fn all(&self) -> Vec<&AnalysisRecord>;
}

/// Process-local store. Saving an existing id replaces the record in place.
#[derive(Debug, Default)]
pub struct MemStore {
    records: Vec<AnalysisRecord>,
    index: HashMap<Uuid, usize>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AnalysisStore for MemStore {
    fn save(&mut self, record: AnalysisRecord) -> &AnalysisRecord {
        let slot = match self.index.get(&record.id) {
            Some(&slot) => {
                self.records[slot] = record;
                slot
            }
            None => {
                self.index.insert(record.id, self.records.len());
                self.records.push(record);
                self.records.len() - 1
            }
        };
        &self.records[slot]
    }

    fn get(&self, id: &Uuid) -> Option<&AnalysisRecord> {
        self.index.get(id).map(|&slot| &self.records[slot])
    }

    fn all(&self) -> Vec<&AnalysisRecord> {
        self.records.iter().collect()
    }
}
