use std::sync::{Arc, Mutex, MutexGuard};

use sha1::{Digest, Sha1};

use crate::collection::{DocumentStore, StoreError};
use crate::models::{RecordId, StudentFields, StudentRecord};

/// Length of generated document ids, in hex characters.
const ID_LEN: usize = 20;

/// In-memory DocumentStore for tests and local fallback.
///
/// Documents keep insertion order. Clones share the same collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Documents>>,
}

#[derive(Debug, Default)]
struct Documents {
    entries: Vec<StudentRecord>,
    next_seq: u64,
}

impl Documents {
    /// Ids are derived from a per-store sequence number so they never repeat,
    /// even after the document that held one is deleted.
    fn next_id(&mut self) -> RecordId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let digest = Sha1::digest(format!("students/{seq}").as_bytes());
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        RecordId::new(&hex[..ID_LEN])
    }

    fn position(&self, id: &RecordId) -> Result<usize, StoreError> {
        self.entries
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().map(|docs| docs.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, Documents>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl DocumentStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<StudentRecord>, StoreError> {
        Ok(self.lock()?.entries.clone())
    }

    async fn insert(&self, fields: StudentFields) -> Result<RecordId, StoreError> {
        let mut docs = self.lock()?;
        let id = docs.next_id();
        docs.entries.push(StudentRecord::new(id.clone(), fields));
        Ok(id)
    }

    async fn replace(&self, id: &RecordId, fields: StudentFields) -> Result<(), StoreError> {
        let mut docs = self.lock()?;
        let index = docs.position(id)?;
        docs.entries[index].fields = fields;
        Ok(())
    }

    async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        let mut docs = self.lock()?;
        let index = docs.position(id)?;
        docs.entries.remove(index);
        Ok(())
    }
}
