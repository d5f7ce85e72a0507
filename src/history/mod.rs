use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::GeneratedQR;
use crate::common::{codec::ContentType, error::QRResult};
use crate::reader::ScanRecord;

// Storage backend
//------------------------------------------------------------------------------

/// Minimal string key-value surface the history persists through. Embedders
/// back it with whatever their platform offers; `MemoryStore` covers tests
/// and ephemeral use.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> QRResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> QRResult<()>;
    fn remove(&mut self, key: &str) -> QRResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> QRResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> QRResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> QRResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// History store
//------------------------------------------------------------------------------

pub const GENERATED_KEY: &str = "generated_qrs";
pub const SCANNED_KEY: &str = "scanned_qrs";

/// Each list keeps at most this many records; older ones fall off the end.
pub const HISTORY_CAP: usize = 50;

/// Persisted generate/scan history over a [`KeyValueStore`]. Records persist
/// newest-first as JSON arrays under fixed keys, in the field layout the
/// mobile app has always written.
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Releases the backing store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> QRResult<Vec<T>> {
        match self.store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, list: &[T]) -> QRResult<()> {
        let raw = serde_json::to_string(list)?;
        self.store.set(key, &raw)
    }

    pub fn record_generated(&mut self, qr: &GeneratedQR) -> QRResult<()> {
        let mut list: Vec<GeneratedQR> = self.read_list(GENERATED_KEY)?;
        list.insert(0, qr.clone());
        list.truncate(HISTORY_CAP);
        debug!("Recorded generated QR {{ Id: {} }}", qr.id);
        self.write_list(GENERATED_KEY, &list)
    }

    pub fn record_scanned(&mut self, scan: &ScanRecord) -> QRResult<()> {
        let mut list: Vec<ScanRecord> = self.read_list(SCANNED_KEY)?;
        list.insert(0, scan.clone());
        list.truncate(HISTORY_CAP);
        debug!("Recorded scan {{ Id: {} }}", scan.id);
        self.write_list(SCANNED_KEY, &list)
    }

    /// Generated records, newest first.
    pub fn generated(&self) -> QRResult<Vec<GeneratedQR>> {
        self.read_list(GENERATED_KEY)
    }

    /// Scan records, newest first.
    pub fn scanned(&self) -> QRResult<Vec<ScanRecord>> {
        self.read_list(SCANNED_KEY)
    }

    /// Removes the generated record with the given id. Returns whether a
    /// record was actually removed; the store is only rewritten on a hit.
    pub fn delete_generated(&mut self, id: &str) -> QRResult<bool> {
        let mut list: Vec<GeneratedQR> = self.read_list(GENERATED_KEY)?;
        let before = list.len();
        list.retain(|qr| qr.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.write_list(GENERATED_KEY, &list)?;
        Ok(true)
    }

    /// Removes the scan record with the given id. Returns whether a record
    /// was actually removed; the store is only rewritten on a hit.
    pub fn delete_scanned(&mut self, id: &str) -> QRResult<bool> {
        let mut list: Vec<ScanRecord> = self.read_list(SCANNED_KEY)?;
        let before = list.len();
        list.retain(|scan| scan.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.write_list(SCANNED_KEY, &list)?;
        Ok(true)
    }

    /// Drops both histories.
    pub fn clear(&mut self) -> QRResult<()> {
        self.store.remove(GENERATED_KEY)?;
        self.store.remove(SCANNED_KEY)
    }

    /// Merges both histories into one list, newest first.
    pub fn timeline(&self) -> QRResult<Vec<HistoryEntry>> {
        let mut entries: Vec<HistoryEntry> = self
            .generated()?
            .iter()
            .map(HistoryEntry::from_generated)
            .chain(self.scanned()?.iter().map(HistoryEntry::from_scanned))
            .collect();
        entries.sort_by(|a, b| b.at.cmp(&a.at));
        Ok(entries)
    }
}

// Timeline entry
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Generated,
    Scanned,
}

/// A row in the merged history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub source: EntrySource,
    pub title: String,
    pub payload: String,
    pub at: DateTime<Utc>,
    pub kind: ContentType,
}

impl HistoryEntry {
    fn from_generated(qr: &GeneratedQR) -> Self {
        let title = qr.title.clone().unwrap_or_else(|| qr.kind.label().to_string());
        Self {
            id: qr.id.clone(),
            source: EntrySource::Generated,
            title,
            payload: qr.payload.clone(),
            at: qr.created_at,
            kind: qr.kind,
        }
    }

    fn from_scanned(scan: &ScanRecord) -> Self {
        Self {
            id: scan.id.clone(),
            source: EntrySource::Scanned,
            title: "Scanned QR Code".to_string(),
            payload: scan.payload.clone(),
            at: scan.scanned_at,
            kind: scan.kind,
        }
    }
}

// Relative age
//------------------------------------------------------------------------------

/// Coarse age of a record for list display: "Just now" under an hour,
/// hours under a day, days under a week, then the plain date. Future
/// timestamps read as "Just now".
pub fn relative_age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let hours = elapsed.num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else if elapsed.num_days() < 7 {
        format!("{} days ago", elapsed.num_days())
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}
