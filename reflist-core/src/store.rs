//! The reference list: rendered citations with their source values, persisted
//! as one JSON array under a single key.
//!
//! Entries are addressed by a stable [`EntryId`] rather than by position, so
//! sorting or removing entries never retargets an edit.

use crate::kv::KeyValueStore;
use crate::registry::{registry, FormatError};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use once_cell::sync::Lazy;
use reflist_types::{EntryId, FieldValues};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Stored reference list is malformed: {0}")]
    MalformedPersistedState(#[source] serde_json::Error),

    #[error("No reference with id '{0}'")]
    UnknownEntry(String),

    #[error("Id '{prefix}' matches {count} references; use more characters")]
    AmbiguousId { prefix: String, count: usize },

    #[error("Storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize reference list: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// One produced citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Absent in lists written before ids existed; such entries get a fresh one.
    #[serde(default = "fresh_id")]
    pub id: EntryId,
    pub text: String,
    #[serde(rename = "type")]
    pub type_key: String,
    pub data: FieldValues,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

fn fresh_id() -> EntryId {
    EntryId::new(Uuid::new_v4().to_string())
}

impl ReferenceEntry {
    /// Text with markup removed, lowercased; the ordering key of [`ReferenceStore::list`].
    pub fn sort_key(&self) -> String {
        TAG.replace_all(&self.text, "").to_lowercase()
    }
}

/// Normalize raw input for `type_key`, render it, and stamp it with a new id.
///
/// Timestamps are kept to millisecond precision, the resolution they persist at.
fn new_entry(
    type_key: String,
    raw: &FieldValues,
    now: DateTime<Utc>,
) -> Result<ReferenceEntry, FormatError> {
    let (text, data) = render(&type_key, raw)?;
    Ok(ReferenceEntry {
        id: fresh_id(),
        text,
        type_key,
        data,
        timestamp: now.trunc_subsecs(3),
    })
}

fn render(type_key: &str, raw: &FieldValues) -> Result<(String, FieldValues), FormatError> {
    let spec = registry().get(type_key)?;
    let values = spec.normalize(raw)?;
    let text = spec.render(&values)?;
    Ok((text, values))
}

pub struct ReferenceStore<K> {
    kv: K,
    key: String,
    retention: Duration,
    entries: Vec<ReferenceEntry>,
}

impl<K: KeyValueStore> ReferenceStore<K> {
    /// An empty store; call [`load`](Self::load) to read persisted entries.
    pub fn new(kv: K, key: impl Into<String>, retention: Duration) -> Self {
        Self {
            kv,
            key: key.into(),
            retention,
            entries: Vec::new(),
        }
    }

    /// Create a store and load its persisted entries.
    pub fn open(kv: K, key: impl Into<String>, retention: Duration) -> Result<Self, StoreError> {
        let mut store = Self::new(kv, key, retention);
        store.load()?;
        Ok(store)
    }

    pub fn load(&mut self) -> Result<(), StoreError> {
        self.load_at(Utc::now())
    }

    /// Replace the in-memory list with the persisted one, dropping entries
    /// whose age at `now` has reached the retention window, then write the
    /// filtered list back.
    pub fn load_at(&mut self, now: DateTime<Utc>) -> Result<(), StoreError> {
        let Some(raw) = self.kv.get(&self.key)? else {
            self.entries.clear();
            return Ok(());
        };
        let stored: Vec<ReferenceEntry> =
            serde_json::from_str(&raw).map_err(StoreError::MalformedPersistedState)?;
        let total = stored.len();
        let retention = self.retention;
        let kept: Vec<ReferenceEntry> = stored
            .into_iter()
            .filter(|entry| now - entry.timestamp < retention)
            .collect();
        if kept.len() < total {
            warn!(expired = total - kept.len(), "dropped expired references");
        }
        self.commit(kept)?;
        info!(entries = self.entries.len(), key = %self.key, "loaded references");
        Ok(())
    }

    /// Write the current list to the backing store.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.entries).map_err(StoreError::Serialize)?;
        self.kv.set(&self.key, &json)?;
        Ok(())
    }

    /// Persist `next` and adopt it only once the write has succeeded.
    fn commit(&mut self, next: Vec<ReferenceEntry>) -> Result<(), StoreError> {
        let json = serde_json::to_string(&next).map_err(StoreError::Serialize)?;
        self.kv.set(&self.key, &json)?;
        self.entries = next;
        Ok(())
    }

    pub fn add(&mut self, type_key: &str, raw: &FieldValues) -> Result<EntryId, StoreError> {
        self.add_at(type_key, raw, Utc::now())
    }

    pub fn add_at(
        &mut self,
        type_key: &str,
        raw: &FieldValues,
        now: DateTime<Utc>,
    ) -> Result<EntryId, StoreError> {
        let entry = new_entry(type_key.to_string(), raw, now)?;
        let id = entry.id.clone();
        let mut next = self.entries.clone();
        next.push(entry);
        self.commit(next)?;
        info!(id = %id.short(), type_key, "added reference");
        Ok(id)
    }

    /// Add several entries at once; none are kept if any fails to render.
    pub fn import(
        &mut self,
        drafts: Vec<(String, FieldValues)>,
    ) -> Result<Vec<EntryId>, StoreError> {
        self.import_at(drafts, Utc::now())
    }

    pub fn import_at(
        &mut self,
        drafts: Vec<(String, FieldValues)>,
        now: DateTime<Utc>,
    ) -> Result<Vec<EntryId>, StoreError> {
        let mut next = self.entries.clone();
        let mut ids = Vec::with_capacity(drafts.len());
        for (type_key, raw) in drafts {
            let entry = new_entry(type_key, &raw, now)?;
            ids.push(entry.id.clone());
            next.push(entry);
        }
        self.commit(next)?;
        info!(count = ids.len(), "imported references");
        Ok(ids)
    }

    /// Re-render an entry from new raw values, keeping its id and timestamp.
    pub fn update(
        &mut self,
        id: &EntryId,
        type_key: &str,
        raw: &FieldValues,
    ) -> Result<(), StoreError> {
        let pos = self.position(id)?;
        let (text, data) = render(type_key, raw)?;
        let mut next = self.entries.clone();
        let entry = &mut next[pos];
        entry.text = text;
        entry.type_key = type_key.to_string();
        entry.data = data;
        self.commit(next)?;
        info!(id = %id.short(), "updated reference");
        Ok(())
    }

    pub fn remove(&mut self, id: &EntryId) -> Result<ReferenceEntry, StoreError> {
        let pos = self.position(id)?;
        let mut next = self.entries.clone();
        let removed = next.remove(pos);
        self.commit(next)?;
        info!(id = %id.short(), "removed reference");
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(Vec::new())?;
        info!(key = %self.key, "cleared reference list");
        Ok(())
    }

    pub fn get(&self, id: &EntryId) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Resolve a user-typed id prefix to the single entry id it names.
    pub fn resolve(&self, prefix: &str) -> Result<EntryId, StoreError> {
        let matches: Vec<&ReferenceEntry> = self
            .entries
            .iter()
            .filter(|entry| !prefix.is_empty() && entry.id.as_str().starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [only] => Ok(only.id.clone()),
            [] => Err(StoreError::UnknownEntry(prefix.to_string())),
            _ => Err(StoreError::AmbiguousId {
                prefix: prefix.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Entries ordered by markup-free, case-insensitive text; ties keep
    /// insertion order.
    pub fn list(&self) -> Vec<&ReferenceEntry> {
        let mut sorted: Vec<(String, &ReferenceEntry)> = self
            .entries
            .iter()
            .map(|entry| (entry.sort_key(), entry))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        sorted.into_iter().map(|(_, entry)| entry).collect()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn backend(&self) -> &K {
        &self.kv
    }

    fn position(&self, id: &EntryId) -> Result<usize, StoreError> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| StoreError::UnknownEntry(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};

    const KEY: &str = "iie_references";

    fn store() -> ReferenceStore<MemoryStore> {
        ReferenceStore::new(MemoryStore::new(), KEY, Duration::days(30))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    fn cd(artist: &str) -> FieldValues {
        [
            ("artist", artist),
            ("year", "1994"),
            ("title", "Definitely maybe"),
            ("city", "Manchester"),
            ("label", "Creation Records"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_add_renders_and_persists() {
        let mut store = store();
        let id = store.add_at("cd", &cd("Oasis"), now()).unwrap();

        let entry = store.get(&id).unwrap();
        assert_eq!(
            entry.text,
            "Oasis, 1994. <em>Definitely maybe</em>. [CD] Manchester: Creation Records."
        );
        assert_eq!(entry.type_key, "cd");
        assert_eq!(entry.timestamp, now());

        let raw = store.backend().get(KEY).unwrap().unwrap();
        assert!(raw.contains("\"type\":\"cd\""));
        assert!(raw.contains(&format!("\"timestamp\":{}", now().timestamp_millis())));
    }

    #[test]
    fn test_add_failure_leaves_store_unchanged() {
        let mut store = store();
        store.add_at("cd", &cd("Oasis"), now()).unwrap();
        let err = store
            .add_at("cd", &[("artist", "Blur")].into_iter().collect(), now())
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Format(FormatError::MissingRequiredField { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_keeps_id_and_timestamp() {
        let mut store = store();
        let id = store.add_at("cd", &cd("Oasis"), now()).unwrap();
        store.update(&id, "cd", &cd("Blur")).unwrap();

        let entry = store.get(&id).unwrap();
        assert!(entry.text.starts_with("Blur, 1994."));
        assert_eq!(entry.timestamp, now());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = store();
        let err = store
            .update(&EntryId::from("missing"), "cd", &cd("Oasis"))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownEntry(_)));
    }

    #[test]
    fn test_remove_by_id_survives_reordering() {
        let mut store = store();
        let zed = store.add_at("cd", &cd("Zed"), now()).unwrap();
        let abba = store.add_at("cd", &cd("Abba"), now()).unwrap();
        assert_eq!(store.list()[0].id, abba);

        store.remove(&zed).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(&abba).is_some());
    }

    #[test]
    fn test_list_sorted_ignoring_markup_and_case() {
        let mut store = store();
        store.add_at("cd", &cd("beta"), now()).unwrap();
        store.add_at("cd", &cd("Alpha"), now()).unwrap();
        store.add_at("cd", &cd("<b>Gamma</b>"), now()).unwrap();
        let order: Vec<_> = store
            .list()
            .iter()
            .map(|e| e.data.get("artist").to_string())
            .collect();
        assert_eq!(order, vec!["Alpha", "beta", "<b>Gamma</b>"]);
    }

    #[test]
    fn test_list_is_stable() {
        let mut store = store();
        let first = store.add_at("cd", &cd("Same"), now()).unwrap();
        let second = store.add_at("cd", &cd("same"), now()).unwrap();
        let ids: Vec<_> = store.list().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_round_trip() {
        let mut store = store();
        store.add_at("cd", &cd("Oasis"), now()).unwrap();
        store.add_at("cd", &cd("Blur"), now()).unwrap();
        store.persist().unwrap();

        let mut reopened = ReferenceStore::new(store.backend().clone(), KEY, Duration::days(30));
        reopened.load_at(now()).unwrap();
        assert_eq!(reopened.entries(), store.entries());
    }

    #[test]
    fn test_retention_sweep() {
        let mut store = store();
        let old = store
            .add_at("cd", &cd("Old"), now() - Duration::days(31))
            .unwrap();
        let recent = store
            .add_at("cd", &cd("Recent"), now() - Duration::days(29))
            .unwrap();

        let mut reopened = ReferenceStore::new(store.backend().clone(), KEY, Duration::days(30));
        reopened.load_at(now()).unwrap();
        assert!(reopened.get(&old).is_none());
        assert!(reopened.get(&recent).is_some());

        let raw = reopened.backend().get(KEY).unwrap().unwrap();
        assert!(!raw.contains(old.as_str()));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Plain-text log lines emitted while `f` runs.
    fn logged(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn has_line(log: &str, level: &str, message: &str) -> bool {
        log.lines()
            .any(|line| line.contains(level) && line.contains(message))
    }

    #[test]
    fn test_log_levels() {
        let mut store = store();
        let log = logged(|| {
            let id = store
                .add_at("cd", &cd("Old"), now() - Duration::days(31))
                .unwrap();
            store.update(&id, "cd", &cd("Older")).unwrap();
            let keep = store.add_at("cd", &cd("Recent"), now()).unwrap();
            store.remove(&keep).unwrap();
            store.add_at("cd", &cd("Kept"), now()).unwrap();
        });
        assert!(has_line(&log, "INFO", "added reference"), "{}", log);
        assert!(has_line(&log, "INFO", "updated reference"), "{}", log);
        assert!(has_line(&log, "INFO", "removed reference"), "{}", log);

        let mut reopened = ReferenceStore::new(store.backend().clone(), KEY, Duration::days(30));
        let log = logged(|| reopened.load_at(now()).unwrap());
        assert!(has_line(&log, "WARN", "dropped expired references"), "{}", log);
        assert!(has_line(&log, "INFO", "loaded references"), "{}", log);
        assert_eq!(reopened.len(), 1);
    }

    #[test]
    fn test_exactly_at_window_expires() {
        let mut store = store();
        store
            .add_at("cd", &cd("Edge"), now() - Duration::days(30))
            .unwrap();
        let mut reopened = ReferenceStore::new(store.backend().clone(), KEY, Duration::days(30));
        reopened.load_at(now()).unwrap();
        assert!(reopened.is_empty());
    }

    #[test]
    fn test_legacy_entries_without_ids_load() {
        let mut kv = MemoryStore::new();
        let legacy = format!(
            r#"[{{"text":"A","type":"cd","data":{{"artist":"A"}},"timestamp":{}}}]"#,
            now().timestamp_millis()
        );
        kv.set(KEY, &legacy).unwrap();

        let mut store = ReferenceStore::new(kv, KEY, Duration::days(30));
        store.load_at(now()).unwrap();
        assert_eq!(store.len(), 1);
        let id = store.entries()[0].id.clone();
        assert!(!id.as_str().is_empty());

        let raw = store.backend().get(KEY).unwrap().unwrap();
        assert!(raw.contains(id.as_str()));
    }

    #[test]
    fn test_malformed_state_fails_and_is_kept() {
        let mut kv = MemoryStore::new();
        kv.set(KEY, "{not json").unwrap();
        let mut store = ReferenceStore::new(kv, KEY, Duration::days(30));
        let err = store.load_at(now()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedPersistedState(_)));
        assert_eq!(store.backend().get(KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_resolve_prefix() {
        let mut store = store();
        let id = store.add_at("cd", &cd("Oasis"), now()).unwrap();
        assert_eq!(store.resolve(id.short()).unwrap(), id);
        assert!(matches!(
            store.resolve("zzzzzzzz-not-an-id"),
            Err(StoreError::UnknownEntry(_))
        ));
        assert!(matches!(store.resolve(""), Err(StoreError::UnknownEntry(_))));
    }

    #[test]
    fn test_clear() {
        let mut store = store();
        store.add_at("cd", &cd("Oasis"), now()).unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.backend().get(KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_import_is_all_or_nothing() {
        let mut store = store();
        let err = store
            .import_at(
                vec![
                    ("cd".to_string(), cd("Oasis")),
                    ("pamphlet".to_string(), FieldValues::new()),
                ],
                now(),
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::Format(FormatError::UnknownTypeKey(_))));
        assert!(store.is_empty());
        assert_eq!(store.backend().get(KEY).unwrap(), None);
    }
}
