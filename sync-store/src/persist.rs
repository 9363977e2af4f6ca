//! Settings persistence for media-sync.
//!
//! The persistence substrate is an opaque synchronous key-value store.
//! Settings are serialized as one JSON blob under a single fixed key.
//! Loading is fail-open: a missing, corrupted, or room-less blob degrades
//! to freshly generated defaults, so a bad write can never break startup.

use media_sync_types::Settings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{error, warn};

/// Fixed storage key for the settings blob.
pub const SETTINGS_KEY: &str = "media-sync-settings";

/// Synchronous key-value store used as the persistence substrate.
///
/// Implementations provide whatever durability the host offers; the store
/// requires no atomicity beyond a plain overwriting write.
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, unconditionally overwriting.
    fn set(&self, key: &str, value: &str);
}

/// Load settings from the store, falling back to generated defaults.
///
/// Any parse failure is swallowed and treated as "absent"; a parsed record
/// without a non-empty `room` is also rejected.
pub fn load_settings(store: &dyn SettingsStore) -> Settings {
    if let Some(raw) = store.get(SETTINGS_KEY) {
        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) if !settings.room.is_empty() => return settings,
            Ok(_) => warn!("Stored settings have no room, regenerating"),
            Err(e) => warn!("Failed to parse stored settings: {}", e),
        }
    }
    Settings::generate()
}

/// Serialize and write the full settings record under the fixed key.
pub fn save_settings(store: &dyn SettingsStore, settings: &Settings) {
    match serde_json::to_string(settings) {
        Ok(raw) => store.set(SETTINGS_KEY, &raw),
        Err(e) => error!("Failed to serialize settings: {}", e),
    }
}

/// In-memory key-value store for tests and ephemeral embedders.
///
/// Not persistent - all data is lost when the store is dropped.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

/// File-backed key-value store holding one JSON object per file.
///
/// Reads fail open: an unreadable or malformed file behaves as empty.
/// Writes rewrite the whole file; errors are logged and swallowed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is created on first write; parent directories must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> HashMap<String, String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("Failed to parse store file {:?}: {}", self.path, e);
                HashMap::new()
            }
        }
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        match serde_json::to_string_pretty(&map) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    error!("Failed to write store file {:?}: {}", self.path, e);
                }
            }
            Err(e) => error!("Failed to serialize store file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_sync_types::DEFAULT_SERVER_URL;

    // ===========================================
    // load/save semantics
    // ===========================================

    #[test]
    fn load_without_record_generates_defaults() {
        let store = MemoryStore::new();

        let settings = load_settings(&store);

        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(!settings.room.is_empty());
        assert!(!settings.auto_connect);
        assert_eq!(settings.hotkey, "");
    }

    #[test]
    fn two_fresh_loads_generate_different_rooms() {
        let store = MemoryStore::new();

        let first = load_settings(&store);
        let second = load_settings(&store);

        assert_ne!(first.room, second.room);
    }

    #[test]
    fn load_from_corrupted_blob_behaves_as_absent() {
        let store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{not valid json!");

        let settings = load_settings(&store);

        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(!settings.room.is_empty());
    }

    #[test]
    fn load_without_room_regenerates() {
        let store = MemoryStore::new();
        store.set(
            SETTINGS_KEY,
            r#"{"serverUrl":"ws://kept","room":"","autoConnect":true,"hotkey":"x"}"#,
        );

        let settings = load_settings(&store);

        // The whole record is replaced, not patched
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(!settings.room.is_empty());
        assert!(!settings.auto_connect);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = MemoryStore::new();
        let settings = Settings {
            server_url: "ws://example.com".into(),
            room: "movie-night".into(),
            auto_connect: true,
            hotkey: "ctrl+alt+s".into(),
        };

        save_settings(&store, &settings);
        let loaded = load_settings(&store);

        assert_eq!(loaded, settings);
    }

    #[test]
    fn save_overwrites_previous_blob() {
        let store = MemoryStore::new();
        let mut settings = Settings::generate();
        save_settings(&store, &settings);

        settings.auto_connect = true;
        save_settings(&store, &settings);

        let loaded = load_settings(&store);
        assert!(loaded.auto_connect);
        assert_eq!(store.len(), 1);
    }

    // ===========================================
    // MemoryStore
    // ===========================================

    #[test]
    fn memory_store_get_set() {
        let store = MemoryStore::new();
        assert!(store.get("k").is_none());

        store.set("k", "v1");
        assert_eq!(store.get("k").as_deref(), Some("v1"));

        store.set("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));
    }

    #[test]
    fn memory_store_clone_shares_entries() {
        let store1 = MemoryStore::new();
        let store2 = store1.clone();

        store1.set("k", "v");

        assert_eq!(store2.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_clear() {
        let store = MemoryStore::new();
        store.set("k", "v");
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    // ===========================================
    // FileStore
    // ===========================================

    #[test]
    fn file_store_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        store.set("k", "v");

        assert_eq!(store.get("k").as_deref(), Some("v"));

        // A second handle on the same path sees the write
        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));

        assert!(store.get("k").is_none());
    }

    #[test]
    fn file_store_corrupted_file_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "garbage{{{").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("k").is_none());

        // Writing recovers the file
        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        store.set("a", "1");
        store.set("b", "2");

        assert_eq!(store.get("a").as_deref(), Some("1"));
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn settings_persist_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store.json"));

        let settings = load_settings(&store);
        save_settings(&store, &settings);

        let loaded = load_settings(&store);
        assert_eq!(loaded.room, settings.room);
    }
}
