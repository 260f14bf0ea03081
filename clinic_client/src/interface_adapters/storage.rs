use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::ports::SessionStore;

const STORAGE_FILE: &str = "session.json";

// In-memory session store adapter, for embedders and tests.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    pub values: Arc<Mutex<HashMap<String, String>>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let values = self.values.lock().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        let mut values = self.values.lock().await;
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, String> {
        let mut values = self.values.lock().await;
        Ok(values.remove(key).is_some())
    }
}

/// Key-value store persisted as a single JSON object file.
///
/// Plays the part of browser local storage for the command-line client:
/// every value is an opaque string, a missing file is an empty store, and
/// each write replaces the whole file through a rename.
#[derive(Clone)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl FileSessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // None when the file does not exist yet.
    async fn read(&self) -> Result<Option<String>, String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("read {}: {err}", self.path.display())),
        }
    }

    fn parse(&self, raw: &str) -> Result<BTreeMap<String, String>, String> {
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(raw).map_err(|err| format!("parse {}: {err}", self.path.display()))
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, String> {
        match self.read().await? {
            Some(raw) => self.parse(&raw),
            None => Ok(BTreeMap::new()),
        }
    }

    // Writers replace a corrupt file instead of failing on it. The flag is set
    // when the previous contents were discarded.
    async fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), String> {
        let Some(raw) = self.read().await? else {
            return Ok((BTreeMap::new(), false));
        };
        match self.parse(&raw) {
            Ok(values) => Ok((values, false)),
            Err(err) => {
                tracing::warn!(error = %err, "session file is unreadable, resetting it.");
                Ok((BTreeMap::new(), true))
            }
        }
    }

    async fn save(&self, values: &BTreeMap<String, String>) -> Result<(), String> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|err| format!("create {}: {err}", dir.display()))?;
        }
        let raw = serde_json::to_string_pretty(values).map_err(|err| err.to_string())?;

        // Write beside the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|err| format!("write {}: {err}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| format!("rename {}: {err}", self.path.display()))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let _guard = self.lock.lock().await;
        let mut values = self.load().await?;
        Ok(values.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), String> {
        let _guard = self.lock.lock().await;
        let (mut values, _) = self.load_for_write().await?;
        values.insert(key.to_string(), value);
        self.save(&values).await
    }

    async fn remove(&self, key: &str) -> Result<bool, String> {
        let _guard = self.lock.lock().await;
        let (mut values, reset) = self.load_for_write().await?;
        let removed = values.remove(key).is_some();
        if !removed && !reset {
            return Ok(false);
        }
        self.save(&values).await?;
        Ok(true)
    }
}
