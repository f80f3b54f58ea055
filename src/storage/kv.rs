use anyhow::{Context, Result, anyhow};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Persisted key for the employee roster (`Vec<Employee>`).
pub const EMPLOYEES_KEY: &str = "v_v_employees";
/// Persisted key for the attendance ledger (`Vec<AttendanceRecord>`).
pub const ATTENDANCE_KEY: &str = "v_v_attendance";
/// Persisted key for the month-lock map (`HashMap<String, bool>`).
pub const LOCKED_PAYROLLS_KEY: &str = "locked_payrolls";
/// Persisted key for confirmed payrolls (`HashMap<String, ConfirmedPayroll>`).
pub const CONFIRMED_PAYROLLS_KEY: &str = "confirmed_individual_payrolls";

/// Opaque key → string-blob persistence collaborator. The core treats writes
/// as synchronous: a `put` followed by a `get` of the same key returns the
/// written value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store; the default backing for tests and embedded use.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.lock().map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.inner.lock().map_err(|_| anyhow!("store lock poisoned"))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut map = self.inner.lock().map_err(|_| anyhow!("store lock poisoned"))?;
        map.remove(key);
        Ok(())
    }
}

/// File-per-key store under a data directory, the standalone-console analog
/// of browser local storage.
#[derive(Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        Ok(JsonFileStore { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants, never user input; a flat mapping is
        // enough.
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read key {key}")),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .with_context(|| format!("failed to write key {key}"))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("failed to remove key {key}")),
        }
    }
}
