use super::HabitStore;
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// File-backed store: the whole collection as one JSON array.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "db.json".to_string())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(HabitzError::Io)?;
        }
        Ok(())
    }

    /// Move an unreadable document aside so rewriting it does not lose data.
    ///
    /// Returns `None` when the document is already gone, which happens when a
    /// concurrent request quarantined it first.
    fn quarantine(&self) -> Result<Option<PathBuf>> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let backup = self.dir().join(format!(
            "{}.corrupt-{}-{}",
            self.file_name(),
            stamp,
            Uuid::new_v4().simple()
        ));
        match fs::rename(&self.path, &backup) {
            Ok(()) => Ok(Some(backup)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HabitzError::Io(e)),
        }
    }

    /// Decode each record on its own so one unreadable entry does not take
    /// the rest of the collection down with it.
    fn decode_records(&self, records: Vec<serde_json::Value>) -> Vec<Habit> {
        let mut habits = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Habit>(record) {
                Ok(habit) => habits.push(habit),
                Err(err) => warn!(
                    path = %self.path.display(),
                    index,
                    error = %err,
                    "skipping unreadable habit record"
                ),
            }
        }
        habits
    }

    fn heal(&self) -> Result<Vec<Habit>> {
        self.save(&[])?;
        Ok(Vec::new())
    }
}

impl HabitStore for FileStore {
    fn load(&self) -> Result<Vec<Habit>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "habit document missing, starting empty");
                return self.heal();
            }
            Err(e) => return Err(HabitzError::Io(e)),
        };

        // Only invalid JSON or a non-array top level makes the document malformed
        match serde_json::from_slice::<Vec<serde_json::Value>>(&bytes) {
            Ok(records) => {
                let habits = self.decode_records(records);
                debug!(path = %self.path.display(), count = habits.len(), "loaded habits");
                Ok(habits)
            }
            Err(err) => {
                match self.quarantine()? {
                    Some(backup) => warn!(
                        path = %self.path.display(),
                        backup = %backup.display(),
                        error = %err,
                        "habit document is malformed, moved aside and reset to empty"
                    ),
                    None => debug!(
                        path = %self.path.display(),
                        "malformed habit document already moved aside"
                    ),
                }
                self.heal()
            }
        }
    }

    fn save(&self, habits: &[Habit]) -> Result<()> {
        let dir = self.dir();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(habits).map_err(HabitzError::Serialization)?;

        // Atomic write
        let tmp_file = dir.join(format!(".{}-{}.tmp", self.file_name(), Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(HabitzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(HabitzError::Io(e));
        }

        debug!(path = %self.path.display(), count = habits.len(), "saved habits");
        Ok(())
    }
}
