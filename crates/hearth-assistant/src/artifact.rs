//! Routine artifact persistence.
//!
//! One JSON file per routine type, named `<routine_type>_routine.json`,
//! overwritten on each successful generation (last write wins — no
//! versioning, no locking). Failed generations never touch an existing
//! artifact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Writes decoded routine payloads to the artifact directory.
#[derive(Debug, Clone)]
pub struct RoutineArtifactStore {
    dir: PathBuf,
}

impl RoutineArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the artifact for a routine type. The type string is
    /// interpolated verbatim into the file name, as the artifact contract
    /// requires.
    pub fn path_for(&self, routine_type: &str) -> PathBuf {
        self.dir.join(format!("{routine_type}_routine.json"))
    }

    /// Persist a decoded routine payload, pretty-printed, overwriting any
    /// prior artifact of the same routine type.
    pub fn save(&self, routine_type: &str, routine: &Value) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(routine_type);
        let pretty = serde_json::to_vec_pretty(routine)?;
        fs::write(&path, pretty)?;
        tracing::info!(path = %path.display(), "routine artifact saved");
        Ok(path)
    }

    /// Read back a previously saved artifact.
    pub fn load(&self, routine_type: &str) -> io::Result<Value> {
        let bytes = fs::read(self.path_for(routine_type))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
