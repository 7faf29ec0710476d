//! Camera file: the persisted snapshot of a camera stack.
//!
//! The file is a TOML document holding six parallel arrays indexed by slot:
//!
//! ```toml
//! ps = [0.0, 0.436]             # pitch
//! rs = [0.0, 0.0]               # roll
//! ys = [0.0, 0.785]             # yaw
//! ds = [500.0, 520.0]           # distance
//! fs = [75.0, 75.0]             # field of view
//! ts = [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]  # translation
//! ```
//!
//! The format is private to the viewer. Writes replace the whole file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::state::FOVY_RANGE;
use crate::error::EaselError;

/// Parallel per-slot arrays as stored in the camera file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CameraRecord {
    /// Pitch per slot.
    pub ps: Vec<f32>,
    /// Roll per slot.
    pub rs: Vec<f32>,
    /// Yaw per slot.
    pub ys: Vec<f32>,
    /// Distance per slot.
    pub ds: Vec<f32>,
    /// Field of view per slot.
    pub fs: Vec<f32>,
    /// Translation per slot.
    pub ts: Vec<[f32; 3]>,
}

impl CameraRecord {
    /// Number of slots, taken from the translation array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ts.len()
    }

    /// Whether the record holds no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ts.is_empty()
    }

    /// Check that every array has one entry per translation, every value is
    /// finite, distances are positive and fields of view lie inside
    /// [`FOVY_RANGE`].
    pub fn validate(&self) -> Result<(), String> {
        let n = self.len();
        if n == 0 {
            return Err("no camera slots".into());
        }
        let lengths = [
            ("ps", self.ps.len()),
            ("rs", self.rs.len()),
            ("ys", self.ys.len()),
            ("ds", self.ds.len()),
            ("fs", self.fs.len()),
        ];
        for (key, len) in lengths {
            if len != n {
                return Err(format!(
                    "array `{key}` has {len} entries, expected {n}"
                ));
            }
        }

        let scalars = [
            ("ps", &self.ps),
            ("rs", &self.rs),
            ("ys", &self.ys),
            ("ds", &self.ds),
            ("fs", &self.fs),
        ];
        for (key, values) in scalars {
            if let Some(i) = values.iter().position(|v| !v.is_finite()) {
                return Err(format!("`{key}[{i}]` is not finite"));
            }
        }
        let bad_translation = self
            .ts
            .iter()
            .position(|t| t.iter().any(|v| !v.is_finite()));
        if let Some(i) = bad_translation {
            return Err(format!("`ts[{i}]` is not finite"));
        }
        if let Some(i) = self.ds.iter().position(|&d| d <= 0.0) {
            return Err(format!(
                "`ds[{i}]` must be positive, got {}",
                self.ds[i]
            ));
        }
        let (lo, hi) = FOVY_RANGE;
        if let Some(i) = self.fs.iter().position(|&f| f <= lo || f >= hi) {
            return Err(format!(
                "`fs[{i}]` must lie in ({lo}, {hi}), got {}",
                self.fs[i]
            ));
        }
        Ok(())
    }
}

/// Reads and writes [`CameraRecord`]s at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraStore {
    path: PathBuf,
}

impl CameraStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the camera file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the camera file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `record`, replacing any existing file.
    pub fn save(&self, record: &CameraRecord) -> Result<(), EaselError> {
        let content = toml::to_string(record)
            .map_err(|e| self.file_error(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Read the record. Returns `Ok(None)` when no file exists.
    pub fn load(&self) -> Result<Option<CameraRecord>, EaselError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EaselError::Io(e)),
        };
        let record: CameraRecord = toml::from_str(&content)
            .map_err(|e| self.file_error(e.to_string()))?;
        record.validate().map_err(|reason| self.file_error(reason))?;
        Ok(Some(record))
    }

    fn file_error(&self, reason: String) -> EaselError {
        EaselError::CameraFile {
            path: self.path.clone(),
            reason,
        }
    }
}
