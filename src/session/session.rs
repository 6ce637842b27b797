use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Presentation state persisted between runs.
///
/// A flat record of the game being edited and when it was saved, stored as
/// JSON. Records older than [`SESSION_EXPIRY`] are ignored on load. The
/// engine itself keeps nothing on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    rows: usize,
    cols: usize,
    matrix: Matrix,
    /// Milliseconds since the UNIX epoch.
    timestamp: u64,
}

impl Session {
    /// Milliseconds since the UNIX epoch.
    pub fn now() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    }
    /// Same record, stamped at `timestamp`.
    pub fn stamped(self, timestamp: u64) -> Self {
        Self { timestamp, ..self }
    }
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
    /// Saved less than [`SESSION_EXPIRY`] before `now`.
    pub fn is_fresh(&self, now: u64) -> bool {
        now.saturating_sub(self.timestamp) < SESSION_EXPIRY.as_millis() as u64
    }
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string(self)?)?;
        log::debug!("saved {}×{} session to {}", self.rows, self.cols, path.display());
        Ok(())
    }
    /// Matrix of a fresh session at `path`, if there is one.
    pub fn load(path: &Path) -> anyhow::Result<Option<Matrix>> {
        if !path.exists() {
            return Ok(None);
        }
        let session = serde_json::from_str::<Self>(&std::fs::read_to_string(path)?)?;
        if session.matrix.dimensions() != (session.rows, session.cols) {
            return Err(anyhow::anyhow!(
                "session claims {}×{} but holds a {}×{} matrix",
                session.rows,
                session.cols,
                session.matrix.rows(),
                session.matrix.cols()
            ));
        }
        if session.is_fresh(Self::now()) {
            log::info!("restored {}×{} game from {}", session.rows, session.cols, path.display());
            Ok(Some(session.matrix))
        } else {
            log::info!("discarding expired session at {}", path.display());
            Ok(None)
        }
    }
}

impl From<&Matrix> for Session {
    fn from(matrix: &Matrix) -> Self {
        Self {
            rows: matrix.rows(),
            cols: matrix.cols(),
            matrix: matrix.clone(),
            timestamp: Self::now(),
        }
    }
}
