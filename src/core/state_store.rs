use camino::Utf8Path;
use std::fs;
use tracing::debug;

use crate::models::error::SError;
use crate::models::state::ActivationState;

impl ActivationState {
    /// Reads the persisted record. Missing files are `NotFound`, anything
    /// that does not decode to exactly three flags is `Corrupt`.
    pub fn load(path: &Utf8Path) -> Result<Self, SError> {
        debug!(%path, "loading activation state");
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SError::NotFound(format!("state file {path}")));
            }
            Err(e) => return Err(SError::IOError(e.to_string())),
        };
        Self::decode(&bytes)
    }

    /// Overwrites the persisted record, creating its folder if needed.
    pub fn save(&self, path: &Utf8Path) -> Result<(), SError> {
        debug!(%path, state = ?self, "saving activation state");
        let bytes = self.encode()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SError::IOError(e.to_string()))?;
        }
        fs::write(path, bytes).map_err(|e| SError::IOError(e.to_string()))
    }

    pub fn encode(&self) -> Result<Vec<u8>, SError> {
        bincode::serialize(self).map_err(|e| SError::IOError(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SError> {
        let state: Self = bincode::deserialize(bytes)?;
        let expected = bincode::serialized_size(&state)?;
        if expected != bytes.len() as u64 {
            return Err(SError::Corrupt(format!(
                "expected {expected} bytes, found {}",
                bytes.len()
            )));
        }
        Ok(state)
    }
}
