use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key the map access token is stored under. Fixed: the map page always
/// reads and writes the same entry.
pub const TOKEN_KEY: &str = "mapbox_token";

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("Token file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Token file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Token must not be empty")]
    EmptyToken,
}

/// File-persisted map access token, entered once by the user and reused
/// across sessions. Missing token means the map feature is blocked behind
/// a setup prompt, not broken.
pub struct MapTokenStore {
    path: PathBuf,
}

impl MapTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved token, or `None` when nothing was stored yet.
    pub fn load(&self) -> Result<Option<String>, TokenStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        Ok(entries.get(TOKEN_KEY).cloned())
    }

    pub fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if token.trim().is_empty() {
            return Err(TokenStoreError::EmptyToken);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut entries = BTreeMap::new();
        entries.insert(TOKEN_KEY.to_string(), token.trim().to_string());
        fs::write(&self.path, serde_json::to_vec_pretty(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapTokenStore::new(dir.path().join("map_token.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapTokenStore::new(dir.path().join("map_token.json"));

        store.save("pk.test-token").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("pk.test-token"));

        // Saving again overwrites the single entry.
        store.save("pk.other").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("pk.other"));
    }

    #[test]
    fn test_empty_token_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapTokenStore::new(dir.path().join("map_token.json"));
        assert!(matches!(
            store.save("   "),
            Err(TokenStoreError::EmptyToken)
        ));
    }
}
