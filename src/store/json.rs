//! JSON file session store
//!
//! One `<id>.json` file per session in a directory. Writes go to a temporary file
//! in the same directory that is then renamed over the target.

use super::{SessionStore, StoreError, validate_id};
use crate::game::GameSession;
use log::debug;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Sessions saved as JSON files
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Use `dir` for session files, creating it if needed
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Session directory: {}", dir.display());
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        Ok(self.dir.join(format!("{}.json", validate_id(id)?)))
    }
}

impl SessionStore for JsonFileStore {
    fn load(&self, id: &str) -> Result<Option<GameSession>, StoreError> {
        let path = self.path_for(id)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        debug!("Loading session from {}", path.display());
        let session = serde_json::from_reader(BufReader::new(file))?;
        Ok(Some(session))
    }

    fn save(&mut self, id: &str, session: &GameSession) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut writer = BufWriter::new(File::create(&tmp_path)?);
        serde_json::to_writer(&mut writer, session)?;
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp_path, &path)?;
        debug!("Saved session to {}", path.display());
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssociationTree, Orientation};

    fn session() -> GameSession {
        let tree = AssociationTree::from_words(
            1,
            vec!["море".into(), "волна".into(), "пляж".into()],
        )
        .unwrap();
        GameSession::new(&tree, Orientation::RootFirst)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("sessions")).unwrap();

        let mut game = session();
        game.hint();
        store.save("player", &game).unwrap();

        assert!(store.dir().join("player.json").exists());
        assert_eq!(store.load("player").unwrap(), Some(game));
    }

    #[test]
    fn missing_session_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();

        store.save("p", &session()).unwrap();
        store.remove("p").unwrap();
        store.remove("p").unwrap();
        assert!(store.load("p").unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();

        assert!(matches!(store.load("bad"), Err(StoreError::Serde(_))));
    }

    #[test]
    fn mismatched_display_grid_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();

        let mut value = serde_json::to_value(session()).unwrap();
        let deeper = AssociationTree::from_words(
            2,
            ["лес", "гриб", "ёлка", "шляпка", "корзина", "шишка", "ёж"]
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        )
        .unwrap();
        let deeper = GameSession::new(&deeper, Orientation::RootFirst);
        value["display"] = serde_json::to_value(deeper.display()).unwrap();
        fs::write(dir.path().join("tampered.json"), value.to_string()).unwrap();

        assert!(matches!(store.load("tampered"), Err(StoreError::Serde(_))));
    }

    #[test]
    fn rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.save("../escape", &session()),
            Err(StoreError::InvalidId(_))
        ));
    }
}
