//! In-memory session store

use super::{SessionStore, StoreError};
use crate::game::GameSession;
use rustc_hash::FxHashMap;

/// Sessions kept in a hash map for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: FxHashMap<String, GameSession>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, id: &str) -> Result<Option<GameSession>, StoreError> {
        Ok(self.sessions.get(id).cloned())
    }

    fn save(&mut self, id: &str, session: &GameSession) -> Result<(), StoreError> {
        self.sessions.insert(id.to_string(), session.clone());
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.sessions.remove(id);
        Ok(())
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
    fn save_load_remove() {
        let mut store = MemoryStore::new();
        assert!(store.load("a").unwrap().is_none());

        let mut game = session();
        store.save("a", &game).unwrap();
        assert_eq!(store.load("a").unwrap(), Some(game.clone()));

        // Last write wins
        game.submit("волна");
        store.save("a", &game).unwrap();
        assert_eq!(store.load("a").unwrap(), Some(game));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }
}
