use super::{encode_users, DataStore};
use crate::error::{Result, UserStoreError};
use crate::model::User;
use std::io;

/// In-memory storage for testing.
/// Holds the store as bytes so parsing behaves exactly like the file store.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<Vec<u8>>,
}

impl InMemoryStore {
    /// A store whose backing content does not exist.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        self.content.clone().ok_or_else(|| {
            UserStoreError::file(
                "<memory>",
                io::Error::new(io::ErrorKind::NotFound, "store does not exist"),
            )
        })
    }

    fn save_users(&mut self, users: &[User]) -> Result<()> {
        self.content = Some(encode_users(users, false)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const SEED: &str = r#"[{"id":"1","email":"a@example.com","age":30}]"#;

    /// A store holding the single record `{"id":"1","email":"a@example.com","age":30}`.
    pub fn seeded_store() -> InMemoryStore {
        InMemoryStore::with_content(SEED)
    }
}
