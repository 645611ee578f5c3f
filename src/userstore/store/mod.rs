//! # Storage Layer
//!
//! The [`DataStore`] trait separates the record operations in `commands/`
//! from where the JSON array actually lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the store file on disk
//!   - Reads open the file anew on every call, nothing is cached
//!   - Writes go to a temporary sibling file which is then renamed over the store
//!
//! - [`memory::InMemoryStore`]: byte buffer for tests
//!   - Same parsing and encoding rules as the file store
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@example.com","age":30},{"id":"2","email":"b@example.com","age":12}]
//! ```
//!
//! An empty (or whitespace-only) store reads as an empty array.

use crate::error::Result;
use crate::model::User;

pub mod fs;
pub mod memory;

/// Abstract interface for the record store.
pub trait DataStore {
    /// Return the stored bytes exactly as they are, without parsing
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Parse the store into its records, in stored order
    fn load_users(&self) -> Result<Vec<User>> {
        parse_users(&self.read_raw()?)
    }

    /// Replace the store contents with the given records
    fn save_users(&mut self, users: &[User]) -> Result<()>;
}

pub(crate) fn parse_users(bytes: &[u8]) -> Result<Vec<User>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub(crate) fn encode_users(users: &[User], pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(users)?
    } else {
        serde_json::to_vec(users)?
    };
    Ok(bytes)
}
