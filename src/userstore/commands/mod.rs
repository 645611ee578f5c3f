use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// Outcome of a store operation.
///
/// `listing` carries raw store bytes (only `list` sets it), `found` the
/// result of a lookup, `affected_users` the records added or removed.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listing: Option<Vec<u8>>,
    pub found: Option<User>,
    pub affected_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listing(mut self, bytes: Vec<u8>) -> Self {
        self.listing = Some(bytes);
        self
    }

    pub fn with_found(mut self, user: Option<User>) -> Self {
        self.found = user;
        self
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }
}
