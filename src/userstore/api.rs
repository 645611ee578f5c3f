//! # API Facade
//!
//! Single entry point for store operations, whatever the front end.
//!
//! - [`perform`] takes the normalized invocation [`Arguments`] and the
//!   [`StoreConfig`], opens the [`FileStore`] named by `fileName` and
//!   dispatches the requested operation.
//! - [`UserStoreApi`] is generic over [`DataStore`] so dispatch can be
//!   tested against `InMemoryStore` without touching the filesystem.
//!
//! Nothing here writes to stdout or stderr; results come back as
//! [`CmdResult`] values for the caller to present.

use crate::commands;
use crate::config::StoreConfig;
use crate::error::{Result, UserStoreError};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use crate::validation::Validator;
use std::fmt;
use std::str::FromStr;

/// Named string arguments of one invocation. Empty strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    pub file_name: Option<String>,
    pub operation: Option<String>,
    pub item: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl FromStr for Operation {
    type Err = UserStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "findById" => Ok(Operation::FindById),
            "remove" => Ok(Operation::Remove),
            other => Err(UserStoreError::UnsupportedOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// The main API facade over a record store.
pub struct UserStoreApi<S: DataStore> {
    store: S,
    validator: Validator,
}

impl<S: DataStore> UserStoreApi<S> {
    pub fn new(store: S, validator: Validator) -> Self {
        Self { store, validator }
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add(&mut self, item: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.validator, item)
    }

    pub fn find_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn remove(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Run the operation named in `args`.
    pub fn execute(&mut self, args: &Arguments) -> Result<commands::CmdResult> {
        let operation: Operation = required(&args.operation, "operation")?.parse()?;
        tracing::debug!(%operation, "dispatching");

        match operation {
            Operation::List => self.list(),
            Operation::Add => self.add(optional(&args.item)),
            Operation::FindById => self.find_by_id(optional(&args.id)),
            Operation::Remove => self.remove(optional(&args.id)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Run one invocation against the store file named by `fileName`.
pub fn perform(args: &Arguments, config: &StoreConfig) -> Result<commands::CmdResult> {
    let file_name = required(&args.file_name, "fileName")?;
    let store = FileStore::new(file_name).with_pretty(config.pretty);
    UserStoreApi::new(store, config.validator()).execute(args)
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(UserStoreError::MissingArgument(name)),
    }
}

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
