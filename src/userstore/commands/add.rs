use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserStoreError};
use crate::model::User;
use crate::store::DataStore;
use crate::validation::Validator;
use tracing::debug;

/// Insert a candidate record given as JSON object text.
///
/// Steps run in order and stop at the first failure, before anything is written:
/// empty payload, parse, validate, read existing store, duplicate scan, persist.
pub fn run<S: DataStore>(store: &mut S, validator: &Validator, item: &str) -> Result<CmdResult> {
    if item.is_empty() {
        return Err(UserStoreError::MissingArgument("item"));
    }

    let candidate = User::from_json(item)?;
    validator.validate(&candidate)?;

    let mut users = store.load_users()?;
    if users.iter().any(|u| u.id == candidate.id) {
        return Err(UserStoreError::DuplicateId(candidate.id));
    }

    debug!(id = %candidate.id, existing = users.len(), "appending record");
    users.push(candidate.clone());
    store.save_users(&users)?;

    let mut result = CmdResult::default().with_affected_users(vec![candidate.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Item added: {}",
        candidate.id
    )));
    Ok(result)
}
