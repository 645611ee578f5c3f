use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserStoreError};
use crate::store::DataStore;
use tracing::debug;

/// Look up the first record with the given id, in stored order.
///
/// No match is not an error: the result simply carries no record.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(UserStoreError::MissingArgument("id"));
    }

    let found = store.load_users()?.into_iter().find(|u| u.id == id);
    let mut result = CmdResult::default();
    if found.is_none() {
        debug!(id = %id, "no record with this id");
        result.add_message(CmdMessage::info(format!("No item with id {}", id)));
    }

    Ok(result.with_found(found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;
    use crate::store::memory::fixtures::seeded_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn finds_existing_record() {
        let store = seeded_store();
        let result = run(&store, "1").unwrap();
        assert_eq!(result.found, Some(User::new("1", "a@example.com", 30)));
    }

    #[test]
    fn no_match_is_empty_success() {
        let store = seeded_store();
        let result = run(&store, "2").unwrap();
        assert!(result.found.is_none());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn first_match_wins() {
        let store = InMemoryStore::with_content(
            r#"[{"id":"x","email":"first@x.io","age":10},{"id":"x","email":"second@x.io","age":11}]"#,
        );
        let result = run(&store, "x").unwrap();
        assert_eq!(result.found.unwrap().email, "first@x.io");
    }

    #[test]
    fn empty_id_is_missing_argument() {
        let store = seeded_store();
        assert!(matches!(
            run(&store, "").unwrap_err(),
            UserStoreError::MissingArgument("id")
        ));
    }

    #[test]
    fn malformed_store_is_fatal() {
        let store = InMemoryStore::with_content("[{\"id\":");
        assert!(matches!(
            run(&store, "1").unwrap_err(),
            UserStoreError::MalformedPayload(_)
        ));
    }

    #[test]
    fn null_fields_in_store_read_as_zero_values() {
        let store = InMemoryStore::with_content(r#"[{"id":"1","email":null,"age":null}]"#);
        assert_eq!(run(&store, "1").unwrap().found, Some(User::new("1", "", 0)));
    }

    #[test]
    fn empty_store_has_no_match() {
        let store = InMemoryStore::with_content("");
        assert!(run(&store, "1").unwrap().found.is_none());
    }
}
