use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, UserStoreError};
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(UserStoreError::MissingArgument("id"));
    }

    let mut users = store.load_users()?;
    let position = users
        .iter()
        .position(|u| u.id == id)
        .ok_or_else(|| UserStoreError::NotFound(id.to_string()))?;

    let removed = users.remove(position);
    debug!(id = %removed.id, remaining = users.len(), "removing record");
    store.save_users(&users)?;

    let mut result = CmdResult::default().with_affected_users(vec![removed]);
    result.add_message(CmdMessage::success(format!("Item removed: {}", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, find};
    use crate::store::memory::fixtures::{seeded_store, SEED};
    use crate::validation::Validator;

    #[test]
    fn removes_record() {
        let mut store = seeded_store();
        let result = run(&mut store, "1").unwrap();

        assert_eq!(result.affected_users[0].email, "a@example.com");
        assert!(find::run(&store, "1").unwrap().found.is_none());
        assert_eq!(store.content().unwrap(), b"[]");
    }

    #[test]
    fn keeps_order_of_remaining_records() {
        let mut store = seeded_store();
        let v = Validator::default();
        add::run(&mut store, &v, r#"{"id":"2","email":"b@example.com","age":20}"#).unwrap();
        add::run(&mut store, &v, r#"{"id":"3","email":"c@example.com","age":21}"#).unwrap();

        run(&mut store, "2").unwrap();
        let ids: Vec<_> = store
            .load_users()
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn unknown_id_is_not_found_without_write() {
        let mut store = seeded_store();
        let err = run(&mut store, "9").unwrap_err();
        assert!(matches!(err, UserStoreError::NotFound(ref id) if id == "9"));
        assert_eq!(store.content().unwrap(), SEED.as_bytes());
    }

    #[test]
    fn empty_id_is_missing_argument() {
        let mut store = seeded_store();
        assert!(matches!(
            run(&mut store, "").unwrap_err(),
            UserStoreError::MissingArgument("id")
        ));
    }
}
