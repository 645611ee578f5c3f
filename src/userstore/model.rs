use serde::{Deserialize, Deserializer, Serialize};

/// A single user entry in the store.
///
/// Missing or `null` fields fall back to their zero value so that an
/// incomplete candidate reaches validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }

    /// Parse a single record from its JSON object text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let user = User::from_json(r#"{"id":"1","email":"a@example.com","age":30}"#).unwrap();
        assert_eq!(user, User::new("1", "a@example.com", 30));
    }

    #[test]
    fn missing_fields_default_to_zero_values() {
        let user = User::from_json(r#"{"email":"a@example.com"}"#).unwrap();
        assert_eq!(user.id, "");
        assert_eq!(user.age, 0);
    }

    #[test]
    fn null_fields_read_as_zero_values() {
        let user = User::from_json(r#"{"id":null,"email":"a@example.com","age":null}"#).unwrap();
        assert_eq!(user, User::new("", "a@example.com", 0));
    }

    #[test]
    fn ignores_unknown_fields() {
        let user = User::from_json(r#"{"id":"7","email":"x@y.z","age":9,"name":"n"}"#).unwrap();
        assert_eq!(user.id, "7");
    }

    #[test]
    fn rejects_wrong_field_types() {
        assert!(User::from_json(r#"{"id":1,"email":"a@b.c","age":30}"#).is_err());
        assert!(User::from_json(r#"{"id":"1","email":"a@b.c","age":"30"}"#).is_err());
    }

    #[test]
    fn serializes_with_field_order() {
        let json = serde_json::to_string(&User::new("1", "a@example.com", 30)).unwrap();
        assert_eq!(json, r#"{"id":"1","email":"a@example.com","age":30}"#);
    }
}
