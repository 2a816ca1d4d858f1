use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FieldReader, RequestSchema, ValidationErrors};

/// A stored user. `id` is assigned by the database on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of a create request. Neither field is checked for length, format or uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl RequestSchema for NewUser {
    fn from_json(value: &Value) -> Result<Self, ValidationErrors> {
        let mut fields = FieldReader::new(value)?;
        let name = fields.required_string("name");
        let email = fields.required_string("email");
        fields.finish()?;

        Ok(Self { name, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationKind;
    use serde_json::json;

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
        );
    }

    #[test]
    fn test_new_user_from_valid_body() {
        let body = json!({"name": "Alice", "email": "alice@example.com"});
        let new_user = NewUser::from_json(&body).unwrap();

        assert_eq!(new_user, NewUser::new("Alice", "alice@example.com"));
    }

    #[test]
    fn test_new_user_ignores_unknown_fields() {
        let body = json!({"name": "Bob", "email": "bob@example.com", "id": 99, "admin": true});
        let new_user = NewUser::from_json(&body).unwrap();

        assert_eq!(new_user.name, "Bob");
        assert_eq!(new_user.email, "bob@example.com");
    }

    #[test]
    fn test_new_user_accepts_empty_strings() {
        // No length constraint is enforced here
        let new_user = NewUser::from_json(&json!({"name": "", "email": ""})).unwrap();
        assert_eq!(new_user, NewUser::new("", ""));
    }

    #[test]
    fn test_new_user_missing_name() {
        let errors = NewUser::from_json(&json!({"email": "alice@example.com"})).unwrap_err();

        assert_eq!(errors.detail.len(), 1);
        assert_eq!(errors.detail[0].kind, ValidationKind::Missing);
        assert_eq!(errors.detail[0].loc, vec!["body", "name"]);
    }

    #[test]
    fn test_new_user_reports_every_bad_field() {
        let errors = NewUser::from_json(&json!({"name": 42})).unwrap_err();

        let kinds: Vec<_> = errors
            .detail
            .iter()
            .map(|e| (e.loc.last().cloned().unwrap(), e.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("name".to_string(), ValidationKind::StringType),
                ("email".to_string(), ValidationKind::Missing),
            ]
        );
    }

    #[test]
    fn test_new_user_rejects_non_object() {
        let errors = NewUser::from_json(&json!(["Alice", "alice@example.com"])).unwrap_err();

        assert_eq!(errors.detail.len(), 1);
        assert_eq!(errors.detail[0].kind, ValidationKind::ModelAttributesType);
        assert_eq!(errors.detail[0].loc, vec!["body"]);
    }
}
