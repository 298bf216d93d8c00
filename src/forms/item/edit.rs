use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

/// Partial update: only the fields present in the payload are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditItem {
    #[serde(default, rename = "nombre", alias = "name")]
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub name: Option<String>,
    #[serde(default, rename = "correo", alias = "email")]
    #[validate(max_length = 255)]
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: Option<String>,
    #[serde(default, rename = "contraseña", alias = "password")]
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub password: Option<String>,
    #[serde(default, rename = "rol", alias = "role")]
    #[validate(min_length = 1)]
    #[validate(max_length = 50)]
    pub role: Option<String>,
}

impl EditItem {
    pub fn update(self, item: &mut models::Item) {
        if let Some(name) = self.name {
            item.name = name;
        }

        if let Some(email) = self.email {
            item.email = email;
        }

        if let Some(password) = self.password {
            item.password = password;
        }

        if let Some(role) = self.role {
            item.role = role;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stored() -> models::Item {
        models::Item {
            id: 5,
            name: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "pw".to_string(),
            role: "user".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn applies_only_supplied_fields() {
        let form: EditItem = serde_json::from_value(json!({"correo": "new@example.com"})).unwrap();
        let mut item = stored();
        form.update(&mut item);

        assert_eq!(item.email, "new@example.com");
        assert_eq!(item.name, "ana");
        assert_eq!(item.password, "pw");
        assert_eq!(item.role, "user");
    }

    #[test]
    fn malformed_email_is_invalid() {
        let form: EditItem = serde_json::from_value(json!({"correo": "no at sign"})).unwrap();
        assert!(form.validate().is_err());

        let form: EditItem = serde_json::from_value(json!({"correo": "ana@new.com"})).unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_payload_changes_nothing() {
        let form: EditItem = serde_json::from_value(json!({})).unwrap();
        let mut item = stored();
        form.update(&mut item);

        assert_eq!(item, stored());
    }
}
