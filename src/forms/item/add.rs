use crate::auth::DEFAULT_ROLE;
use crate::models;
use chrono::Utc;
use serde::Deserialize;
use serde_valid::Validate;

/// Registration payload. A role cannot be chosen here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddItem {
    #[serde(rename = "nombre", alias = "name")]
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub name: String,
    #[serde(rename = "correo", alias = "email")]
    #[validate(max_length = 255)]
    #[validate(pattern = r"^[^@\s]+@[^@\s]+$")]
    pub email: String,
    #[serde(rename = "contraseña", alias = "password")]
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub password: String,
}

impl From<&AddItem> for models::Item {
    fn from(form: &AddItem) -> Self {
        models::Item {
            name: form.name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_in_payload_is_ignored() {
        let form: AddItem = serde_json::from_value(json!({
            "nombre": "ana",
            "correo": "ana@example.com",
            "contraseña": "pw",
            "rol": "admin"
        }))
        .unwrap();

        let item: models::Item = (&form).into();
        assert_eq!(item.role, DEFAULT_ROLE);
        assert_eq!(item.name, "ana");
    }

    #[test]
    fn english_field_names_are_accepted() {
        let form: AddItem = serde_json::from_value(json!({
            "name": "ana",
            "email": "ana@example.com",
            "password": "pw"
        }))
        .unwrap();

        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejects_bad_email_and_empty_name() {
        let form: AddItem = serde_json::from_value(json!({
            "nombre": "",
            "correo": "not-an-email",
            "contraseña": "pw"
        }))
        .unwrap();

        assert!(form.validate().is_err());
    }
}
