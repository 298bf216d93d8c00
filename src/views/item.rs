use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public shape of a user record. The password never leaves the store.
#[derive(Debug, Serialize)]
pub struct Item {
    pub id: i32,
    pub nombre: String,
    pub correo: String,
    pub rol: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Item> for Item {
    fn from(item: models::Item) -> Self {
        Self {
            id: item.id,
            nombre: item.name,
            correo: item.email,
            rol: item.role,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
