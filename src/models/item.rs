use crate::auth::Owned;
use chrono::{DateTime, Utc};

/// A registered user. Stored in the `item` table.
///
/// Rendered through `views::item::Item`, which leaves the password out.
#[derive(Default, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user owns their own account record.
impl Owned for Item {
    fn owner_id(&self) -> i32 {
        self.id
    }
}
