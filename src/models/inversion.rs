use crate::auth::Owned;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inversion {
    pub id: i32,
    #[serde(rename = "usuario_id")]
    pub owner_id: i32,
    #[serde(rename = "tipo_inversion")]
    pub investment_type: String,
    #[serde(rename = "cantidad_inversion")]
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Owned for Inversion {
    fn owner_id(&self) -> i32 {
        self.owner_id
    }
}

impl std::fmt::Display for Inversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "inversion {} of user {}: {} {}",
            self.id, self.owner_id, self.investment_type, self.amount
        )
    }
}
