use crate::models;
use chrono::Utc;
use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddInversion {
    #[serde(rename = "tipo_inversion", alias = "tipo")]
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub investment_type: String,
    #[serde(rename = "cantidad_inversion", alias = "cantidad")]
    #[validate(minimum = 0.0)]
    pub amount: f64,
}

impl AddInversion {
    /// The owner always comes from the authenticated caller, never the payload.
    pub fn to_model(&self, owner_id: i32) -> models::Inversion {
        models::Inversion {
            owner_id,
            investment_type: self.investment_type.clone(),
            amount: self.amount,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            ..Default::default()
        }
    }
}
