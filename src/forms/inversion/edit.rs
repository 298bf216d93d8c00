use crate::models;
use serde::Deserialize;
use serde_valid::Validate;

/// Partial update: only the fields present in the payload are applied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EditInversion {
    #[serde(default, rename = "tipo_inversion", alias = "tipo")]
    #[validate(min_length = 1)]
    #[validate(max_length = 100)]
    pub investment_type: Option<String>,
    #[serde(default, rename = "cantidad_inversion", alias = "cantidad")]
    #[validate(minimum = 0.0)]
    pub amount: Option<f64>,
}

impl EditInversion {
    pub fn update(self, inversion: &mut models::Inversion) {
        if let Some(investment_type) = self.investment_type {
            inversion.investment_type = investment_type;
        }

        if let Some(amount) = self.amount {
            inversion.amount = amount;
        }
    }
}
