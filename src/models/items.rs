// src/models/items.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: formulário de item (criação e edição)
// O backend usa snake_case, então os nomes seguem o JSON dele.
// ---
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemPayload {
    #[validate(length(min = 1, message = "O campo 'sale_uuid' é obrigatório."))]
    pub sale_uuid: String,

    #[validate(length(min = 1, message = "O campo 'product_uuid' é obrigatório."))]
    pub product_uuid: String,

    #[validate(range(min = 1, message = "A quantidade deve ser pelo menos 1."))]
    #[schema(example = 2)]
    pub quantity: i64,

    // Opcional: sem preço, o backend usa o preço do produto
    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
}

// ---
// Payload: edição parcial de item
// O formulário de edição manda só o que mudou; o resto segue intacto para o backend.
// ---
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemUpdatePayload {
    #[validate(range(min = 1, message = "A quantidade deve ser pelo menos 1."))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub quantity: Option<i64>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    // Demais campos são repassados como vieram
    #[serde(flatten)]
    #[schema(ignore)]
    pub other_fields: Map<String, Value>,
}
