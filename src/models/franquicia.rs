//! Modelo de franquicia de tarjeta (pagos con tarjeta de crédito)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franquicia {
    pub id_franquicia: i64,
    pub nombre: String,
    #[serde(default)]
    pub estado: bool,
}
