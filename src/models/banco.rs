//! Modelo de banco (pagos PSE)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banco {
    pub id_banco: i64,
    pub nombre: String,
    #[serde(default)]
    pub estado: bool,
}
