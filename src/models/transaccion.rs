//! Modelo de transacción de pago

use serde::{Deserialize, Serialize};

/// Códigos de método de pago del backend
pub const METODO_PAGO_PSE: i64 = 1;
pub const METODO_PAGO_TARJETA: i64 = 2;

/// Tipo de cliente por defecto (persona natural)
pub const TIPO_CLIENTE_NATURAL: i64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaccionRequest {
    pub id_venta: i64,
    pub id_metodo_pago: i64,
    pub id_tipo_cliente: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_banco: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_franquicia: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_documento: Option<String>,
    pub identificacion: String,
    pub valor_tx: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransaccionResponse {
    pub exito: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub transaccion: Option<serde_json::Value>,
}

/// Transacción histórica de un usuario (listados de "mis transacciones")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransaccionResumen {
    #[serde(default)]
    pub id_transaccion: Option<i64>,
    #[serde(default)]
    pub id_venta: Option<i64>,
    #[serde(default)]
    pub valor_tx: f64,
    #[serde(default)]
    pub estado: Option<i32>,
    #[serde(default)]
    pub fecha: Option<String>,
}
