//! Modelo de proveedor

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proveedor {
    #[serde(default)]
    pub id: Option<i64>,
    pub nit: String,
    pub nombre: String,
    #[serde(default)]
    pub celular: String,
    pub correo: String,
    #[serde(default)]
    pub direccion: String,
    pub estado: i32,
}

impl Proveedor {
    pub fn esta_activo(&self) -> bool {
        self.estado == 1
    }
}

/// Payload de creación/actualización de proveedor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveedorRequest {
    pub nit: String,
    pub nombre: String,
    pub celular: String,
    pub correo: String,
    pub direccion: String,
    pub estado: i32,
}
