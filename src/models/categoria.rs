//! Modelo de categoría

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categoria {
    #[serde(default)]
    pub id_categoria: Option<i64>,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub estado: Option<i32>,
}

impl Categoria {
    pub fn esta_activa(&self) -> bool {
        self.estado == Some(1)
    }
}

/// Payload de creación de categoría
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriaRequest {
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Respuesta de los endpoints de categoría
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaCategoria {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub exito: Option<bool>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub categoria: Option<Categoria>,
}
