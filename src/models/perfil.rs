//! Modelo de perfil de usuario

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatosPerfil {
    pub id_usuario: i64,
    #[serde(default)]
    pub username: Option<String>,
    pub correo_usuario: String,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub tipo_documento: Option<String>,
    #[serde(default)]
    pub identificacion: Option<String>,
    #[serde(default)]
    pub id_cliente: Option<i64>,
    #[serde(default)]
    pub pais: Option<String>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub barrio: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub informacion_adicional: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfilCompleto {
    pub exito: bool,
    #[serde(default)]
    pub perfil: Option<DatosPerfil>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActualizarPerfilRequest {
    pub id_usuario: i64,
    pub nombre: String,
    pub apellido: String,
    pub celular: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActualizarClienteRequest {
    pub id_usuario: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pais: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departamento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barrio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacion_adicional: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CambiarClaveRequest {
    pub correo_usuario: String,
    pub clave_actual: String,
    pub nueva_clave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaActualizacion {
    pub exito: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub usuario: Option<serde_json::Value>,
}
