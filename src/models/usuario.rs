//! Modelo de usuario y autenticación
//!
//! La respuesta de login y el registro de usuario guardado en sesión usan
//! snake_case, tal como los entrega el backend.

use serde::{Deserialize, Serialize};

/// Tipos de usuario del sistema
pub const TIPO_USUARIO_ADMIN: i32 = 1;
pub const TIPO_USUARIO_CLIENTE: i32 = 2;

/// Rol resuelto a partir del registro de usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rol {
    Admin,
    Usuario,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Usuario => "usuario",
        }
    }

    /// Resolver el rol desde el código numérico `tipo_usuario`
    pub fn desde_tipo(tipo_usuario: i32) -> Option<Self> {
        match tipo_usuario {
            TIPO_USUARIO_ADMIN => Some(Rol::Admin),
            TIPO_USUARIO_CLIENTE => Some(Rol::Usuario),
            _ => None,
        }
    }
}

/// Registro de usuario autenticado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: i64,
    pub correo: String,
    pub nombre_completo: String,
    pub tipo_usuario: i32,
    #[serde(default, rename = "esAdmin", skip_serializing_if = "Option::is_none")]
    pub es_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacion_adicional: Option<String>,
}

/// Credenciales de inicio de sesión
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredencialesLogin {
    pub correo: String,
    pub clave: String,
}

/// Respuesta del endpoint de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaLogin {
    pub exito: bool,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub usuario: Option<Usuario>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub bloqueado: Option<bool>,
}

/// Datos de registro de un cliente nuevo
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistroClienteRequest {
    pub nombre: String,
    pub apellido: String,
    pub tipo_documento: String,
    pub identificacion: String,
    pub celular: String,
    pub correo: String,
    pub clave: String,
}

/// Respuesta genérica `{exito, mensaje?, error?}` de varios endpoints de usuario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaGenerica {
    pub exito: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rol_desde_tipo() {
        assert_eq!(Rol::desde_tipo(1), Some(Rol::Admin));
        assert_eq!(Rol::desde_tipo(2), Some(Rol::Usuario));
        assert_eq!(Rol::desde_tipo(9), None);
    }
}
