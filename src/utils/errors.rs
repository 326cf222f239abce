//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del cliente y los helpers
//! para extraer mensajes útiles de las respuestas del backend.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error de red: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error del backend ({status}): {mensaje}")]
    Api { status: u16, mensaje: String },

    /// Rechazo de negocio devuelto dentro de una respuesta 200 (`exito: false`)
    #[error("{0}")]
    Negocio(String),

    #[error("Validation error: {0}")]
    Validacion(#[from] validator::ValidationErrors),

    #[error("Sesión inválida: {0}")]
    Sesion(String),

    #[error("Error de almacenamiento: {0}")]
    Almacenamiento(String),

    #[error("Error de serialización: {0}")]
    Serializacion(#[from] serde_json::Error),
}

impl AppError {
    /// Mensaje apto para mostrar al usuario final
    pub fn mensaje_usuario(&self) -> String {
        match self {
            AppError::Http(_) => {
                "Error al conectar con el servidor. Verifica que el backend esté corriendo."
                    .to_string()
            }
            AppError::Api { mensaje, .. } => mensaje.clone(),
            AppError::Negocio(mensaje) => mensaje.clone(),
            AppError::Validacion(_) => {
                "Por favor completa todos los campos correctamente".to_string()
            }
            AppError::Sesion(mensaje) => mensaje.clone(),
            AppError::Almacenamiento(_) | AppError::Serializacion(_) => {
                "Error al cargar los datos guardados".to_string()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Extraer el mensaje de error del cuerpo de una respuesta no exitosa.
///
/// El backend no es consistente: según el endpoint el mensaje llega en
/// `error`, `message` o `mensaje`. Si el cuerpo no es JSON o no trae ninguno,
/// se devuelve un mensaje genérico.
pub fn extraer_mensaje_error(cuerpo: &str) -> String {
    if let Ok(valor) = serde_json::from_str::<serde_json::Value>(cuerpo) {
        for clave in ["error", "message", "mensaje"] {
            if let Some(mensaje) = valor.get(clave).and_then(|m| m.as_str()) {
                if !mensaje.trim().is_empty() {
                    return mensaje.to_string();
                }
            }
        }
    }
    "Error al procesar la solicitud".to_string()
}

/// Función helper para crear errores de sesión
pub fn sesion_error(mensaje: &str) -> AppError {
    AppError::Sesion(mensaje.to_string())
}

/// Función helper para crear errores de negocio
pub fn negocio_error(mensaje: &str) -> AppError {
    AppError::Negocio(mensaje.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraer_mensaje_error_json() {
        assert_eq!(
            extraer_mensaje_error(r#"{"error":"Referencia duplicada"}"#),
            "Referencia duplicada"
        );
        assert_eq!(
            extraer_mensaje_error(r#"{"message":"No encontrado"}"#),
            "No encontrado"
        );
        assert_eq!(
            extraer_mensaje_error(r#"{"mensaje":"Sin stock"}"#),
            "Sin stock"
        );
    }

    #[test]
    fn test_extraer_mensaje_error_fallback() {
        assert_eq!(
            extraer_mensaje_error("<html>502</html>"),
            "Error al procesar la solicitud"
        );
        assert_eq!(
            extraer_mensaje_error(r#"{"otro":"campo"}"#),
            "Error al procesar la solicitud"
        );
    }
}
