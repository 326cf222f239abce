//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// URL base del backend, sin barra final
    pub api_base_url: String,
    /// Costo fijo de envío sumado al total del checkout
    pub costo_envio: f64,
    /// Demora de la simulación de pago (pantallas pse/credito)
    pub demora_pago_ms: u64,
    /// Demora antes de redirigir a la tienda tras un pago exitoso
    pub demora_redireccion_ms: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            api_base_url: env::var("DISTRICANDY_API_URL")
                .unwrap_or_else(|_| "http://localhost:8093/DistriCandy".to_string()),
            costo_envio: env::var("DISTRICANDY_COSTO_ENVIO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000.0),
            demora_pago_ms: env::var("DISTRICANDY_DEMORA_PAGO_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            demora_redireccion_ms: env::var("DISTRICANDY_DEMORA_REDIRECCION_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl EnvironmentConfig {
    /// Obtener la URL de un recurso del backend (p. ej. `producto`, `ordenesVenta`)
    pub fn url_recurso(&self, recurso: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), recurso)
    }

    pub fn demora_pago(&self) -> Duration {
        Duration::from_millis(self.demora_pago_ms)
    }

    pub fn demora_redireccion(&self) -> Duration {
        Duration::from_millis(self.demora_redireccion_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_recurso() {
        let config = EnvironmentConfig {
            api_base_url: "http://localhost:8093/DistriCandy/".to_string(),
            costo_envio: 0.0,
            demora_pago_ms: 0,
            demora_redireccion_ms: 0,
        };
        assert_eq!(
            config.url_recurso("producto"),
            "http://localhost:8093/DistriCandy/producto"
        );
    }
}
