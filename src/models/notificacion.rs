//! Notificaciones de pantalla
//!
//! Las pantallas comunican el resultado de cada acción con una notificación
//! tipada en lugar de mutar estado global de UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoNotificacion {
    Exito,
    Error,
    Advertencia,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notificacion {
    pub tipo: TipoNotificacion,
    pub mensaje: String,
}

impl Notificacion {
    pub fn exito(mensaje: impl Into<String>) -> Self {
        Self { tipo: TipoNotificacion::Exito, mensaje: mensaje.into() }
    }

    pub fn error(mensaje: impl Into<String>) -> Self {
        Self { tipo: TipoNotificacion::Error, mensaje: mensaje.into() }
    }

    pub fn advertencia(mensaje: impl Into<String>) -> Self {
        Self { tipo: TipoNotificacion::Advertencia, mensaje: mensaje.into() }
    }

    pub fn es_exito(&self) -> bool {
        self.tipo == TipoNotificacion::Exito
    }
}
