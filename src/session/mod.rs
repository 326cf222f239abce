//! Servicio de sesión
//!
//! Guarda el usuario autenticado y un token opaco en el almacenamiento
//! clave/valor. Ambas claves se escriben juntas al iniciar sesión y se
//! eliminan juntas al cerrarla.

use std::sync::Arc;

use tracing::warn;

use crate::models::usuario::{RespuestaLogin, Rol, Usuario};
use crate::storage::Storage;

const CLAVE_TOKEN: &str = "auth_token";
const CLAVE_USUARIO: &str = "auth_user";

const TOKEN_ADMIN: &str = "admin-token";
const TOKEN_USUARIO: &str = "user-token";

#[derive(Clone)]
pub struct SesionService {
    storage: Arc<dyn Storage>,
}

impl SesionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Registrar en sesión una respuesta de login exitosa.
    ///
    /// Devuelve `false` si la respuesta no trae usuario (no hay nada que
    /// registrar).
    pub fn registrar(&self, respuesta: &RespuestaLogin) -> bool {
        let Some(usuario) = respuesta.usuario.as_ref() else {
            return false;
        };
        if !respuesta.exito {
            return false;
        }

        let token = if respuesta.is_admin == Some(true) {
            TOKEN_ADMIN
        } else {
            TOKEN_USUARIO
        };
        self.storage.set(CLAVE_TOKEN, token);

        match serde_json::to_string(usuario) {
            Ok(json) => {
                self.storage.set(CLAVE_USUARIO, &json);
                true
            }
            Err(e) => {
                warn!("No se pudo serializar el usuario de la sesión: {}", e);
                self.storage.remove(CLAVE_TOKEN);
                false
            }
        }
    }

    pub fn cerrar_sesion(&self) {
        self.storage.remove(CLAVE_TOKEN);
        self.storage.remove(CLAVE_USUARIO);
    }

    pub fn obtener_token(&self) -> Option<String> {
        self.storage.get(CLAVE_TOKEN)
    }

    /// Registro de usuario guardado; un JSON corrupto cuenta como sin sesión
    pub fn obtener_usuario(&self) -> Option<Usuario> {
        let datos = self.storage.get(CLAVE_USUARIO)?;
        if datos == "undefined" {
            return None;
        }
        match serde_json::from_str(&datos) {
            Ok(usuario) => Some(usuario),
            Err(e) => {
                warn!("Error al parsear datos de usuario: {}", e);
                None
            }
        }
    }

    pub fn obtener_rol(&self) -> Option<Rol> {
        self.obtener_usuario()
            .and_then(|u| Rol::desde_tipo(u.tipo_usuario))
    }

    pub fn esta_autenticado(&self) -> bool {
        self.obtener_token().is_some() && self.obtener_usuario().is_some()
    }

    pub fn es_admin(&self) -> bool {
        self.obtener_rol() == Some(Rol::Admin)
    }

    pub fn obtener_id(&self) -> Option<i64> {
        self.obtener_usuario().map(|u| u.id_usuario)
    }

    pub fn obtener_correo(&self) -> Option<String> {
        self.obtener_usuario().map(|u| u.correo)
    }

    pub fn obtener_nombre(&self) -> Option<String> {
        self.obtener_usuario().map(|u| u.nombre_completo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::usuario::TIPO_USUARIO_ADMIN;
    use crate::storage::MemoryStorage;

    fn usuario(tipo: i32) -> Usuario {
        Usuario {
            id_usuario: 4,
            correo: "ana@districandy.com".to_string(),
            nombre_completo: "Ana Pérez".to_string(),
            tipo_usuario: tipo,
            es_admin: None,
            username: None,
            celular: None,
            nombre: None,
            apellido: None,
            informacion_adicional: None,
        }
    }

    fn respuesta(tipo: i32, is_admin: bool) -> RespuestaLogin {
        RespuestaLogin {
            exito: true,
            is_admin: Some(is_admin),
            mensaje: None,
            usuario: Some(usuario(tipo)),
            error: None,
            bloqueado: None,
        }
    }

    #[test]
    fn test_registro_y_rol() {
        let sesion = SesionService::new(Arc::new(MemoryStorage::new()));
        assert!(!sesion.esta_autenticado());

        assert!(sesion.registrar(&respuesta(TIPO_USUARIO_ADMIN, true)));
        assert!(sesion.esta_autenticado());
        assert!(sesion.es_admin());
        assert_eq!(sesion.obtener_token().as_deref(), Some("admin-token"));
        assert_eq!(sesion.obtener_id(), Some(4));

        sesion.cerrar_sesion();
        assert!(!sesion.esta_autenticado());
        assert!(sesion.obtener_usuario().is_none());
    }

    #[test]
    fn test_login_fallido_no_registra() {
        let sesion = SesionService::new(Arc::new(MemoryStorage::new()));
        let mut fallida = respuesta(2, false);
        fallida.exito = false;
        assert!(!sesion.registrar(&fallida));
        assert!(!sesion.esta_autenticado());
    }

    #[test]
    fn test_json_corrupto_cuenta_como_sin_sesion() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("auth_token", "user-token");
        storage.set("auth_user", "{no es json");
        let sesion = SesionService::new(storage);
        assert!(sesion.obtener_usuario().is_none());
        assert!(!sesion.esta_autenticado());
    }
}
