//! Pantalla de perfil
//!
//! Carga el perfil combinado del usuario, actualiza sus datos y permite el
//! cambio de contraseña con verificaciones locales previas.

use crate::clients::UsuarioClient;
use crate::models::notificacion::Notificacion;
use crate::models::perfil::{
    ActualizarClienteRequest, ActualizarPerfilRequest, CambiarClaveRequest, DatosPerfil,
};
use crate::session::SesionService;
use crate::utils::validation::validar_longitud;

pub struct PerfilController {
    usuarios: UsuarioClient,
    sesion: SesionService,
    pub perfil: Option<DatosPerfil>,
    pub cargando: bool,
    pub notificacion: Option<Notificacion>,
}

impl PerfilController {
    pub fn new(usuarios: UsuarioClient, sesion: SesionService) -> Self {
        Self {
            usuarios,
            sesion,
            perfil: None,
            cargando: false,
            notificacion: None,
        }
    }

    pub async fn cargar(&mut self) {
        let Some(id_usuario) = self.sesion.obtener_id() else {
            self.notificacion = Some(Notificacion::error(
                "No se pudo identificar al usuario. Por favor inicia sesión nuevamente.",
            ));
            return;
        };

        self.cargando = true;
        match self.usuarios.obtener_perfil(id_usuario).await {
            Ok(respuesta) if respuesta.exito => self.perfil = respuesta.perfil,
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al cargar el perfil".to_string()),
                ));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
            }
        }
        self.cargando = false;
    }

    pub async fn actualizar_perfil(&mut self, solicitud: &ActualizarPerfilRequest) -> bool {
        match self.usuarios.actualizar_perfil(solicitud).await {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion =
                    Some(Notificacion::exito("Perfil actualizado exitosamente"));
                self.cargar().await;
                true
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al actualizar el perfil".to_string()),
                ));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }

    pub async fn actualizar_datos_cliente(
        &mut self,
        solicitud: &ActualizarClienteRequest,
    ) -> bool {
        match self.usuarios.actualizar_cliente(solicitud).await {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion =
                    Some(Notificacion::exito("Datos de envío actualizados"));
                true
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al actualizar los datos".to_string()),
                ));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }

    /// Cambio de contraseña: coincidencia y longitud se verifican localmente
    /// antes de llamar al backend.
    pub async fn cambiar_clave(
        &mut self,
        clave_actual: &str,
        nueva_clave: &str,
        confirmacion: &str,
    ) -> bool {
        if nueva_clave != confirmacion {
            self.notificacion = Some(Notificacion::error("Las contraseñas no coinciden"));
            return false;
        }
        if validar_longitud(nueva_clave, 6, 100).is_err() {
            self.notificacion = Some(Notificacion::error(
                "La contraseña debe tener al menos 6 caracteres",
            ));
            return false;
        }
        let Some(correo) = self.sesion.obtener_correo() else {
            self.notificacion = Some(Notificacion::error(
                "No se pudo identificar al usuario. Por favor inicia sesión nuevamente.",
            ));
            return false;
        };

        let solicitud = CambiarClaveRequest {
            correo_usuario: correo,
            clave_actual: clave_actual.to_string(),
            nueva_clave: nueva_clave.to_string(),
        };
        match self.usuarios.cambiar_clave(&solicitud).await {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion =
                    Some(Notificacion::exito("¡Contraseña actualizada exitosamente!"));
                true
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al cambiar la contraseña".to_string()),
                ));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }
}
