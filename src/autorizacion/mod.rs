//! Pantalla de autorización
//!
//! Inicio de sesión, registro de clientes y recuperación de contraseña.
//! Los rechazos de negocio del backend se clasifican por subcadenas del
//! mensaje para mostrar un error específico.

use crate::clients::UsuarioClient;
use crate::guard::rutas;
use crate::models::notificacion::Notificacion;
use crate::models::usuario::{CredencialesLogin, RegistroClienteRequest};
use crate::session::SesionService;
use crate::utils::validation::validar_longitud;

pub struct AutorizacionController {
    usuarios: UsuarioClient,
    sesion: SesionService,
    pub cargando: bool,
    pub notificacion: Option<Notificacion>,
}

impl AutorizacionController {
    pub fn new(usuarios: UsuarioClient, sesion: SesionService) -> Self {
        Self {
            usuarios,
            sesion,
            cargando: false,
            notificacion: None,
        }
    }

    /// Iniciar sesión. Devuelve la ruta destino (`/admin` o `/tienda`) si el
    /// login fue exitoso; en caso contrario deja la notificación de error.
    pub async fn iniciar_sesion(
        &mut self,
        credenciales: &CredencialesLogin,
    ) -> Option<&'static str> {
        if self.cargando {
            return None;
        }
        if credenciales.correo.trim().is_empty() || credenciales.clave.trim().is_empty() {
            self.notificacion = Some(Notificacion::advertencia(
                "Por favor completa todos los campos obligatorios correctamente",
            ));
            return None;
        }

        self.cargando = true;
        let resultado = self.usuarios.iniciar_sesion(credenciales).await;
        self.cargando = false;

        match resultado {
            Ok(respuesta) if respuesta.exito => {
                if !self.sesion.registrar(&respuesta) {
                    self.notificacion =
                        Some(Notificacion::error("Error al iniciar sesión"));
                    return None;
                }
                self.notificacion = Some(Notificacion::exito("¡Bienvenido!"));
                if self.sesion.es_admin() {
                    Some(rutas::ADMIN)
                } else {
                    Some(rutas::TIENDA)
                }
            }
            Ok(respuesta) => {
                let mensaje = if respuesta.bloqueado == Some(true) {
                    "Tu cuenta ha sido bloqueada. Contacta al administrador.".to_string()
                } else {
                    respuesta
                        .error
                        .unwrap_or_else(|| "Error al iniciar sesión".to_string())
                };
                self.notificacion = Some(Notificacion::error(mensaje));
                None
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                None
            }
        }
    }

    /// Registrar un cliente nuevo. Devuelve `true` si el registro quedó
    /// creado y la pantalla debe volver al login.
    pub async fn registrar(&mut self, datos: &RegistroClienteRequest) -> bool {
        if self.cargando {
            return false;
        }
        self.cargando = true;
        let resultado = self.usuarios.registrar_cliente(datos).await;
        self.cargando = false;

        match resultado {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion = Some(Notificacion::exito(
                    "¡Registro exitoso! Ahora puedes iniciar sesión.",
                ));
                true
            }
            Ok(respuesta) => {
                let crudo = respuesta.error.unwrap_or_default();
                self.notificacion =
                    Some(Notificacion::error(clasificar_error_registro(&crudo)));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }

    /// Paso 1 de la recuperación: solicitar el código por correo
    pub async fn solicitar_codigo_recuperacion(&mut self, correo: &str) -> bool {
        if correo.trim().is_empty() {
            self.notificacion = Some(Notificacion::advertencia(
                "Por favor ingresa un correo electrónico válido",
            ));
            return false;
        }
        match self.usuarios.solicitar_codigo_recuperacion(correo).await {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion =
                    Some(Notificacion::exito("¡Código enviado! Revisa tu correo"));
                true
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al enviar código".to_string()),
                ));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }

    /// Paso 2: restablecer con el código recibido. Verifica localmente la
    /// coincidencia y longitud mínima antes de llamar al backend.
    pub async fn restablecer_con_codigo(
        &mut self,
        correo: &str,
        codigo: &str,
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

        match self.usuarios.restablecer_clave(correo, codigo, nueva_clave).await {
            Ok(respuesta) if respuesta.exito => {
                self.notificacion = Some(Notificacion::exito(
                    "¡Contraseña actualizada exitosamente!",
                ));
                true
            }
            Ok(respuesta) => {
                let crudo = respuesta.error.unwrap_or_default();
                let mensaje = if crudo.to_lowercase().contains("código")
                    || crudo.to_lowercase().contains("codigo")
                {
                    "Código inválido o expirado".to_string()
                } else if crudo.is_empty() {
                    "Error al restablecer contraseña".to_string()
                } else {
                    crudo
                };
                self.notificacion = Some(Notificacion::error(mensaje));
                false
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                false
            }
        }
    }
}

/// Convertir el mensaje crudo del backend en uno específico para el usuario
pub fn clasificar_error_registro(error: &str) -> String {
    let mensaje = error.to_lowercase();
    if mensaje.contains("correo") || mensaje.contains("email") {
        "Este correo electrónico ya está registrado. Intenta iniciar sesión o usa otro correo."
            .to_string()
    } else if mensaje.contains("identificacion") || mensaje.contains("documento") {
        "Esta identificación ya está registrada. Verifica tus datos o contacta al administrador."
            .to_string()
    } else if mensaje.contains("celular") || mensaje.contains("teléfono") {
        "Este número de celular ya está registrado.".to_string()
    } else if mensaje.contains("ya existe") || mensaje.contains("duplicado") {
        "Ya existe una cuenta con estos datos. Intenta iniciar sesión.".to_string()
    } else if error.is_empty() {
        "Error al registrar usuario".to_string()
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clasificar_error_registro() {
        assert!(clasificar_error_registro("El correo ya existe en el sistema")
            .contains("correo electrónico ya está registrado"));
        assert!(clasificar_error_registro("Identificacion duplicada")
            .contains("identificación ya está registrada"));
        assert!(clasificar_error_registro("celular registrado")
            .contains("celular ya está registrado"));
        assert!(clasificar_error_registro("el registro ya existe")
            .contains("Ya existe una cuenta"));
        assert_eq!(clasificar_error_registro(""), "Error al registrar usuario");
        assert_eq!(
            clasificar_error_registro("Error desconocido"),
            "Error desconocido"
        );
    }
}
