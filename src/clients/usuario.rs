//! Cliente HTTP del recurso usuario
//!
//! Cubre inicio de sesión, registro de clientes, recuperación de contraseña
//! y los endpoints de perfil que cuelgan del mismo recurso.

use reqwest::Client;

use super::leer_json;
use crate::models::perfil::{
    ActualizarClienteRequest, ActualizarPerfilRequest, CambiarClaveRequest, PerfilCompleto,
    RespuestaActualizacion,
};
use crate::models::usuario::{
    CredencialesLogin, RegistroClienteRequest, RespuestaGenerica, RespuestaLogin,
};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct UsuarioClient {
    http: Client,
    base_url: String,
}

impl UsuarioClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn iniciar_sesion(
        &self,
        credenciales: &CredencialesLogin,
    ) -> AppResult<RespuestaLogin> {
        let respuesta = self
            .http
            .post(format!("{}/iniciarSesion", self.base_url))
            .json(credenciales)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn registrar_cliente(
        &self,
        registro: &RegistroClienteRequest,
    ) -> AppResult<RespuestaGenerica> {
        let respuesta = self
            .http
            .post(format!("{}/registrarCliente", self.base_url))
            .json(registro)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn solicitar_codigo_recuperacion(
        &self,
        correo: &str,
    ) -> AppResult<RespuestaGenerica> {
        let respuesta = self
            .http
            .post(format!("{}/solicitarCodigo", self.base_url))
            .json(&serde_json::json!({ "correo": correo }))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn restablecer_clave(
        &self,
        correo: &str,
        codigo: &str,
        nueva_clave: &str,
    ) -> AppResult<RespuestaGenerica> {
        let respuesta = self
            .http
            .post(format!("{}/restablecerClave", self.base_url))
            .json(&serde_json::json!({
                "correo": correo,
                "codigo": codigo,
                "nueva_clave": nueva_clave,
            }))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener_perfil(&self, id_usuario: i64) -> AppResult<PerfilCompleto> {
        let respuesta = self
            .http
            .get(format!("{}/perfil/{}", self.base_url, id_usuario))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn actualizar_perfil(
        &self,
        solicitud: &ActualizarPerfilRequest,
    ) -> AppResult<RespuestaActualizacion> {
        let respuesta = self
            .http
            .post(format!("{}/actualizarPerfil", self.base_url))
            .json(solicitud)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn actualizar_cliente(
        &self,
        solicitud: &ActualizarClienteRequest,
    ) -> AppResult<RespuestaActualizacion> {
        let respuesta = self
            .http
            .post(format!("{}/actualizarCliente", self.base_url))
            .json(solicitud)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn cambiar_clave(
        &self,
        solicitud: &CambiarClaveRequest,
    ) -> AppResult<RespuestaGenerica> {
        let respuesta = self
            .http
            .post(format!("{}/cambiarClave", self.base_url))
            .json(solicitud)
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
