//! Cliente HTTP del recurso proveedor

use reqwest::Client;

use super::leer_json;
use crate::models::proveedor::{Proveedor, ProveedorRequest};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct ProveedorClient {
    http: Client,
    base_url: String,
}

impl ProveedorClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Proveedor>> {
        let respuesta = self
            .http
            .get(format!("{}/getAll", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn crear(&self, proveedor: &ProveedorRequest) -> AppResult<Proveedor> {
        let respuesta = self
            .http
            .post(format!("{}/crearProveedor", self.base_url))
            .json(proveedor)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn actualizar(&self, id: i64, proveedor: &ProveedorRequest) -> AppResult<Proveedor> {
        let respuesta = self
            .http
            .put(format!("{}/update/{}", self.base_url, id))
            .json(proveedor)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn cambiar_estado(&self, id: i64) -> AppResult<Proveedor> {
        let respuesta = self
            .http
            .post(format!("{}/cambiarEstado/{}", self.base_url, id))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
