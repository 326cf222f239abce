//! Cliente HTTP del recurso bodega

use reqwest::Client;

use super::leer_json;
use crate::models::bodega::{Bodega, BodegaRequest, BodegaResponse};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct BodegaClient {
    http: Client,
    base_url: String,
}

impl BodegaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todas(&self) -> AppResult<Vec<Bodega>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodasBodegas", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn crear(&self, bodega: &BodegaRequest) -> AppResult<BodegaResponse> {
        let respuesta = self
            .http
            .post(format!("{}/crearBodega", self.base_url))
            .json(bodega)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    /// Actualización vía POST, como lo expone el backend
    pub async fn actualizar(&self, id: i64, bodega: &BodegaRequest) -> AppResult<BodegaResponse> {
        let respuesta = self
            .http
            .post(format!("{}/actualizarBodega/{}", self.base_url, id))
            .json(bodega)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn cambiar_estado(&self, id: i64) -> AppResult<BodegaResponse> {
        let respuesta = self
            .http
            .post(format!("{}/cambiarEstado/{}", self.base_url, id))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
