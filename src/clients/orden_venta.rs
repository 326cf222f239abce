//! Cliente HTTP de órdenes de venta

use async_trait::async_trait;
use reqwest::Client;

use super::leer_json;
use crate::models::venta::{OrdenVentaRequest, OrdenVentaResponse};
use crate::utils::errors::AppResult;

/// Puerto de creación de órdenes; el checkout depende de este trait para que
/// las pruebas puedan sustituir el backend por un doble en memoria.
#[async_trait]
pub trait CreadorOrdenes: Send + Sync {
    async fn crear_orden(&self, solicitud: &OrdenVentaRequest) -> AppResult<OrdenVentaResponse>;
}

#[derive(Clone)]
pub struct OrdenVentaClient {
    http: Client,
    base_url: String,
}

impl OrdenVentaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener(&self, id: i64) -> AppResult<OrdenVentaResponse> {
        let respuesta = self
            .http
            .get(format!("{}/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}

#[async_trait]
impl CreadorOrdenes for OrdenVentaClient {
    async fn crear_orden(&self, solicitud: &OrdenVentaRequest) -> AppResult<OrdenVentaResponse> {
        let respuesta = self.http.post(&self.base_url).json(solicitud).send().await?;
        leer_json(respuesta).await
    }
}
