//! Cliente HTTP de transacciones de pago

use async_trait::async_trait;
use reqwest::Client;

use super::leer_json;
use crate::models::transaccion::{TransaccionRequest, TransaccionResponse, TransaccionResumen};
use crate::utils::errors::AppResult;

/// Puerto de procesamiento de transacciones, sustituible en pruebas
#[async_trait]
pub trait ProcesadorTransacciones: Send + Sync {
    async fn procesar(&self, solicitud: &TransaccionRequest) -> AppResult<TransaccionResponse>;
}

#[derive(Clone)]
pub struct TransaccionClient {
    http: Client,
    base_url: String,
}

impl TransaccionClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_por_usuario(&self, id_usuario: i64) -> AppResult<Vec<TransaccionResumen>> {
        let respuesta = self
            .http
            .get(format!("{}/conseguirPorIdUsuario/{}", self.base_url, id_usuario))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener(&self, id: i64) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .get(format!("{}/findRecord/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}

#[async_trait]
impl ProcesadorTransacciones for TransaccionClient {
    async fn procesar(&self, solicitud: &TransaccionRequest) -> AppResult<TransaccionResponse> {
        let respuesta = self
            .http
            .post(format!("{}/saveTransaccion", self.base_url))
            .json(solicitud)
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
