//! Cliente HTTP del recurso franquicia

use reqwest::Client;

use super::leer_json;
use crate::models::franquicia::Franquicia;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct FranquiciaClient {
    http: Client,
    base_url: String,
}

impl FranquiciaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todas(&self) -> AppResult<Vec<Franquicia>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodosFranquicia", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener_activas(&self) -> AppResult<Vec<Franquicia>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerActivas", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener(&self, id: i64) -> AppResult<Franquicia> {
        let respuesta = self
            .http
            .get(format!("{}/findRecord/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
