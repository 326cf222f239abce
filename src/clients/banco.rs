//! Cliente HTTP del recurso banco

use reqwest::Client;

use super::leer_json;
use crate::models::banco::Banco;
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct BancoClient {
    http: Client,
    base_url: String,
}

impl BancoClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todos(&self) -> AppResult<Vec<Banco>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodosBanco", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    /// Ruta con el nombre tal como existe en el backend (`obtenerctivos`)
    pub async fn obtener_activos(&self) -> AppResult<Vec<Banco>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerctivos", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener(&self, id: i64) -> AppResult<Banco> {
        let respuesta = self
            .http
            .get(format!("{}/findRecord/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
