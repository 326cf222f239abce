//! Cliente HTTP del recurso categoría
//!
//! Las categorías son la única entidad con eliminación real en el backend.

use reqwest::Client;

use super::leer_json;
use crate::models::categoria::{Categoria, CategoriaRequest, RespuestaCategoria};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct CategoriaClient {
    http: Client,
    base_url: String,
}

impl CategoriaClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todas(&self) -> AppResult<Vec<Categoria>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodasCategorias", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener_activas(&self) -> AppResult<Vec<Categoria>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerActivas", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn crear(&self, categoria: &CategoriaRequest) -> AppResult<Categoria> {
        let respuesta = self
            .http
            .post(format!("{}/crearCategoria", self.base_url))
            .json(categoria)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn cambiar_estado(&self, id: i64) -> AppResult<Categoria> {
        let respuesta = self
            .http
            .post(format!("{}/cambiarEstado/{}", self.base_url, id))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener(&self, id: i64) -> AppResult<Categoria> {
        let respuesta = self
            .http
            .get(format!("{}/findRecord/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn eliminar(&self, id: i64) -> AppResult<RespuestaCategoria> {
        let respuesta = self
            .http
            .delete(format!("{}/eliminarCategoria/{}", self.base_url, id))
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
