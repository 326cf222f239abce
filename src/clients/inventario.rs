//! Cliente HTTP del recurso inventario

use reqwest::Client;

use super::leer_json;
use crate::models::inventario::{Inventario, InventarioRequest};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct InventarioClient {
    http: Client,
    base_url: String,
}

impl InventarioClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub async fn obtener_todo(&self) -> AppResult<Vec<Inventario>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodoInventario", self.base_url))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn obtener_por_producto(&self, id_producto: i64) -> AppResult<Vec<Inventario>> {
        let respuesta = self
            .http
            .get(format!("{}/porProducto/{}", self.base_url, id_producto))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn stock_no_distribuido(&self, id_producto: i64) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .get(format!("{}/stockNoDistribuido/{}", self.base_url, id_producto))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn crear(&self, inventario: &InventarioRequest) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .post(format!("{}/crearInventario", self.base_url))
            .json(inventario)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn actualizar_stock(
        &self,
        id_inventario: i64,
        nueva_cantidad: i64,
    ) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .post(format!("{}/actualizarStock/{}", self.base_url, id_inventario))
            .json(&serde_json::json!({ "nuevaCantidad": nueva_cantidad }))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn distribuir_stock(&self, id_producto: i64) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .post(format!("{}/distribuirStock/{}", self.base_url, id_producto))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn verificar_existencia(
        &self,
        id_producto: i64,
        id_bodega: i64,
    ) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .get(format!("{}/verificarExistencia", self.base_url))
            .query(&[
                ("idProducto", id_producto.to_string()),
                ("idBodega", id_bodega.to_string()),
            ])
            .send()
            .await?;
        leer_json(respuesta).await
    }
}
