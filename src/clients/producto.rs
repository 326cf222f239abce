//! Cliente HTTP del recurso producto

use reqwest::Client;

use super::{leer_json, verificar_respuesta};
use crate::models::producto::{Producto, ProductoBackend, ProductoRequest, RespuestaProducto};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct ProductoClient {
    http: Client,
    base_url: String,
}

impl ProductoClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    /// Obtener todos los productos, mapeados al modelo de pantalla
    pub async fn obtener_todos(&self) -> AppResult<Vec<Producto>> {
        let respuesta = self
            .http
            .get(format!("{}/obtenerTodoProducto", self.base_url))
            .send()
            .await?;
        let productos: Vec<ProductoBackend> = leer_json(respuesta).await?;
        Ok(productos.into_iter().map(Producto::from).collect())
    }

    /// Solo productos con estado activo
    pub async fn obtener_activos(&self) -> AppResult<Vec<Producto>> {
        let productos = self.obtener_todos().await?;
        Ok(productos.into_iter().filter(|p| p.esta_activo()).collect())
    }

    /// Productos activos de una categoría
    pub async fn obtener_por_categoria(&self, id_categoria: i64) -> AppResult<Vec<Producto>> {
        let productos = self.obtener_todos().await?;
        Ok(productos
            .into_iter()
            .filter(|p| p.esta_activo() && p.pertenece_a_categoria(id_categoria))
            .collect())
    }

    pub async fn buscar_por_nombre(&self, nombre: &str) -> AppResult<Producto> {
        let respuesta = self
            .http
            .get(format!("{}/nombre", self.base_url))
            .query(&[("nombre", nombre)])
            .send()
            .await?;
        let producto: ProductoBackend = leer_json(respuesta).await?;
        Ok(producto.into())
    }

    pub async fn crear(&self, producto: &ProductoRequest) -> AppResult<RespuestaProducto> {
        let respuesta = self
            .http
            .post(format!("{}/crearProducto", self.base_url))
            .json(producto)
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn actualizar(&self, id: i64, producto: &ProductoRequest) -> AppResult<Producto> {
        let respuesta = self
            .http
            .put(format!("{}/actualizarProducto/{}", self.base_url, id))
            .json(producto)
            .send()
            .await?;
        let producto: ProductoBackend = leer_json(respuesta).await?;
        Ok(producto.into())
    }

    /// Alternar activo/inactivo; devuelve el producto ya actualizado
    pub async fn cambiar_estado(&self, id: i64) -> AppResult<Producto> {
        let respuesta = self
            .http
            .post(format!("{}/cambiarEstado/{}", self.base_url, id))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let producto: ProductoBackend = leer_json(respuesta).await?;
        Ok(producto.into())
    }

    pub async fn verificar_referencia(&self, referencia: &str) -> AppResult<serde_json::Value> {
        let respuesta = self
            .http
            .get(format!("{}/verificarReferencia/{}", self.base_url, referencia))
            .send()
            .await?;
        leer_json(respuesta).await
    }

    pub async fn eliminar(&self, id: i64) -> AppResult<()> {
        let respuesta = self
            .http
            .delete(format!("{}/eliminarProducto/{}", self.base_url, id))
            .send()
            .await?;
        verificar_respuesta(respuesta).await
    }
}
