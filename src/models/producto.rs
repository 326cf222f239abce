//! Modelo de producto
//!
//! El backend entrega los productos en camelCase (`idProducto`,
//! `precioUnitario`, `fotoProducto`). El modelo de pantalla renombra la foto
//! a `imagen` y normaliza el descuento a un porcentaje entero en `[0, 100]`.

use serde::{Deserialize, Serialize};

/// Categoría resumida tal como viaja anidada en un producto
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriaResumen {
    pub id_categoria: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

/// Producto tal como lo entrega el backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoBackend {
    #[serde(default)]
    pub id_producto: Option<i64>,
    pub nombre: String,
    pub referencia: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio_unitario: f64,
    #[serde(default)]
    pub valor_descuento: Option<f64>,
    #[serde(default)]
    pub existencia: u32,
    #[serde(default)]
    pub foto_producto: Option<String>,
    #[serde(default)]
    pub estado: Option<i32>,
    #[serde(default)]
    pub categorias: Option<Vec<CategoriaResumen>>,
}

/// Producto para las pantallas de tienda y administración
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    #[serde(default)]
    pub id_producto: Option<i64>,
    pub nombre: String,
    pub referencia: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio_unitario: f64,
    #[serde(default)]
    pub valor_descuento: Option<f64>,
    #[serde(default)]
    pub existencia: u32,
    #[serde(default)]
    pub imagen: Option<String>,
    #[serde(default)]
    pub estado: Option<i32>,
    #[serde(default)]
    pub categorias: Vec<CategoriaResumen>,
    /// Porcentaje de descuento normalizado para mostrar
    #[serde(default)]
    pub descuento: u32,
}

pub const ESTADO_ACTIVO: i32 = 1;

impl Producto {
    pub fn esta_activo(&self) -> bool {
        self.estado == Some(ESTADO_ACTIVO)
    }

    /// Categoría principal (la primera asociada), si existe
    pub fn categoria_principal(&self) -> Option<&CategoriaResumen> {
        self.categorias.first()
    }

    pub fn pertenece_a_categoria(&self, id_categoria: i64) -> bool {
        self.categorias.iter().any(|c| c.id_categoria == id_categoria)
    }
}

impl From<ProductoBackend> for Producto {
    fn from(p: ProductoBackend) -> Self {
        let descuento = porcentaje_descuento(p.valor_descuento);
        Self {
            id_producto: p.id_producto,
            nombre: p.nombre,
            referencia: p.referencia,
            descripcion: p.descripcion,
            precio_unitario: p.precio_unitario,
            valor_descuento: p.valor_descuento,
            existencia: p.existencia,
            imagen: p.foto_producto,
            estado: p.estado,
            categorias: p.categorias.unwrap_or_default(),
            descuento,
        }
    }
}

/// Porcentaje entero de descuento para mostrar, acotado a `[0, 100]`
pub fn porcentaje_descuento(valor_descuento: Option<f64>) -> u32 {
    match valor_descuento {
        Some(d) if d > 0.0 => d.min(100.0).round() as u32,
        _ => 0,
    }
}

/// Payload de creación/actualización de producto (camelCase, ids de
/// categorías como arreglo)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoRequest {
    pub nombre: String,
    pub referencia: String,
    #[serde(default)]
    pub descripcion: String,
    pub precio_unitario: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valor_descuento: Option<f64>,
    pub existencia: u32,
    pub ids_categorias: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto_producto: Option<String>,
}

/// Respuesta de creación de producto
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaProducto {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub exito: Option<bool>,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub producto: Option<ProductoBackend>,
}

impl RespuestaProducto {
    /// El backend usa `success` o `exito` según el endpoint
    pub fn fue_exitosa(&self) -> bool {
        self.success.or(self.exito).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_base() -> ProductoBackend {
        ProductoBackend {
            id_producto: Some(7),
            nombre: "Chocolatina".to_string(),
            referencia: "CHO-35".to_string(),
            descripcion: String::new(),
            precio_unitario: 1500.0,
            valor_descuento: Some(10.0),
            existencia: 20,
            foto_producto: Some("cho35.png".to_string()),
            estado: Some(1),
            categorias: None,
        }
    }

    #[test]
    fn test_mapeo_backend() {
        let producto = Producto::from(backend_base());
        assert_eq!(producto.imagen.as_deref(), Some("cho35.png"));
        assert_eq!(producto.descuento, 10);
        assert!(producto.esta_activo());
    }

    #[test]
    fn test_porcentaje_descuento_acotado() {
        assert_eq!(porcentaje_descuento(None), 0);
        assert_eq!(porcentaje_descuento(Some(-5.0)), 0);
        assert_eq!(porcentaje_descuento(Some(150.0)), 100);
        assert_eq!(porcentaje_descuento(Some(12.4)), 12);
    }

    #[test]
    fn test_contrato_camel_case() {
        let json = serde_json::to_value(ProductoRequest {
            nombre: "Gomas".into(),
            referencia: "GOM-1".into(),
            descripcion: "surtidas".into(),
            precio_unitario: 2000.0,
            valor_descuento: None,
            existencia: 5,
            ids_categorias: vec![1, 2],
            foto_producto: None,
        })
        .unwrap();
        assert!(json.get("precioUnitario").is_some());
        assert!(json.get("idsCategorias").is_some());
        assert!(json.get("precio_unitario").is_none());
    }
}
