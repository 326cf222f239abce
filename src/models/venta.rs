//! Modelo de orden de venta
//!
//! El payload de creación usa snake_case (`id_cliente`, `detalle_ventas`)
//! pero la respuesta llega en camelCase (`idVenta`, `montoTotal`).

use serde::{Deserialize, Serialize};

/// Línea de detalle enviada al crear una orden. `descuento` es el monto de
/// descuento por unidad, no un porcentaje.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleVentaRequest {
    pub id_producto: i64,
    pub cantidad: u32,
    pub precio: f64,
    pub descuento: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdenVentaRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_orden: Option<String>,
    pub id_cliente: i64,
    pub detalle_ventas: Vec<DetalleVentaRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdenVentaResponse {
    pub id_venta: i64,
    #[serde(default)]
    pub fecha_orden: Option<String>,
    #[serde(default)]
    pub valor_venta: f64,
    #[serde(default)]
    pub valor_descuento: f64,
    #[serde(default)]
    pub monto_total: f64,
    #[serde(default)]
    pub estado: i32,
    #[serde(default)]
    pub cliente: Option<serde_json::Value>,
    #[serde(default)]
    pub detalle_ventas: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrato_snake_case_en_creacion() {
        let request = OrdenVentaRequest {
            fecha_orden: None,
            id_cliente: 4,
            detalle_ventas: vec![DetalleVentaRequest {
                id_producto: 7,
                cantidad: 2,
                precio: 1000.0,
                descuento: 100.0,
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("id_cliente").is_some());
        assert!(json.get("detalle_ventas").is_some());
        assert!(json["detalle_ventas"][0].get("id_producto").is_some());
    }

    #[test]
    fn test_respuesta_camel_case() {
        let respuesta: OrdenVentaResponse =
            serde_json::from_str(r#"{"idVenta": 31, "montoTotal": 1800.0}"#).unwrap();
        assert_eq!(respuesta.id_venta, 31);
        assert_eq!(respuesta.monto_total, 1800.0);
    }
}
