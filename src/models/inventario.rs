//! Modelo de inventario
//!
//! El estado de stock (Bajo/Medio/Óptimo) es derivado y nunca se persiste.

use serde::{Deserialize, Serialize};

/// Referencia mínima al producto anidado en un registro de inventario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductoRef {
    #[serde(default)]
    pub id_producto: Option<i64>,
    pub nombre: String,
}

/// Referencia mínima a la bodega anidada en un registro de inventario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodegaRef {
    #[serde(default)]
    pub id_bodega: Option<i64>,
    pub nombre: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventario {
    pub id_inventario: i64,
    #[serde(default)]
    pub cantidad_disponible: i64,
    #[serde(default)]
    pub stock_minimo: i64,
    #[serde(default)]
    pub stock_maximo: i64,
    #[serde(default)]
    pub producto: Option<ProductoRef>,
    #[serde(default)]
    pub bodega: Option<BodegaRef>,
}

/// Estado de salud del stock, derivado de disponible vs. mínimo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoStock {
    Bajo,
    Medio,
    Optimo,
}

impl EstadoStock {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoStock::Bajo => "Bajo",
            EstadoStock::Medio => "Medio",
            EstadoStock::Optimo => "Óptimo",
        }
    }
}

impl Inventario {
    pub fn nombre_producto(&self) -> &str {
        self.producto.as_ref().map(|p| p.nombre.as_str()).unwrap_or("N/A")
    }

    pub fn nombre_bodega(&self) -> &str {
        self.bodega.as_ref().map(|b| b.nombre.as_str()).unwrap_or("N/A")
    }

    /// Bajo si disponible <= mínimo; Medio hasta 1.5x el mínimo; Óptimo después
    pub fn estado_stock(&self) -> EstadoStock {
        let disponible = self.cantidad_disponible as f64;
        let minimo = self.stock_minimo as f64;
        if disponible <= minimo {
            EstadoStock::Bajo
        } else if disponible <= minimo * 1.5 {
            EstadoStock::Medio
        } else {
            EstadoStock::Optimo
        }
    }

    /// Porcentaje de llenado respecto al stock máximo, acotado a 100
    pub fn porcentaje_stock(&self) -> u32 {
        let maximo = if self.stock_maximo > 0 { self.stock_maximo } else { 1 };
        let porcentaje = (self.cantidad_disponible as f64 / maximo as f64) * 100.0;
        porcentaje.round().min(100.0) as u32
    }
}

/// Payload de creación de un registro de inventario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventarioRequest {
    pub id_producto: i64,
    pub id_bodega: i64,
    pub cantidad_disponible: i64,
    pub stock_minimo: i64,
    pub stock_maximo: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventario(disponible: i64, minimo: i64, maximo: i64) -> Inventario {
        Inventario {
            id_inventario: 1,
            cantidad_disponible: disponible,
            stock_minimo: minimo,
            stock_maximo: maximo,
            producto: None,
            bodega: None,
        }
    }

    #[test]
    fn test_estado_stock() {
        assert_eq!(inventario(5, 10, 100).estado_stock(), EstadoStock::Bajo);
        assert_eq!(inventario(10, 10, 100).estado_stock(), EstadoStock::Bajo);
        assert_eq!(inventario(14, 10, 100).estado_stock(), EstadoStock::Medio);
        assert_eq!(inventario(15, 10, 100).estado_stock(), EstadoStock::Medio);
        assert_eq!(inventario(16, 10, 100).estado_stock(), EstadoStock::Optimo);
    }

    #[test]
    fn test_porcentaje_stock() {
        assert_eq!(inventario(50, 10, 100).porcentaje_stock(), 50);
        assert_eq!(inventario(150, 10, 100).porcentaje_stock(), 100);
        assert_eq!(inventario(3, 1, 0).porcentaje_stock(), 100);
    }
}
