//! Modelo de bodega
//!
//! Las lecturas llegan en camelCase pero el payload de creación/actualización
//! usa `capacidad_max` e `informacion_adicional` en snake_case. El contrato
//! del backend es fijo, así que la mezcla se preserva.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bodega {
    #[serde(default)]
    pub id_bodega: Option<i64>,
    pub nombre: String,
    pub direccion: String,
    pub pais: String,
    pub ciudad: String,
    pub barrio: String,
    pub capacidad_max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacion_adicional: Option<String>,
    pub estado: i32,
}

impl Bodega {
    pub fn esta_activa(&self) -> bool {
        self.estado == 1
    }
}

/// Payload snake_case para crear o actualizar una bodega
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodegaRequest {
    pub nombre: String,
    pub direccion: String,
    pub pais: String,
    pub ciudad: String,
    pub barrio: String,
    pub capacidad_max: f64,
    pub informacion_adicional: String,
}

/// Respuesta de los endpoints de bodega
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodegaResponse {
    pub exito: bool,
    #[serde(default)]
    pub mensaje: Option<String>,
    #[serde(default)]
    pub bodega: Option<Bodega>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrato_mixto() {
        let bodega = Bodega {
            id_bodega: Some(1),
            nombre: "Central".into(),
            direccion: "Calle 1".into(),
            pais: "Colombia".into(),
            ciudad: "Bogotá".into(),
            barrio: "Centro".into(),
            capacidad_max: 500.0,
            informacion_adicional: None,
            estado: 1,
        };
        let leido = serde_json::to_value(&bodega).unwrap();
        assert!(leido.get("capacidadMax").is_some());

        let request = BodegaRequest {
            nombre: bodega.nombre,
            direccion: bodega.direccion,
            pais: bodega.pais,
            ciudad: bodega.ciudad,
            barrio: bodega.barrio,
            capacidad_max: bodega.capacidad_max,
            informacion_adicional: String::new(),
        };
        let enviado = serde_json::to_value(&request).unwrap();
        assert!(enviado.get("capacidad_max").is_some());
        assert!(enviado.get("capacidadMax").is_none());
    }
}
