//! Clientes HTTP del backend DistriCandy
//!
//! Un cliente por recurso, todos compartiendo el mismo `reqwest::Client`.
//! Cada cliente preserva el contrato exacto de su endpoint (casing de los
//! payloads incluido) porque el backend es externo y fijo.

pub mod banco;
pub mod bodega;
pub mod categoria;
pub mod franquicia;
pub mod inventario;
pub mod orden_venta;
pub mod producto;
pub mod proveedor;
pub mod transaccion;
pub mod usuario;

pub use banco::BancoClient;
pub use bodega::BodegaClient;
pub use categoria::CategoriaClient;
pub use franquicia::FranquiciaClient;
pub use inventario::InventarioClient;
pub use orden_venta::OrdenVentaClient;
pub use producto::ProductoClient;
pub use proveedor::ProveedorClient;
pub use transaccion::TransaccionClient;
pub use usuario::UsuarioClient;

use serde::de::DeserializeOwned;

use crate::utils::errors::{extraer_mensaje_error, AppError, AppResult};

/// Leer el cuerpo JSON de una respuesta, convirtiendo los no-2xx en
/// `AppError::Api` con el mejor mensaje disponible del cuerpo.
pub(crate) async fn leer_json<T: DeserializeOwned>(respuesta: reqwest::Response) -> AppResult<T> {
    let status = respuesta.status();
    if !status.is_success() {
        let cuerpo = respuesta.text().await.unwrap_or_default();
        return Err(AppError::Api {
            status: status.as_u16(),
            mensaje: extraer_mensaje_error(&cuerpo),
        });
    }
    Ok(respuesta.json::<T>().await?)
}

/// Variante para endpoints que no devuelven cuerpo útil
pub(crate) async fn verificar_respuesta(respuesta: reqwest::Response) -> AppResult<()> {
    let status = respuesta.status();
    if !status.is_success() {
        let cuerpo = respuesta.text().await.unwrap_or_default();
        return Err(AppError::Api {
            status: status.as_u16(),
            mensaje: extraer_mensaje_error(&cuerpo),
        });
    }
    Ok(())
}
