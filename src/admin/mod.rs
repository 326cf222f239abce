//! Pantallas CRUD de administración
//!
//! Cada pantalla mantiene su lista en memoria, un borrador tipado del
//! registro en edición y un mapa de errores de validación por campo. El
//! envío se bloquea mientras el mapa no esté vacío, y el cambio de estado
//! parchea la fila en memoria sin recargar la lista completa.

pub mod bodega;
pub mod categoria;
pub mod inventario;
pub mod producto;
pub mod proveedor;

pub use bodega::BodegaController;
pub use categoria::CategoriaController;
pub use inventario::InventarioController;
pub use producto::ProductoController;
pub use proveedor::ProveedorController;

use std::collections::HashMap;

/// Mapa campo → mensaje con todas las violaciones del formulario
pub type ErroresValidacion = HashMap<&'static str, String>;
