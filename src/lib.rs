//! Cliente DistriCandy - tienda y back-office
//!
//! Lógica de cliente para el backend REST de DistriCandy: sesión y roles,
//! catálogo, carrito con precios y descuentos, flujo de checkout y pantallas
//! CRUD de administración.

pub mod admin;
pub mod autorizacion;
pub mod carrito;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod guard;
pub mod models;
pub mod perfil;
pub mod session;
pub mod state;
pub mod storage;
pub mod tienda;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
