use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use districandy_client::config::EnvironmentConfig;
use districandy_client::storage::MemoryStorage;
use districandy_client::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🍬 DistriCandy - Cliente de tienda y back-office");
    info!("================================================");

    let config = EnvironmentConfig::default();
    info!("🌐 Backend configurado en {}", config.api_base_url);

    let state = AppState::new(config, Arc::new(MemoryStorage::new()));

    // Sondeo de conectividad contra el backend
    match state.productos.obtener_activos().await {
        Ok(productos) => {
            info!("✅ Backend disponible: {} productos activos", productos.len());
        }
        Err(e) => {
            warn!("⚠️ Backend no disponible: {}", e);
        }
    }
    match state.categorias.obtener_activas().await {
        Ok(categorias) => {
            info!("✅ Categorías activas: {}", categorias.len());
        }
        Err(e) => {
            warn!("⚠️ No se pudieron cargar las categorías: {}", e);
        }
    }

    info!("🔍 Recursos del backend:");
    info!("   POST usuario/iniciarSesion - Inicio de sesión");
    info!("   POST usuario/registrarCliente - Registro de clientes");
    info!("   GET  producto/obtenerTodoProducto - Catálogo completo");
    info!("   POST producto/crearProducto - Crear producto");
    info!("   POST producto/cambiarEstado/:id - Alternar estado");
    info!("   GET  categoria/obtenerTodasCategorias - Categorías");
    info!("   GET  proveedor/getAll - Proveedores");
    info!("   GET  bodega/obtenerTodasBodegas - Bodegas");
    info!("   GET  inventario/obtenerTodoInventario - Inventario");
    info!("   POST ordenesVenta - Crear orden de venta");
    info!("   POST transaccion/saveTransaccion - Registrar transacción");
    info!("   GET  banco/obtenerctivos - Bancos activos (PSE)");
    info!("   GET  franquicia/obtenerActivas - Franquicias activas");

    Ok(())
}
