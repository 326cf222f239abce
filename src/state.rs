//! Shared application state
//!
//! Este módulo arma los clientes HTTP del backend sobre un único
//! `reqwest::Client` compartido y el servicio de sesión sobre el
//! almacenamiento inyectado.

use std::sync::Arc;

use reqwest::Client;

use crate::clients::{
    BancoClient, BodegaClient, CategoriaClient, FranquiciaClient, InventarioClient,
    OrdenVentaClient, ProductoClient, ProveedorClient, TransaccionClient, UsuarioClient,
};
use crate::config::EnvironmentConfig;
use crate::session::SesionService;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub http: Client,
    pub sesion: SesionService,
    pub usuarios: UsuarioClient,
    pub productos: ProductoClient,
    pub categorias: CategoriaClient,
    pub proveedores: ProveedorClient,
    pub bodegas: BodegaClient,
    pub inventarios: InventarioClient,
    pub ordenes: OrdenVentaClient,
    pub transacciones: TransaccionClient,
    pub bancos: BancoClient,
    pub franquicias: FranquiciaClient,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, storage: Arc<dyn Storage>) -> Self {
        let http = Client::new();
        Self {
            sesion: SesionService::new(storage),
            usuarios: UsuarioClient::new(http.clone(), config.url_recurso("usuario")),
            productos: ProductoClient::new(http.clone(), config.url_recurso("producto")),
            categorias: CategoriaClient::new(http.clone(), config.url_recurso("categoria")),
            proveedores: ProveedorClient::new(http.clone(), config.url_recurso("proveedor")),
            bodegas: BodegaClient::new(http.clone(), config.url_recurso("bodega")),
            inventarios: InventarioClient::new(http.clone(), config.url_recurso("inventario")),
            ordenes: OrdenVentaClient::new(http.clone(), config.url_recurso("ordenesVenta")),
            transacciones: TransaccionClient::new(http.clone(), config.url_recurso("transaccion")),
            bancos: BancoClient::new(http.clone(), config.url_recurso("banco")),
            franquicias: FranquiciaClient::new(http.clone(), config.url_recurso("franquicia")),
            http,
            config,
        }
    }
}
