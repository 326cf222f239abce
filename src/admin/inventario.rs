//! Pantalla de administración de inventario
//!
//! Listado con salud de stock derivada más las operaciones de stock que
//! expone el backend (crear registro, actualizar cantidad, distribuir el
//! stock no asignado de un producto).

use tracing::error;

use crate::clients::InventarioClient;
use crate::models::inventario::{EstadoStock, Inventario, InventarioRequest};
use crate::models::notificacion::Notificacion;
use crate::utils::validation::validar_no_negativo;

pub struct InventarioController {
    client: InventarioClient,
    pub inventarios: Vec<Inventario>,
    pub cargando: bool,
    pub notificacion: Option<Notificacion>,
}

impl InventarioController {
    pub fn new(client: InventarioClient) -> Self {
        Self {
            client,
            inventarios: Vec::new(),
            cargando: true,
            notificacion: None,
        }
    }

    pub async fn cargar(&mut self) {
        self.cargando = true;
        match self.client.obtener_todo().await {
            Ok(inventarios) => self.inventarios = inventarios,
            Err(e) => {
                self.inventarios = Vec::new();
                self.notificacion =
                    Some(Notificacion::error("Error al cargar el inventario"));
                error!("Error al cargar el inventario: {}", e);
            }
        }
        self.cargando = false;
    }

    pub fn total_stock_bajo(&self) -> usize {
        self.inventarios
            .iter()
            .filter(|inv| inv.estado_stock() == EstadoStock::Bajo)
            .count()
    }

    pub fn total_stock_optimo(&self) -> usize {
        self.inventarios
            .iter()
            .filter(|inv| inv.estado_stock() == EstadoStock::Optimo)
            .count()
    }

    pub async fn crear_registro(&mut self, solicitud: &InventarioRequest) -> bool {
        match self.client.crear(solicitud).await {
            Ok(_) => {
                self.notificacion =
                    Some(Notificacion::exito("Registro de inventario creado"));
                self.cargar().await;
                true
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al crear registro de inventario: {}", e);
                false
            }
        }
    }

    pub async fn actualizar_stock(&mut self, id_inventario: i64, nueva_cantidad: i64) -> bool {
        if validar_no_negativo(nueva_cantidad).is_err() {
            self.notificacion = Some(Notificacion::advertencia(
                "La cantidad no puede ser negativa",
            ));
            return false;
        }
        match self.client.actualizar_stock(id_inventario, nueva_cantidad).await {
            Ok(_) => {
                // parchear la fila en memoria sin recargar la lista
                if let Some(fila) = self
                    .inventarios
                    .iter_mut()
                    .find(|inv| inv.id_inventario == id_inventario)
                {
                    fila.cantidad_disponible = nueva_cantidad;
                }
                self.notificacion = Some(Notificacion::exito("Stock actualizado"));
                true
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al actualizar stock: {}", e);
                false
            }
        }
    }

    pub async fn distribuir_stock(&mut self, id_producto: i64) -> bool {
        match self.client.distribuir_stock(id_producto).await {
            Ok(_) => {
                self.notificacion =
                    Some(Notificacion::exito("Stock distribuido entre bodegas"));
                self.cargar().await;
                true
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al distribuir stock: {}", e);
                false
            }
        }
    }
}
