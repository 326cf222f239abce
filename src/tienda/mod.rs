//! Pantalla de tienda
//!
//! Catálogo de productos activos con búsqueda por texto, vistas por
//! categoría y por descuento, y adición al carrito.

use crate::carrito::Carrito;
use crate::clients::{CategoriaClient, ProductoClient};
use crate::models::categoria::Categoria;
use crate::models::notificacion::Notificacion;
use crate::models::producto::Producto;

/// Producto en la tienda con la cantidad elegida en pantalla
#[derive(Debug, Clone)]
pub struct ProductoTienda {
    pub producto: Producto,
    pub cantidad: u32,
}

pub struct TiendaController {
    productos_client: ProductoClient,
    categorias_client: CategoriaClient,
    pub productos: Vec<ProductoTienda>,
    pub categorias: Vec<Categoria>,
    pub busqueda: String,
    pub cargando: bool,
    pub notificacion: Option<Notificacion>,
}

impl TiendaController {
    pub fn new(productos_client: ProductoClient, categorias_client: CategoriaClient) -> Self {
        Self {
            productos_client,
            categorias_client,
            productos: Vec::new(),
            categorias: Vec::new(),
            busqueda: String::new(),
            cargando: false,
            notificacion: None,
        }
    }

    pub async fn cargar_productos(&mut self) {
        self.cargando = true;
        match self.productos_client.obtener_activos().await {
            Ok(productos) => {
                self.productos = productos
                    .into_iter()
                    .map(|producto| ProductoTienda { producto, cantidad: 1 })
                    .collect();
            }
            Err(e) => {
                self.productos = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar productos"));
                tracing::error!("Error al cargar productos: {}", e);
            }
        }
        self.cargando = false;
    }

    pub async fn cargar_categorias(&mut self) {
        match self.categorias_client.obtener_activas().await {
            Ok(categorias) => self.categorias = categorias,
            Err(e) => {
                self.categorias = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar categorías"));
                tracing::error!("Error al cargar categorías: {}", e);
            }
        }
    }

    /// Filtro por nombre, descripción o referencia, sin distinguir mayúsculas
    pub fn productos_filtrados(&self) -> Vec<&ProductoTienda> {
        let termino = self.busqueda.trim().to_lowercase();
        if termino.is_empty() {
            return self.productos.iter().collect();
        }
        self.productos
            .iter()
            .filter(|p| {
                p.producto.nombre.to_lowercase().contains(&termino)
                    || p.producto.descripcion.to_lowercase().contains(&termino)
                    || p.producto.referencia.to_lowercase().contains(&termino)
            })
            .collect()
    }

    pub fn productos_por_categoria(&self, id_categoria: i64) -> Vec<&ProductoTienda> {
        self.productos_filtrados()
            .into_iter()
            .filter(|p| p.producto.pertenece_a_categoria(id_categoria))
            .collect()
    }

    /// Productos con descuento, de mayor a menor porcentaje
    pub fn productos_con_descuento(&self) -> Vec<&ProductoTienda> {
        let mut con_descuento: Vec<&ProductoTienda> = self
            .productos_filtrados()
            .into_iter()
            .filter(|p| p.producto.valor_descuento.unwrap_or(0.0) > 0.0)
            .collect();
        con_descuento.sort_by(|a, b| {
            let da = a.producto.valor_descuento.unwrap_or(0.0);
            let db = b.producto.valor_descuento.unwrap_or(0.0);
            db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
        });
        con_descuento
    }

    pub fn categoria_tiene_productos(&self, id_categoria: i64) -> bool {
        !self.productos_por_categoria(id_categoria).is_empty()
    }

    fn buscar_mut(&mut self, id_producto: i64) -> Option<&mut ProductoTienda> {
        self.productos
            .iter_mut()
            .find(|p| p.producto.id_producto == Some(id_producto))
    }

    pub fn aumentar_cantidad(&mut self, id_producto: i64) {
        if let Some(p) = self.buscar_mut(id_producto) {
            if p.cantidad < p.producto.existencia {
                p.cantidad += 1;
            }
        }
    }

    pub fn disminuir_cantidad(&mut self, id_producto: i64) {
        if let Some(p) = self.buscar_mut(id_producto) {
            if p.cantidad > 1 {
                p.cantidad -= 1;
            }
        }
    }

    /// Agregar al carrito la cantidad elegida en pantalla; tras una adición
    /// exitosa la cantidad de la tarjeta vuelve a 1.
    pub fn agregar_al_carrito(&mut self, carrito: &mut Carrito, id_producto: i64) -> Notificacion {
        let Some(indice) = self
            .productos
            .iter()
            .position(|p| p.producto.id_producto == Some(id_producto))
        else {
            return Notificacion::error("Producto no encontrado");
        };

        let cantidad = self.productos[indice].cantidad;
        let notificacion = carrito.agregar(&self.productos[indice].producto.clone(), cantidad);
        if notificacion.es_exito() {
            self.productos[indice].cantidad = 1;
        }
        self.notificacion = Some(notificacion.clone());
        notificacion
    }
}
