//! Carrito de compras
//!
//! Mantiene las líneas (producto, cantidad), fusiona adiciones repetidas,
//! calcula precios con descuento y persiste la lista completa bajo la clave
//! `carrito` en cada mutación. Al cargar, los subtotales guardados se
//! descartan y se recalculan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::notificacion::Notificacion;
use crate::models::producto::Producto;
use crate::storage::Storage;

pub const CLAVE_CARRITO: &str = "carrito";

/// Línea del carrito. El producto va aplanado en el JSON persistido, de modo
/// que la lista guardada es un arreglo de productos con `cantidad` y
/// `subtotal` añadidos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaCarrito {
    #[serde(flatten)]
    pub producto: Producto,
    #[serde(default = "cantidad_por_defecto")]
    pub cantidad: u32,
    /// Derivado; nunca se confía en el valor persistido
    #[serde(default)]
    pub subtotal: f64,
}

fn cantidad_por_defecto() -> u32 {
    1
}

/// Totales agregados del carrito
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResumenCarrito {
    pub subtotal: f64,
    pub descuento_total: f64,
    pub costo_envio: f64,
    pub total: f64,
}

/// Precio unitario con descuento aplicado: el porcentaje se acota a 100,
/// el resultado nunca es negativo y se redondea al peso.
pub fn precio_con_descuento(producto: &Producto) -> f64 {
    let descuento = producto.valor_descuento.unwrap_or(0.0);
    if descuento <= 0.0 {
        return producto.precio_unitario;
    }
    let porcentaje = descuento.min(100.0);
    let monto = producto.precio_unitario * porcentaje / 100.0;
    (producto.precio_unitario - monto).max(0.0).round()
}

/// Monto de descuento por unidad (precio original menos precio rebajado)
pub fn descuento_unitario(producto: &Producto) -> f64 {
    producto.precio_unitario - precio_con_descuento(producto)
}

pub struct Carrito {
    lineas: Vec<LineaCarrito>,
    storage: Arc<dyn Storage>,
    costo_envio: f64,
}

impl Carrito {
    /// Cargar el carrito persistido; los subtotales guardados se recalculan
    pub fn cargar(storage: Arc<dyn Storage>, costo_envio: f64) -> Self {
        let mut lineas: Vec<LineaCarrito> = storage
            .get(CLAVE_CARRITO)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
        for linea in &mut lineas {
            linea.subtotal = precio_con_descuento(&linea.producto) * linea.cantidad as f64;
        }
        Self { lineas, storage, costo_envio }
    }

    pub fn lineas(&self) -> &[LineaCarrito] {
        &self.lineas
    }

    pub fn esta_vacio(&self) -> bool {
        self.lineas.is_empty()
    }

    /// Total de unidades, para el contador de la tienda
    pub fn total_unidades(&self) -> u32 {
        self.lineas.iter().map(|l| l.cantidad).sum()
    }

    /// Agregar un producto. Si ya existe una línea con el mismo id, la
    /// cantidad se suma a la existente; un producto agotado no muta nada.
    pub fn agregar(&mut self, producto: &Producto, cantidad: u32) -> Notificacion {
        if producto.existencia == 0 {
            return Notificacion::advertencia("Producto agotado");
        }
        let cantidad = cantidad.max(1);

        match self
            .lineas
            .iter_mut()
            .find(|l| l.producto.id_producto == producto.id_producto)
        {
            Some(linea) => {
                linea.cantidad += cantidad;
                linea.subtotal = precio_con_descuento(&linea.producto) * linea.cantidad as f64;
            }
            None => {
                let subtotal = precio_con_descuento(producto) * cantidad as f64;
                self.lineas.push(LineaCarrito {
                    producto: producto.clone(),
                    cantidad,
                    subtotal,
                });
            }
        }
        self.guardar();
        Notificacion::exito(format!("{} agregado al carrito", producto.nombre))
    }

    /// Fijar la cantidad de una línea, acotada a `[1, existencia]`
    pub fn fijar_cantidad(&mut self, id_producto: i64, cantidad: u32) -> Notificacion {
        let Some(linea) = self
            .lineas
            .iter_mut()
            .find(|l| l.producto.id_producto == Some(id_producto))
        else {
            return Notificacion::error("El producto no está en el carrito");
        };

        let existencia = linea.producto.existencia;
        let notificacion = if cantidad < 1 {
            linea.cantidad = 1;
            Notificacion::advertencia("La cantidad mínima es 1")
        } else if cantidad > existencia {
            linea.cantidad = existencia.max(1);
            Notificacion::advertencia(format!("Solo hay {} unidades disponibles", existencia))
        } else {
            linea.cantidad = cantidad;
            Notificacion::exito("Cantidad actualizada")
        };
        linea.subtotal = precio_con_descuento(&linea.producto) * linea.cantidad as f64;
        self.guardar();
        notificacion
    }

    pub fn aumentar_cantidad(&mut self, id_producto: i64) -> Notificacion {
        let Some(linea) = self
            .lineas
            .iter()
            .find(|l| l.producto.id_producto == Some(id_producto))
        else {
            return Notificacion::error("El producto no está en el carrito");
        };
        let actual = linea.cantidad;
        let existencia = linea.producto.existencia;
        if actual >= existencia {
            return Notificacion::advertencia(format!(
                "Solo hay {} unidades disponibles",
                existencia
            ));
        }
        self.fijar_cantidad(id_producto, actual + 1)
    }

    pub fn disminuir_cantidad(&mut self, id_producto: i64) -> Notificacion {
        let Some(linea) = self
            .lineas
            .iter()
            .find(|l| l.producto.id_producto == Some(id_producto))
        else {
            return Notificacion::error("El producto no está en el carrito");
        };
        let actual = linea.cantidad;
        if actual <= 1 {
            return Notificacion::advertencia("La cantidad mínima es 1");
        }
        self.fijar_cantidad(id_producto, actual - 1)
    }

    /// Eliminar una línea por id de producto
    pub fn eliminar(&mut self, id_producto: i64) -> Notificacion {
        let Some(posicion) = self
            .lineas
            .iter()
            .position(|l| l.producto.id_producto == Some(id_producto))
        else {
            return Notificacion::error("El producto no está en el carrito");
        };
        let nombre = self.lineas[posicion].producto.nombre.clone();
        self.lineas.remove(posicion);
        self.guardar();
        Notificacion::exito(format!("{} eliminado del carrito", nombre))
    }

    /// Vaciar el carrito (persiste la lista vacía)
    pub fn vaciar(&mut self) -> Notificacion {
        self.lineas.clear();
        self.guardar();
        Notificacion::exito("Carrito vaciado")
    }

    /// Quitar el carrito del almacenamiento por completo (fin del checkout)
    pub fn limpiar_almacenamiento(&mut self) {
        self.lineas.clear();
        self.storage.remove(CLAVE_CARRITO);
    }

    /// Totales agregados: `total = subtotal - descuento_total + costo_envio`
    pub fn totales(&self) -> ResumenCarrito {
        let mut subtotal = 0.0;
        let mut descuento_total = 0.0;
        for linea in &self.lineas {
            let original = linea.producto.precio_unitario * linea.cantidad as f64;
            let rebajado = precio_con_descuento(&linea.producto) * linea.cantidad as f64;
            subtotal += original;
            descuento_total += original - rebajado;
        }
        let costo_envio = if self.lineas.is_empty() { 0.0 } else { self.costo_envio };
        ResumenCarrito {
            subtotal,
            descuento_total,
            costo_envio,
            total: subtotal - descuento_total + costo_envio,
        }
    }

    /// Serializar la lista completa; cada mutación reemplaza el valor entero
    fn guardar(&self) {
        if let Ok(json) = serde_json::to_string(&self.lineas) {
            self.storage.set(CLAVE_CARRITO, &json);
        }
    }
}
