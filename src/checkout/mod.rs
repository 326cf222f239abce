//! Flujo de checkout
//!
//! Máquina de estados `Checkout → {Pse | Credito} → Exito`, con retorno a
//! `Checkout` ante cualquier falla. La orden de venta se crea antes que la
//! transacción, en secuencia estricta; la demora de "procesamiento" del pago
//! es una dependencia inyectada por configuración, no un timer embebido.

pub mod formularios;
pub mod tarjeta;

pub use formularios::{DatosPago, PseForm, TarjetaCreditoForm};
pub use tarjeta::{detectar_tipo_tarjeta, TipoTarjeta};

use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::carrito::{descuento_unitario, Carrito, ResumenCarrito};
use crate::clients::orden_venta::CreadorOrdenes;
use crate::clients::transaccion::ProcesadorTransacciones;
use crate::config::EnvironmentConfig;
use crate::guard::rutas;
use crate::models::transaccion::{
    TransaccionRequest, METODO_PAGO_PSE, METODO_PAGO_TARJETA, TIPO_CLIENTE_NATURAL,
};
use crate::models::venta::{DetalleVentaRequest, OrdenVentaRequest};
use crate::utils::errors::{negocio_error, sesion_error, AppResult};

/// Pantallas del flujo; `Exito` es terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pantalla {
    Checkout,
    Pse,
    Credito,
    Exito,
}

pub struct CheckoutService<O, T> {
    ordenes: O,
    transacciones: T,
    carrito: Carrito,
    id_cliente: i64,
    demora_pago: Duration,
    demora_redireccion: Duration,
    pantalla: Pantalla,
    en_proceso: bool,
    error: Option<String>,
    id_orden_venta: Option<i64>,
}

impl<O, T> CheckoutService<O, T>
where
    O: CreadorOrdenes,
    T: ProcesadorTransacciones,
{
    /// Entrar al checkout. Exige carrito no vacío y cliente resuelto desde
    /// la sesión; si falta alguno, el llamador debe redirigir.
    pub fn iniciar(
        carrito: Carrito,
        id_cliente: Option<i64>,
        ordenes: O,
        transacciones: T,
        config: &EnvironmentConfig,
    ) -> AppResult<Self> {
        if carrito.esta_vacio() {
            return Err(negocio_error("No hay productos en el carrito"));
        }
        let Some(id_cliente) = id_cliente else {
            return Err(sesion_error(
                "No se pudo identificar al cliente. Por favor inicia sesión nuevamente.",
            ));
        };
        Ok(Self {
            ordenes,
            transacciones,
            carrito,
            id_cliente,
            demora_pago: config.demora_pago(),
            demora_redireccion: config.demora_redireccion(),
            pantalla: Pantalla::Checkout,
            en_proceso: false,
            error: None,
            id_orden_venta: None,
        })
    }

    pub fn pantalla(&self) -> Pantalla {
        self.pantalla
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn en_proceso(&self) -> bool {
        self.en_proceso
    }

    pub fn id_orden_venta(&self) -> Option<i64> {
        self.id_orden_venta
    }

    pub fn resumen(&self) -> ResumenCarrito {
        self.carrito.totales()
    }

    pub fn carrito(&self) -> &Carrito {
        &self.carrito
    }

    /// Finalizar la compra con el método de pago elegido.
    ///
    /// Valida el formulario, crea la orden, simula el procesamiento del pago
    /// y registra la transacción. Toda falla deja la pantalla en `Checkout`
    /// con un mensaje de error y el carrito intacto.
    pub async fn finalizar_compra(&mut self, pago: DatosPago) -> Pantalla {
        if self.en_proceso {
            return self.pantalla;
        }

        if pago.validar().is_err() {
            self.error = Some("Por favor completa todos los campos correctamente".to_string());
            self.pantalla = Pantalla::Checkout;
            return self.pantalla;
        }

        self.en_proceso = true;
        self.error = None;

        // crear la orden de venta antes de tocar el pago
        let solicitud = self.solicitud_orden();
        let orden = match self.ordenes.crear_orden(&solicitud).await {
            Ok(orden) => orden,
            Err(e) => {
                self.error = Some(e.mensaje_usuario());
                self.en_proceso = false;
                self.pantalla = Pantalla::Checkout;
                return self.pantalla;
            }
        };
        self.id_orden_venta = Some(orden.id_venta);
        info!("Orden de venta {} creada", orden.id_venta);

        // pantalla de procesamiento según el método
        self.pantalla = match &pago {
            DatosPago::Pse(_) => Pantalla::Pse,
            DatosPago::Credito(_) => Pantalla::Credito,
        };
        tokio::time::sleep(self.demora_pago).await;

        let transaccion = self.solicitud_transaccion(&pago, orden.id_venta);
        match self.transacciones.procesar(&transaccion).await {
            Ok(respuesta) if respuesta.exito => {
                self.carrito.limpiar_almacenamiento();
                self.en_proceso = false;
                self.pantalla = Pantalla::Exito;
            }
            Ok(respuesta) => {
                self.registrar_orden_huerfana(orden.id_venta);
                self.error = Some(
                    respuesta
                        .error
                        .unwrap_or_else(|| "Error al procesar la transacción".to_string()),
                );
                self.en_proceso = false;
                self.pantalla = Pantalla::Checkout;
            }
            Err(e) => {
                self.registrar_orden_huerfana(orden.id_venta);
                self.error = Some(e.mensaje_usuario());
                self.en_proceso = false;
                self.pantalla = Pantalla::Checkout;
            }
        }
        self.pantalla
    }

    /// Tras `Exito`, esperar la demora configurada y entregar la ruta de la
    /// tienda para redirigir.
    pub async fn esperar_redireccion(&self) -> &'static str {
        tokio::time::sleep(self.demora_redireccion).await;
        rutas::TIENDA
    }

    fn solicitud_orden(&self) -> OrdenVentaRequest {
        let detalle_ventas = self
            .carrito
            .lineas()
            .iter()
            .filter_map(|linea| {
                let id_producto = linea.producto.id_producto?;
                Some(DetalleVentaRequest {
                    id_producto,
                    cantidad: linea.cantidad,
                    precio: linea.producto.precio_unitario,
                    descuento: descuento_unitario(&linea.producto),
                })
            })
            .collect();
        OrdenVentaRequest {
            fecha_orden: Some(Utc::now().format("%Y-%m-%d").to_string()),
            id_cliente: self.id_cliente,
            detalle_ventas,
        }
    }

    fn solicitud_transaccion(&self, pago: &DatosPago, id_venta: i64) -> TransaccionRequest {
        let total = self.carrito.totales().total;
        match pago {
            DatosPago::Credito(form) => TransaccionRequest {
                id_venta,
                id_metodo_pago: METODO_PAGO_TARJETA,
                id_tipo_cliente: TIPO_CLIENTE_NATURAL,
                id_banco: None,
                id_franquicia: form.id_franquicia,
                tipo_documento: Some(form.tipo_documento.clone()),
                identificacion: form.documento.clone(),
                valor_tx: total,
            },
            DatosPago::Pse(form) => TransaccionRequest {
                id_venta,
                id_metodo_pago: METODO_PAGO_PSE,
                id_tipo_cliente: TIPO_CLIENTE_NATURAL,
                id_banco: form.id_banco,
                id_franquicia: None,
                tipo_documento: Some(form.tipo_documento.clone()),
                identificacion: form.documento.clone(),
                valor_tx: total,
            },
        }
    }

    // La orden ya creada no se revierte: el backend no expone cancelación.
    // Queda registrada para conciliación manual.
    fn registrar_orden_huerfana(&self, id_venta: i64) {
        warn!(
            "La transacción falló con la orden {} ya creada; requiere conciliación manual",
            id_venta
        );
    }
}
