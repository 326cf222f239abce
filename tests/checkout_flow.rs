//! Pruebas del flujo de checkout de punta a punta, con puertos de orden y
//! transacción en memoria y demoras en cero.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use districandy_client::carrito::{Carrito, CLAVE_CARRITO};
use districandy_client::checkout::{
    CheckoutService, DatosPago, Pantalla, PseForm, TarjetaCreditoForm,
};
use districandy_client::clients::orden_venta::CreadorOrdenes;
use districandy_client::clients::transaccion::ProcesadorTransacciones;
use districandy_client::config::EnvironmentConfig;
use districandy_client::models::producto::Producto;
use districandy_client::models::transaccion::{TransaccionRequest, TransaccionResponse};
use districandy_client::models::venta::{OrdenVentaRequest, OrdenVentaResponse};
use districandy_client::storage::{MemoryStorage, Storage};
use districandy_client::utils::errors::{AppError, AppResult};

#[derive(Clone)]
struct OrdenesFake {
    fallar: bool,
    recibidas: Arc<Mutex<Vec<OrdenVentaRequest>>>,
}

impl OrdenesFake {
    fn nuevo(fallar: bool) -> Self {
        Self { fallar, recibidas: Arc::new(Mutex::new(Vec::new())) }
    }
}

#[async_trait]
impl CreadorOrdenes for OrdenesFake {
    async fn crear_orden(&self, solicitud: &OrdenVentaRequest) -> AppResult<OrdenVentaResponse> {
        if self.fallar {
            return Err(AppError::Api {
                status: 500,
                mensaje: "Error al crear la orden de venta".to_string(),
            });
        }
        self.recibidas.lock().unwrap().push(solicitud.clone());
        Ok(OrdenVentaResponse {
            id_venta: 31,
            fecha_orden: None,
            valor_venta: 0.0,
            valor_descuento: 0.0,
            monto_total: 0.0,
            estado: 1,
            cliente: None,
            detalle_ventas: vec![],
        })
    }
}

#[derive(Clone)]
struct TransaccionesFake {
    modo: ModoTransaccion,
    recibidas: Arc<Mutex<Vec<TransaccionRequest>>>,
}

#[derive(Clone, Copy)]
enum ModoTransaccion {
    Exito,
    Rechazo,
    ErrorRed,
}

impl TransaccionesFake {
    fn nuevo(modo: ModoTransaccion) -> Self {
        Self { modo, recibidas: Arc::new(Mutex::new(Vec::new())) }
    }
}

#[async_trait]
impl ProcesadorTransacciones for TransaccionesFake {
    async fn procesar(&self, solicitud: &TransaccionRequest) -> AppResult<TransaccionResponse> {
        self.recibidas.lock().unwrap().push(solicitud.clone());
        match self.modo {
            ModoTransaccion::Exito => Ok(TransaccionResponse {
                exito: true,
                mensaje: Some("Transacción aprobada".to_string()),
                error: None,
                transaccion: None,
            }),
            ModoTransaccion::Rechazo => Ok(TransaccionResponse {
                exito: false,
                mensaje: None,
                error: Some("Fondos insuficientes".to_string()),
                transaccion: None,
            }),
            ModoTransaccion::ErrorRed => Err(AppError::Api {
                status: 502,
                mensaje: "Error al procesar el pago".to_string(),
            }),
        }
    }
}

fn producto(id: i64, precio: f64, descuento: Option<f64>, existencia: u32) -> Producto {
    Producto {
        id_producto: Some(id),
        nombre: format!("Producto {}", id),
        referencia: format!("REF-{}", id),
        descripcion: String::new(),
        precio_unitario: precio,
        valor_descuento: descuento,
        existencia,
        imagen: None,
        estado: Some(1),
        categorias: vec![],
        descuento: 0,
    }
}

fn config_sin_demoras(costo_envio: f64) -> EnvironmentConfig {
    EnvironmentConfig {
        api_base_url: "http://localhost:8093/DistriCandy".to_string(),
        costo_envio,
        demora_pago_ms: 0,
        demora_redireccion_ms: 0,
    }
}

fn tarjeta_valida() -> TarjetaCreditoForm {
    TarjetaCreditoForm {
        nombre_titular: "Ana Pérez".to_string(),
        numero_tarjeta: "4532015112830366".to_string(),
        cvv: "123".to_string(),
        tipo_documento: "CC".to_string(),
        documento: "1032456789".to_string(),
        id_franquicia: Some(1),
        mes_vencimiento: "09".to_string(),
        anio_vencimiento: "2027".to_string(),
    }
}

fn pse_valido() -> PseForm {
    PseForm {
        nombres: "Ana".to_string(),
        apellidos: "Pérez".to_string(),
        tipo_documento: "CC".to_string(),
        documento: "1032456789".to_string(),
        id_banco: Some(3),
    }
}

fn carrito_con_linea(storage: Arc<dyn Storage>) -> Carrito {
    let mut carrito = Carrito::cargar(storage, 0.0);
    carrito.agregar(&producto(7, 1000.0, Some(10.0), 10), 2);
    carrito
}

#[tokio::test]
async fn test_checkout_exitoso_con_tarjeta() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let ordenes = OrdenesFake::nuevo(false);
    let transacciones = TransaccionesFake::nuevo(ModoTransaccion::Exito);

    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage.clone()),
        Some(4),
        ordenes.clone(),
        transacciones.clone(),
        &config_sin_demoras(0.0),
    )
    .expect("entrada válida al checkout");

    assert_eq!(flujo.pantalla(), Pantalla::Checkout);
    let pantalla = flujo.finalizar_compra(DatosPago::Credito(tarjeta_valida())).await;
    assert_eq!(pantalla, Pantalla::Exito);
    assert!(flujo.error().is_none());

    // la orden lleva el detalle con precio y descuento unitario
    let orden = ordenes.recibidas.lock().unwrap()[0].clone();
    assert_eq!(orden.id_cliente, 4);
    assert_eq!(orden.detalle_ventas.len(), 1);
    let detalle = &orden.detalle_ventas[0];
    assert_eq!(detalle.id_producto, 7);
    assert_eq!(detalle.cantidad, 2);
    assert_eq!(detalle.precio, 1000.0);
    assert_eq!(detalle.descuento, 100.0);

    // la transacción referencia la orden y el total calculado: 1800
    let transaccion = transacciones.recibidas.lock().unwrap()[0].clone();
    assert_eq!(transaccion.id_venta, 31);
    assert_eq!(transaccion.id_metodo_pago, 2);
    assert_eq!(transaccion.id_franquicia, Some(1));
    assert_eq!(transaccion.id_banco, None);
    assert_eq!(transaccion.valor_tx, 1800.0);

    // el carrito persistido quedó limpio
    assert!(storage.get(CLAVE_CARRITO).is_none());
}

#[tokio::test]
async fn test_checkout_exitoso_con_pse() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let ordenes = OrdenesFake::nuevo(false);
    let transacciones = TransaccionesFake::nuevo(ModoTransaccion::Exito);

    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage.clone()),
        Some(4),
        ordenes,
        transacciones.clone(),
        &config_sin_demoras(5000.0),
    )
    .unwrap();

    let pantalla = flujo.finalizar_compra(DatosPago::Pse(pse_valido())).await;
    assert_eq!(pantalla, Pantalla::Exito);

    let transaccion = transacciones.recibidas.lock().unwrap()[0].clone();
    assert_eq!(transaccion.id_metodo_pago, 1);
    assert_eq!(transaccion.id_banco, Some(3));
    assert_eq!(transaccion.id_franquicia, None);
    // 1800 de productos más 5000 de envío
    assert_eq!(transaccion.valor_tx, 6800.0);
}

#[tokio::test]
async fn test_transaccion_rechazada_vuelve_a_checkout_con_carrito_intacto() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let ordenes = OrdenesFake::nuevo(false);
    let transacciones = TransaccionesFake::nuevo(ModoTransaccion::Rechazo);

    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage.clone()),
        Some(4),
        ordenes,
        transacciones,
        &config_sin_demoras(0.0),
    )
    .unwrap();

    let pantalla = flujo.finalizar_compra(DatosPago::Credito(tarjeta_valida())).await;
    assert_eq!(pantalla, Pantalla::Checkout);
    assert_eq!(flujo.error(), Some("Fondos insuficientes"));
    // la orden quedó creada pero el carrito no se pierde
    assert_eq!(flujo.id_orden_venta(), Some(31));
    assert!(storage.get(CLAVE_CARRITO).is_some());
    assert!(!flujo.en_proceso());
}

#[tokio::test]
async fn test_error_de_red_en_transaccion() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage.clone()),
        Some(4),
        OrdenesFake::nuevo(false),
        TransaccionesFake::nuevo(ModoTransaccion::ErrorRed),
        &config_sin_demoras(0.0),
    )
    .unwrap();

    let pantalla = flujo.finalizar_compra(DatosPago::Pse(pse_valido())).await;
    assert_eq!(pantalla, Pantalla::Checkout);
    assert!(flujo.error().is_some());
    assert!(storage.get(CLAVE_CARRITO).is_some());
}

#[tokio::test]
async fn test_falla_de_orden_no_llama_transaccion() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let transacciones = TransaccionesFake::nuevo(ModoTransaccion::Exito);

    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage.clone()),
        Some(4),
        OrdenesFake::nuevo(true),
        transacciones.clone(),
        &config_sin_demoras(0.0),
    )
    .unwrap();

    let pantalla = flujo.finalizar_compra(DatosPago::Credito(tarjeta_valida())).await;
    assert_eq!(pantalla, Pantalla::Checkout);
    assert!(flujo.error().is_some());
    assert!(flujo.id_orden_venta().is_none());
    assert!(transacciones.recibidas.lock().unwrap().is_empty());
    assert!(storage.get(CLAVE_CARRITO).is_some());
}

#[tokio::test]
async fn test_formulario_invalido_no_crea_orden() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let ordenes = OrdenesFake::nuevo(false);

    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage),
        Some(4),
        ordenes.clone(),
        TransaccionesFake::nuevo(ModoTransaccion::Exito),
        &config_sin_demoras(0.0),
    )
    .unwrap();

    let mut invalida = tarjeta_valida();
    invalida.cvv = "12".to_string();
    let pantalla = flujo.finalizar_compra(DatosPago::Credito(invalida)).await;
    assert_eq!(pantalla, Pantalla::Checkout);
    assert_eq!(
        flujo.error(),
        Some("Por favor completa todos los campos correctamente")
    );
    assert!(ordenes.recibidas.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_entrada_exige_carrito_y_cliente() {
    let vacio = Carrito::cargar(Arc::new(MemoryStorage::new()), 0.0);
    let resultado = CheckoutService::iniciar(
        vacio,
        Some(4),
        OrdenesFake::nuevo(false),
        TransaccionesFake::nuevo(ModoTransaccion::Exito),
        &config_sin_demoras(0.0),
    );
    assert!(resultado.is_err());

    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let resultado = CheckoutService::iniciar(
        carrito_con_linea(storage),
        None,
        OrdenesFake::nuevo(false),
        TransaccionesFake::nuevo(ModoTransaccion::Exito),
        &config_sin_demoras(0.0),
    );
    assert!(resultado.is_err());
}

#[tokio::test]
async fn test_redireccion_tras_exito() {
    let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let mut flujo = CheckoutService::iniciar(
        carrito_con_linea(storage),
        Some(4),
        OrdenesFake::nuevo(false),
        TransaccionesFake::nuevo(ModoTransaccion::Exito),
        &config_sin_demoras(0.0),
    )
    .unwrap();

    flujo.finalizar_compra(DatosPago::Credito(tarjeta_valida())).await;
    assert_eq!(flujo.esperar_redireccion().await, "/tienda");
}
