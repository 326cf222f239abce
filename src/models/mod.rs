pub mod banco;
pub mod bodega;
pub mod categoria;
pub mod franquicia;
pub mod inventario;
pub mod notificacion;
pub mod perfil;
pub mod producto;
pub mod proveedor;
pub mod transaccion;
pub mod usuario;
pub mod venta;
