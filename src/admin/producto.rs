//! Pantalla de administración de productos

use tracing::error;

use super::ErroresValidacion;
use crate::clients::{CategoriaClient, ProductoClient};
use crate::models::categoria::Categoria;
use crate::models::notificacion::Notificacion;
use crate::models::producto::{Producto, ProductoRequest};
use crate::utils::validation::{
    validar_descripcion, validar_descuento, validar_nombre_producto, validar_positivo,
    validar_referencia,
};

/// Borrador del formulario de producto
#[derive(Debug, Clone)]
pub struct ProductoDraft {
    pub id: Option<i64>,
    pub referencia: String,
    pub nombre: String,
    pub descripcion: String,
    pub precio_unitario: f64,
    pub valor_descuento: f64,
    pub existencia: u32,
    pub foto_producto: String,
    pub ids_categorias: Vec<i64>,
    pub estado: i32,
}

impl Default for ProductoDraft {
    fn default() -> Self {
        Self {
            id: None,
            referencia: String::new(),
            nombre: String::new(),
            descripcion: String::new(),
            precio_unitario: 0.0,
            valor_descuento: 0.0,
            existencia: 0,
            foto_producto: String::new(),
            ids_categorias: Vec::new(),
            estado: 1,
        }
    }
}

impl From<&Producto> for ProductoDraft {
    fn from(p: &Producto) -> Self {
        Self {
            id: p.id_producto,
            referencia: p.referencia.clone(),
            nombre: p.nombre.clone(),
            descripcion: p.descripcion.clone(),
            precio_unitario: p.precio_unitario,
            valor_descuento: p.valor_descuento.unwrap_or(0.0),
            existencia: p.existencia,
            foto_producto: p.imagen.clone().unwrap_or_default(),
            ids_categorias: p.categorias.iter().map(|c| c.id_categoria).collect(),
            estado: p.estado.unwrap_or(1),
        }
    }
}

pub struct ProductoController {
    client: ProductoClient,
    categorias_client: CategoriaClient,
    pub productos: Vec<Producto>,
    pub categorias: Vec<Categoria>,
    pub producto_actual: ProductoDraft,
    pub mostrar_formulario: bool,
    pub es_edicion: bool,
    pub cargando: bool,
    pub errores: ErroresValidacion,
    pub notificacion: Option<Notificacion>,
}

impl ProductoController {
    pub fn new(client: ProductoClient, categorias_client: CategoriaClient) -> Self {
        Self {
            client,
            categorias_client,
            productos: Vec::new(),
            categorias: Vec::new(),
            producto_actual: ProductoDraft::default(),
            mostrar_formulario: false,
            es_edicion: false,
            cargando: true,
            errores: ErroresValidacion::new(),
            notificacion: None,
        }
    }

    pub async fn cargar_productos(&mut self) {
        self.cargando = true;
        match self.client.obtener_todos().await {
            Ok(productos) => self.productos = productos,
            Err(e) => {
                self.productos = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar productos"));
                error!("Error al cargar productos: {}", e);
            }
        }
        self.cargando = false;
    }

    /// Solo las categorías activas se ofrecen en el formulario
    pub async fn cargar_categorias(&mut self) {
        match self.categorias_client.obtener_todas().await {
            Ok(categorias) => {
                self.categorias = categorias.into_iter().filter(|c| c.esta_activa()).collect();
            }
            Err(e) => {
                self.categorias = Vec::new();
                error!("Error al cargar categorías: {}", e);
            }
        }
    }

    pub fn abrir_formulario_crear(&mut self) {
        self.producto_actual = ProductoDraft::default();
        self.es_edicion = false;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn abrir_formulario_editar(&mut self, producto: &Producto) {
        self.producto_actual = producto.into();
        self.es_edicion = true;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn cerrar_formulario(&mut self) {
        self.mostrar_formulario = false;
        self.producto_actual = ProductoDraft::default();
        self.errores.clear();
    }

    pub fn agregar_categoria(&mut self, id_categoria: i64) {
        if !self.producto_actual.ids_categorias.contains(&id_categoria) {
            self.producto_actual.ids_categorias.push(id_categoria);
        }
    }

    pub fn remover_categoria(&mut self, id_categoria: i64) {
        self.producto_actual.ids_categorias.retain(|id| *id != id_categoria);
    }

    pub fn nombre_categoria(&self, id_categoria: i64) -> &str {
        self.categorias
            .iter()
            .find(|c| c.id_categoria == Some(id_categoria))
            .map(|c| c.nombre.as_str())
            .unwrap_or("Desconocida")
    }

    pub fn tiene_errores(&self) -> bool {
        !self.errores.is_empty()
    }

    pub fn validar_formulario(&mut self) -> bool {
        self.errores.clear();
        let actual = &self.producto_actual;

        if actual.referencia.trim().is_empty() {
            self.errores
                .insert("referencia", "La referencia es requerida".to_string());
        } else if validar_referencia(&actual.referencia).is_err() {
            self.errores.insert(
                "referencia",
                "La referencia solo puede contener letras, números, guiones y puntos".to_string(),
            );
        }

        if actual.nombre.trim().is_empty() {
            self.errores.insert("nombre", "El nombre es requerido".to_string());
        } else if validar_nombre_producto(&actual.nombre).is_err() {
            self.errores.insert(
                "nombre",
                "El nombre solo puede contener letras, números, espacios y guiones".to_string(),
            );
        }

        if !actual.descripcion.is_empty() && validar_descripcion(&actual.descripcion).is_err() {
            self.errores.insert(
                "descripcion",
                "La descripción contiene caracteres no permitidos".to_string(),
            );
        }

        if validar_positivo(actual.precio_unitario).is_err() {
            self.errores.insert(
                "precio_unitario",
                "El precio debe ser mayor a 0".to_string(),
            );
        }

        if actual.valor_descuento != 0.0
            && validar_descuento(actual.valor_descuento, actual.precio_unitario).is_err()
        {
            self.errores.insert(
                "valor_descuento",
                "El descuento debe estar entre 0 y el precio unitario".to_string(),
            );
        }

        self.errores.is_empty()
    }

    fn solicitud(&self) -> ProductoRequest {
        let actual = &self.producto_actual;
        ProductoRequest {
            nombre: actual.nombre.clone(),
            referencia: actual.referencia.clone(),
            descripcion: actual.descripcion.clone(),
            precio_unitario: actual.precio_unitario,
            valor_descuento: if actual.valor_descuento > 0.0 {
                Some(actual.valor_descuento)
            } else {
                None
            },
            existencia: actual.existencia,
            ids_categorias: actual.ids_categorias.clone(),
            foto_producto: if actual.foto_producto.trim().is_empty() {
                None
            } else {
                Some(actual.foto_producto.clone())
            },
        }
    }

    pub async fn crear(&mut self) {
        if !self.validar_formulario() {
            self.notificacion = Some(Notificacion::error(
                "Por favor corrige los errores en el formulario",
            ));
            return;
        }
        match self.client.crear(&self.solicitud()).await {
            Ok(respuesta) if respuesta.fue_exitosa() => {
                self.notificacion = Some(Notificacion::exito("Producto creado exitosamente"));
                self.cerrar_formulario();
                self.cargar_productos().await;
            }
            Ok(respuesta) => {
                let mensaje = respuesta
                    .error
                    .or(respuesta.mensaje)
                    .unwrap_or_else(|| "Error al crear producto".to_string());
                self.notificacion = Some(Notificacion::error(mensaje));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al crear producto: {}", e);
            }
        }
    }

    pub async fn actualizar(&mut self) {
        if !self.validar_formulario() {
            self.notificacion = Some(Notificacion::error(
                "Por favor corrige los errores en el formulario",
            ));
            return;
        }
        let Some(id) = self.producto_actual.id else {
            return;
        };
        match self.client.actualizar(id, &self.solicitud()).await {
            Ok(actualizado) => {
                if let Some(fila) = self
                    .productos
                    .iter_mut()
                    .find(|p| p.id_producto == actualizado.id_producto)
                {
                    *fila = actualizado;
                }
                self.notificacion =
                    Some(Notificacion::exito("Producto actualizado exitosamente"));
                self.cerrar_formulario();
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error("Error al actualizar producto"));
                error!("Error al actualizar producto: {}", e);
            }
        }
    }

    /// Alternar activo/inactivo y parchear la fila en memoria
    pub async fn cambiar_estado(&mut self, id: i64) {
        match self.client.cambiar_estado(id).await {
            Ok(actualizado) => {
                if let Some(fila) = self
                    .productos
                    .iter_mut()
                    .find(|p| p.id_producto == actualizado.id_producto)
                {
                    *fila = actualizado;
                }
                self.notificacion = Some(Notificacion::exito(
                    "Estado del producto cambiado exitosamente",
                ));
            }
            Err(e) => {
                self.notificacion =
                    Some(Notificacion::error("Error al cambiar estado del producto"));
                error!("Error al cambiar estado del producto: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ProductoController {
        let http = reqwest::Client::new();
        ProductoController::new(
            ProductoClient::new(http.clone(), "http://localhost/producto".into()),
            CategoriaClient::new(http, "http://localhost/categoria".into()),
        )
    }

    #[test]
    fn test_formulario_vacio_acumula_errores() {
        let mut controller = controller();
        assert!(!controller.validar_formulario());
        assert!(controller.errores.contains_key("referencia"));
        assert!(controller.errores.contains_key("nombre"));
        assert!(controller.errores.contains_key("precio_unitario"));
    }

    #[test]
    fn test_referencia_invalida() {
        let mut controller = controller();
        controller.producto_actual.referencia = "CHO 35".to_string();
        controller.producto_actual.nombre = "Chocolatina".to_string();
        controller.producto_actual.precio_unitario = 1500.0;
        assert!(!controller.validar_formulario());
        assert!(controller.errores.contains_key("referencia"));
        assert_eq!(controller.errores.len(), 1);
    }

    #[test]
    fn test_descuento_mayor_al_precio() {
        let mut controller = controller();
        controller.producto_actual.referencia = "CHO-35".to_string();
        controller.producto_actual.nombre = "Chocolatina".to_string();
        controller.producto_actual.precio_unitario = 1500.0;
        controller.producto_actual.valor_descuento = 2000.0;
        assert!(!controller.validar_formulario());
        assert!(controller.errores.contains_key("valor_descuento"));
    }

    #[test]
    fn test_categorias_del_borrador() {
        let mut controller = controller();
        controller.agregar_categoria(1);
        controller.agregar_categoria(1);
        controller.agregar_categoria(2);
        assert_eq!(controller.producto_actual.ids_categorias, vec![1, 2]);
        controller.remover_categoria(1);
        assert_eq!(controller.producto_actual.ids_categorias, vec![2]);
    }
}
