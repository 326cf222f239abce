//! Pantalla de administración de categorías
//!
//! A diferencia del resto de entidades, las categorías sí se eliminan de
//! verdad en el backend.

use tracing::error;

use super::ErroresValidacion;
use crate::clients::CategoriaClient;
use crate::models::categoria::{Categoria, CategoriaRequest};
use crate::models::notificacion::Notificacion;
use crate::utils::validation::validar_nombre;

/// Borrador del formulario de categoría
#[derive(Debug, Clone, Default)]
pub struct CategoriaDraft {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
}

impl From<&Categoria> for CategoriaDraft {
    fn from(c: &Categoria) -> Self {
        Self {
            id: c.id_categoria,
            nombre: c.nombre.clone(),
            descripcion: c.descripcion.clone().unwrap_or_default(),
        }
    }
}

pub struct CategoriaController {
    client: CategoriaClient,
    pub categorias: Vec<Categoria>,
    pub categoria_actual: CategoriaDraft,
    pub mostrar_formulario: bool,
    pub es_edicion: bool,
    pub cargando: bool,
    pub errores: ErroresValidacion,
    pub notificacion: Option<Notificacion>,
}

impl CategoriaController {
    pub fn new(client: CategoriaClient) -> Self {
        Self {
            client,
            categorias: Vec::new(),
            categoria_actual: CategoriaDraft::default(),
            mostrar_formulario: false,
            es_edicion: false,
            cargando: true,
            errores: ErroresValidacion::new(),
            notificacion: None,
        }
    }

    pub async fn cargar(&mut self) {
        self.cargando = true;
        match self.client.obtener_todas().await {
            Ok(categorias) => self.categorias = categorias,
            Err(e) => {
                self.categorias = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar categorías"));
                error!("Error al cargar categorías: {}", e);
            }
        }
        self.cargando = false;
    }

    pub fn abrir_formulario_crear(&mut self) {
        self.categoria_actual = CategoriaDraft::default();
        self.es_edicion = false;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn abrir_formulario_editar(&mut self, categoria: &Categoria) {
        self.categoria_actual = categoria.into();
        self.es_edicion = true;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn cerrar_formulario(&mut self) {
        self.mostrar_formulario = false;
        self.categoria_actual = CategoriaDraft::default();
        self.errores.clear();
    }

    pub fn tiene_errores(&self) -> bool {
        !self.errores.is_empty()
    }

    pub fn validar_formulario(&mut self) -> bool {
        self.errores.clear();
        let actual = &self.categoria_actual;

        if actual.nombre.trim().is_empty() {
            self.errores.insert("nombre", "El nombre es requerido".to_string());
        } else if validar_nombre(&actual.nombre).is_err() {
            self.errores.insert(
                "nombre",
                "El nombre solo puede contener letras, espacios y guiones".to_string(),
            );
        }

        self.errores.is_empty()
    }

    fn solicitud(&self) -> CategoriaRequest {
        CategoriaRequest {
            nombre: self.categoria_actual.nombre.clone(),
            descripcion: if self.categoria_actual.descripcion.trim().is_empty() {
                None
            } else {
                Some(self.categoria_actual.descripcion.clone())
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
            Ok(creada) => {
                self.categorias.push(creada);
                self.notificacion = Some(Notificacion::exito("Categoría creada exitosamente"));
                self.cerrar_formulario();
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al crear categoría: {}", e);
            }
        }
    }

    /// Alternar estado y parchear la fila en memoria
    pub async fn cambiar_estado(&mut self, id: i64) {
        match self.client.cambiar_estado(id).await {
            Ok(actualizada) => {
                if let Some(fila) = self
                    .categorias
                    .iter_mut()
                    .find(|c| c.id_categoria == actualizada.id_categoria)
                {
                    *fila = actualizada;
                }
                self.notificacion = Some(Notificacion::exito(
                    "Estado de la categoría cambiado exitosamente",
                ));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(
                    "Error al cambiar estado de la categoría",
                ));
                error!("Error al cambiar estado de la categoría: {}", e);
            }
        }
    }

    /// Eliminación real; la fila sale de la lista si el backend confirma
    pub async fn eliminar(&mut self, id: i64) {
        match self.client.eliminar(id).await {
            Ok(_) => {
                self.categorias.retain(|c| c.id_categoria != Some(id));
                self.notificacion =
                    Some(Notificacion::exito("Categoría eliminada exitosamente"));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al eliminar categoría: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CategoriaController {
        let http = reqwest::Client::new();
        CategoriaController::new(CategoriaClient::new(
            http,
            "http://localhost/categoria".into(),
        ))
    }

    #[test]
    fn test_nombre_requerido() {
        let mut controller = controller();
        assert!(!controller.validar_formulario());
        assert_eq!(
            controller.errores.get("nombre").map(String::as_str),
            Some("El nombre es requerido")
        );
    }

    #[test]
    fn test_nombre_sin_numeros() {
        let mut controller = controller();
        controller.categoria_actual.nombre = "Gomas 2".to_string();
        assert!(!controller.validar_formulario());
        controller.categoria_actual.nombre = "Gomas ácidas".to_string();
        assert!(controller.validar_formulario());
    }
}
