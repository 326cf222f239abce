//! Pantalla de administración de bodegas

use tracing::error;

use super::ErroresValidacion;
use crate::clients::BodegaClient;
use crate::models::bodega::{Bodega, BodegaRequest};
use crate::models::notificacion::Notificacion;
use crate::utils::validation::{
    validar_barrio, validar_direccion, validar_nombre_bodega, validar_positivo,
    validar_solo_letras,
};

/// Borrador del formulario de bodega
#[derive(Debug, Clone)]
pub struct BodegaDraft {
    pub id: Option<i64>,
    pub nombre: String,
    pub direccion: String,
    pub pais: String,
    pub ciudad: String,
    pub barrio: String,
    pub capacidad_max: f64,
    pub informacion_adicional: String,
    pub estado: i32,
}

impl Default for BodegaDraft {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            direccion: String::new(),
            pais: String::new(),
            ciudad: String::new(),
            barrio: String::new(),
            capacidad_max: 0.0,
            informacion_adicional: String::new(),
            estado: 1,
        }
    }
}

impl From<&Bodega> for BodegaDraft {
    fn from(b: &Bodega) -> Self {
        Self {
            id: b.id_bodega,
            nombre: b.nombre.clone(),
            direccion: b.direccion.clone(),
            pais: b.pais.clone(),
            ciudad: b.ciudad.clone(),
            barrio: b.barrio.clone(),
            capacidad_max: b.capacidad_max,
            informacion_adicional: b.informacion_adicional.clone().unwrap_or_default(),
            estado: b.estado,
        }
    }
}

pub struct BodegaController {
    client: BodegaClient,
    pub bodegas: Vec<Bodega>,
    pub bodega_actual: BodegaDraft,
    pub mostrar_formulario: bool,
    pub es_edicion: bool,
    pub cargando: bool,
    pub errores: ErroresValidacion,
    pub notificacion: Option<Notificacion>,
}

impl BodegaController {
    pub fn new(client: BodegaClient) -> Self {
        Self {
            client,
            bodegas: Vec::new(),
            bodega_actual: BodegaDraft::default(),
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
            Ok(bodegas) => self.bodegas = bodegas,
            Err(e) => {
                self.bodegas = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar bodegas"));
                error!("Error al cargar bodegas: {}", e);
            }
        }
        self.cargando = false;
    }

    pub fn abrir_formulario_crear(&mut self) {
        self.bodega_actual = BodegaDraft::default();
        self.es_edicion = false;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn abrir_formulario_editar(&mut self, bodega: &Bodega) {
        self.bodega_actual = bodega.into();
        self.es_edicion = true;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn cerrar_formulario(&mut self) {
        self.mostrar_formulario = false;
        self.bodega_actual = BodegaDraft::default();
        self.errores.clear();
    }

    pub fn tiene_errores(&self) -> bool {
        !self.errores.is_empty()
    }

    pub fn validar_formulario(&mut self) -> bool {
        self.errores.clear();
        let actual = &self.bodega_actual;

        if actual.nombre.trim().is_empty() {
            self.errores.insert("nombre", "El nombre es requerido".to_string());
        } else if validar_nombre_bodega(&actual.nombre).is_err() {
            self.errores.insert(
                "nombre",
                "El nombre solo puede contener letras, números, espacios y guiones".to_string(),
            );
        }

        if actual.direccion.trim().is_empty() {
            self.errores
                .insert("direccion", "La dirección es requerida".to_string());
        } else if validar_direccion(&actual.direccion).is_err() {
            self.errores.insert(
                "direccion",
                "La dirección contiene caracteres no permitidos".to_string(),
            );
        }

        if actual.pais.trim().is_empty() {
            self.errores.insert("pais", "El país es requerido".to_string());
        } else if validar_solo_letras(&actual.pais).is_err() {
            self.errores
                .insert("pais", "El país solo puede contener letras".to_string());
        }

        if actual.ciudad.trim().is_empty() {
            self.errores.insert("ciudad", "La ciudad es requerida".to_string());
        } else if validar_solo_letras(&actual.ciudad).is_err() {
            self.errores
                .insert("ciudad", "La ciudad solo puede contener letras".to_string());
        }

        if actual.barrio.trim().is_empty() {
            self.errores.insert("barrio", "El barrio es requerido".to_string());
        } else if validar_barrio(&actual.barrio).is_err() {
            self.errores.insert(
                "barrio",
                "El barrio solo puede contener letras, números y espacios".to_string(),
            );
        }

        if validar_positivo(actual.capacidad_max).is_err() {
            self.errores.insert(
                "capacidad_max",
                "La capacidad máxima debe ser mayor a 0".to_string(),
            );
        }

        // informacion_adicional admite cualquier caracter

        self.errores.is_empty()
    }

    fn solicitud(&self) -> BodegaRequest {
        let actual = &self.bodega_actual;
        BodegaRequest {
            nombre: actual.nombre.clone(),
            direccion: actual.direccion.clone(),
            pais: actual.pais.clone(),
            ciudad: actual.ciudad.clone(),
            barrio: actual.barrio.clone(),
            capacidad_max: actual.capacidad_max,
            informacion_adicional: actual.informacion_adicional.clone(),
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
            Ok(respuesta) if respuesta.exito => {
                if let Some(bodega) = respuesta.bodega {
                    self.bodegas.push(bodega);
                }
                self.notificacion = Some(Notificacion::exito("Bodega creada exitosamente"));
                self.cerrar_formulario();
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al crear bodega".to_string()),
                ));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al crear bodega: {}", e);
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
        let Some(id) = self.bodega_actual.id else {
            return;
        };
        match self.client.actualizar(id, &self.solicitud()).await {
            Ok(respuesta) if respuesta.exito => {
                if let Some(actualizada) = respuesta.bodega {
                    if let Some(fila) = self
                        .bodegas
                        .iter_mut()
                        .find(|b| b.id_bodega == actualizada.id_bodega)
                    {
                        *fila = actualizada;
                    }
                }
                self.notificacion =
                    Some(Notificacion::exito("Bodega actualizada exitosamente"));
                self.cerrar_formulario();
            }
            Ok(respuesta) => {
                self.notificacion = Some(Notificacion::error(
                    respuesta.error.unwrap_or_else(|| "Error al actualizar bodega".to_string()),
                ));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error("Error al actualizar bodega"));
                error!("Error al actualizar bodega: {}", e);
            }
        }
    }

    /// Alternar estado y parchear la fila en memoria
    pub async fn cambiar_estado(&mut self, id: i64) {
        match self.client.cambiar_estado(id).await {
            Ok(respuesta) if respuesta.exito => {
                if let Some(actualizada) = respuesta.bodega {
                    if let Some(fila) = self
                        .bodegas
                        .iter_mut()
                        .find(|b| b.id_bodega == actualizada.id_bodega)
                    {
                        *fila = actualizada;
                    }
                }
                self.notificacion = Some(Notificacion::exito(
                    "Estado de la bodega cambiado exitosamente",
                ));
            }
            _ => {
                self.notificacion = Some(Notificacion::error(
                    "Error al cambiar estado de la bodega",
                ));
            }
        }
    }
}
