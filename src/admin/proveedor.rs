//! Pantalla de administración de proveedores

use tracing::error;

use super::ErroresValidacion;
use crate::clients::ProveedorClient;
use crate::models::notificacion::Notificacion;
use crate::models::proveedor::{Proveedor, ProveedorRequest};
use crate::utils::validation::{
    validar_celular, validar_correo, validar_direccion, validar_nit, validar_nombre,
};

/// Borrador del formulario de proveedor
#[derive(Debug, Clone)]
pub struct ProveedorDraft {
    pub id: Option<i64>,
    pub nit: String,
    pub nombre: String,
    pub celular: String,
    pub correo: String,
    pub direccion: String,
    pub estado: i32,
}

impl Default for ProveedorDraft {
    fn default() -> Self {
        Self {
            id: None,
            nit: String::new(),
            nombre: String::new(),
            celular: String::new(),
            correo: String::new(),
            direccion: String::new(),
            estado: 1,
        }
    }
}

impl From<&Proveedor> for ProveedorDraft {
    fn from(p: &Proveedor) -> Self {
        Self {
            id: p.id,
            nit: p.nit.clone(),
            nombre: p.nombre.clone(),
            celular: p.celular.clone(),
            correo: p.correo.clone(),
            direccion: p.direccion.clone(),
            estado: p.estado,
        }
    }
}

pub struct ProveedorController {
    client: ProveedorClient,
    pub proveedores: Vec<Proveedor>,
    pub proveedor_actual: ProveedorDraft,
    pub mostrar_formulario: bool,
    pub es_edicion: bool,
    pub cargando: bool,
    pub errores: ErroresValidacion,
    pub notificacion: Option<Notificacion>,
}

impl ProveedorController {
    pub fn new(client: ProveedorClient) -> Self {
        Self {
            client,
            proveedores: Vec::new(),
            proveedor_actual: ProveedorDraft::default(),
            mostrar_formulario: false,
            es_edicion: false,
            cargando: true,
            errores: ErroresValidacion::new(),
            notificacion: None,
        }
    }

    pub async fn cargar(&mut self) {
        self.cargando = true;
        match self.client.obtener_todos().await {
            Ok(proveedores) => self.proveedores = proveedores,
            Err(e) => {
                self.proveedores = Vec::new();
                self.notificacion = Some(Notificacion::error("Error al cargar proveedores"));
                error!("Error al cargar proveedores: {}", e);
            }
        }
        self.cargando = false;
    }

    pub fn abrir_formulario_crear(&mut self) {
        self.proveedor_actual = ProveedorDraft::default();
        self.es_edicion = false;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn abrir_formulario_editar(&mut self, proveedor: &Proveedor) {
        self.proveedor_actual = proveedor.into();
        self.es_edicion = true;
        self.mostrar_formulario = true;
        self.errores.clear();
    }

    pub fn cerrar_formulario(&mut self) {
        self.mostrar_formulario = false;
        self.proveedor_actual = ProveedorDraft::default();
        self.errores.clear();
    }

    pub fn tiene_errores(&self) -> bool {
        !self.errores.is_empty()
    }

    /// Validar el formulario completo acumulando todas las violaciones
    pub fn validar_formulario(&mut self) -> bool {
        self.errores.clear();
        let actual = &self.proveedor_actual;

        if actual.nit.trim().is_empty() {
            self.errores.insert("nit", "El NIT es requerido".to_string());
        } else if validar_nit(&actual.nit).is_err() {
            self.errores.insert(
                "nit",
                "El NIT solo puede contener números (máximo 10 dígitos)".to_string(),
            );
        }

        if actual.nombre.trim().is_empty() {
            self.errores.insert("nombre", "El nombre es requerido".to_string());
        } else if validar_nombre(&actual.nombre).is_err() {
            self.errores.insert(
                "nombre",
                "El nombre solo puede contener letras, espacios y guiones".to_string(),
            );
        }

        if !actual.celular.is_empty() && validar_celular(&actual.celular).is_err() {
            self.errores.insert(
                "celular",
                "El celular solo puede contener números (máximo 10 dígitos)".to_string(),
            );
        }

        if actual.correo.trim().is_empty() {
            self.errores.insert("correo", "El correo es requerido".to_string());
        } else if validar_correo(&actual.correo).is_err() {
            self.errores.insert(
                "correo",
                "El correo debe tener un formato válido (ejemplo@dominio.com)".to_string(),
            );
        }

        if !actual.direccion.is_empty() && validar_direccion(&actual.direccion).is_err() {
            self.errores.insert(
                "direccion",
                "La dirección contiene caracteres no permitidos".to_string(),
            );
        }

        self.errores.is_empty()
    }

    /// Validación en vivo de un solo campo mientras el usuario escribe
    pub fn validar_campo(&mut self, campo: &'static str, valor: &str) {
        let resultado = match campo {
            "nit" => validar_nit(valor),
            "celular" => validar_celular(valor),
            "nombre" => validar_nombre(valor),
            "correo" => validar_correo(valor),
            "direccion" => validar_direccion(valor),
            _ => return,
        };
        if !valor.is_empty() && resultado.is_err() {
            let mensaje = match campo {
                "nit" => "El NIT solo puede contener números (máximo 10 dígitos)",
                "celular" => "El celular solo puede contener números (máximo 10 dígitos)",
                "nombre" => "El nombre solo puede contener letras, espacios y guiones",
                "correo" => "El correo debe tener un formato válido (ejemplo@dominio.com)",
                "direccion" => "La dirección contiene caracteres no permitidos",
                _ => unreachable!(),
            };
            self.errores.insert(campo, mensaje.to_string());
        } else {
            self.errores.remove(campo);
        }
    }

    fn solicitud(&self) -> ProveedorRequest {
        ProveedorRequest {
            nit: self.proveedor_actual.nit.clone(),
            nombre: self.proveedor_actual.nombre.clone(),
            celular: self.proveedor_actual.celular.clone(),
            correo: self.proveedor_actual.correo.clone(),
            direccion: self.proveedor_actual.direccion.clone(),
            estado: self.proveedor_actual.estado,
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
            Ok(creado) => {
                self.proveedores.push(creado);
                self.notificacion = Some(Notificacion::exito("Proveedor creado exitosamente"));
                self.cerrar_formulario();
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(e.mensaje_usuario()));
                error!("Error al crear proveedor: {}", e);
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
        let Some(id) = self.proveedor_actual.id else {
            return;
        };
        match self.client.actualizar(id, &self.solicitud()).await {
            Ok(actualizado) => {
                if let Some(fila) = self.proveedores.iter_mut().find(|p| p.id == actualizado.id) {
                    *fila = actualizado;
                }
                self.notificacion =
                    Some(Notificacion::exito("Proveedor actualizado exitosamente"));
                self.cerrar_formulario();
            }
            Err(e) => {
                self.notificacion =
                    Some(Notificacion::error("Error al actualizar proveedor"));
                error!("Error al actualizar proveedor: {}", e);
            }
        }
    }

    /// Alternar estado y parchear la fila en memoria
    pub async fn cambiar_estado(&mut self, id: i64) {
        match self.client.cambiar_estado(id).await {
            Ok(actualizado) => {
                if let Some(fila) = self.proveedores.iter_mut().find(|p| p.id == actualizado.id) {
                    *fila = actualizado;
                }
                self.notificacion = Some(Notificacion::exito(
                    "Estado del proveedor cambiado exitosamente",
                ));
            }
            Err(e) => {
                self.notificacion = Some(Notificacion::error(
                    "Error al cambiar estado del proveedor",
                ));
                error!("Error al cambiar estado del proveedor: {}", e);
            }
        }
    }
}
