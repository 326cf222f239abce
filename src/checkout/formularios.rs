//! Formularios de pago del checkout
//!
//! Cada formulario valida todos sus campos y acumula las violaciones en un
//! `ValidationErrors`, igual que las pantallas de administración: el envío
//! se bloquea mientras quede algún error.

use validator::{ValidationError, ValidationErrors};

use super::tarjeta::{detectar_tipo_tarjeta, solo_digitos, TipoTarjeta};
use crate::utils::validation::{validar_documento, validar_no_vacio, validar_solo_letras};

/// Datos del formulario de tarjeta de crédito
#[derive(Debug, Clone, Default)]
pub struct TarjetaCreditoForm {
    pub nombre_titular: String,
    pub numero_tarjeta: String,
    pub cvv: String,
    pub tipo_documento: String,
    pub documento: String,
    pub id_franquicia: Option<i64>,
    pub mes_vencimiento: String,
    pub anio_vencimiento: String,
}

impl TarjetaCreditoForm {
    pub fn tipo_detectado(&self) -> TipoTarjeta {
        detectar_tipo_tarjeta(&self.numero_tarjeta)
    }

    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();

        if validar_no_vacio(&self.nombre_titular).is_err() {
            errores.add("nombre_titular", ValidationError::new("requerido"));
        } else if validar_solo_letras(&self.nombre_titular).is_err() {
            errores.add("nombre_titular", ValidationError::new("nombre_titular"));
        }

        let tipo = self.tipo_detectado();
        let digitos = solo_digitos(&self.numero_tarjeta);
        let longitud_valida = match tipo {
            TipoTarjeta::Amex => digitos.len() == 15,
            TipoTarjeta::Visa | TipoTarjeta::Mastercard => digitos.len() == 16,
            // sin franquicia detectada se exige al menos el mínimo de Amex
            TipoTarjeta::Desconocida => (15..=16).contains(&digitos.len()),
        };
        if !longitud_valida {
            errores.add("numero_tarjeta", ValidationError::new("numero_tarjeta"));
        }

        let cvv_digitos = solo_digitos(&self.cvv);
        if cvv_digitos.len() != tipo.longitud_cvv() || cvv_digitos != self.cvv {
            errores.add("cvv", ValidationError::new("cvv"));
        }

        if validar_no_vacio(&self.tipo_documento).is_err() {
            errores.add("tipo_documento", ValidationError::new("requerido"));
        }
        if validar_no_vacio(&self.documento).is_err() {
            errores.add("documento", ValidationError::new("requerido"));
        } else if validar_documento(&self.documento).is_err() {
            errores.add("documento", ValidationError::new("documento"));
        }

        if self.id_franquicia.is_none() {
            errores.add("id_franquicia", ValidationError::new("requerido"));
        }
        if validar_no_vacio(&self.mes_vencimiento).is_err() {
            errores.add("mes_vencimiento", ValidationError::new("requerido"));
        }
        if validar_no_vacio(&self.anio_vencimiento).is_err() {
            errores.add("anio_vencimiento", ValidationError::new("requerido"));
        }

        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

/// Datos del formulario PSE
#[derive(Debug, Clone, Default)]
pub struct PseForm {
    pub nombres: String,
    pub apellidos: String,
    pub tipo_documento: String,
    pub documento: String,
    pub id_banco: Option<i64>,
}

impl PseForm {
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        let mut errores = ValidationErrors::new();

        if validar_no_vacio(&self.nombres).is_err() {
            errores.add("nombres", ValidationError::new("requerido"));
        } else if validar_solo_letras(&self.nombres).is_err() {
            errores.add("nombres", ValidationError::new("nombres"));
        }

        if validar_no_vacio(&self.apellidos).is_err() {
            errores.add("apellidos", ValidationError::new("requerido"));
        } else if validar_solo_letras(&self.apellidos).is_err() {
            errores.add("apellidos", ValidationError::new("apellidos"));
        }

        if validar_no_vacio(&self.tipo_documento).is_err() {
            errores.add("tipo_documento", ValidationError::new("requerido"));
        }
        if validar_no_vacio(&self.documento).is_err() {
            errores.add("documento", ValidationError::new("requerido"));
        } else if validar_documento(&self.documento).is_err() {
            errores.add("documento", ValidationError::new("documento"));
        }

        if self.id_banco.is_none() {
            errores.add("id_banco", ValidationError::new("requerido"));
        }

        if errores.is_empty() {
            Ok(())
        } else {
            Err(errores)
        }
    }
}

/// Pago elegido por el usuario, con su formulario ya diligenciado
#[derive(Debug, Clone)]
pub enum DatosPago {
    Credito(TarjetaCreditoForm),
    Pse(PseForm),
}

impl DatosPago {
    pub fn validar(&self) -> Result<(), ValidationErrors> {
        match self {
            DatosPago::Credito(form) => form.validar(),
            DatosPago::Pse(form) => form.validar(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tarjeta_valida() -> TarjetaCreditoForm {
        TarjetaCreditoForm {
            nombre_titular: "Ana Pérez".to_string(),
            numero_tarjeta: "4532 0151 1283 0366".to_string(),
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

    #[test]
    fn test_tarjeta_valida() {
        assert!(tarjeta_valida().validar().is_ok());
    }

    #[test]
    fn test_tarjeta_acumula_todos_los_errores() {
        let form = TarjetaCreditoForm::default();
        let errores = form.validar().unwrap_err();
        let campos = errores.field_errors();
        assert!(campos.contains_key("nombre_titular"));
        assert!(campos.contains_key("numero_tarjeta"));
        assert!(campos.contains_key("cvv"));
        assert!(campos.contains_key("documento"));
        assert!(campos.contains_key("id_franquicia"));
    }

    #[test]
    fn test_cvv_por_franquicia() {
        let mut form = tarjeta_valida();
        // Amex exige CVV de 4 y número de 15 dígitos
        form.numero_tarjeta = "371449635398431".to_string();
        form.cvv = "123".to_string();
        assert!(form.validar().is_err());
        form.cvv = "1234".to_string();
        assert!(form.validar().is_ok());
    }

    #[test]
    fn test_numero_longitud_por_franquicia() {
        let mut form = tarjeta_valida();
        form.numero_tarjeta = "4532 0151 1283 036".to_string(); // 15 dígitos en Visa
        assert!(form.validar().is_err());
    }

    #[test]
    fn test_documento_solo_numerico() {
        let mut form = pse_valido();
        form.documento = "10.324".to_string();
        let errores = form.validar().unwrap_err();
        assert!(errores.field_errors().contains_key("documento"));
    }

    #[test]
    fn test_pse_requiere_banco() {
        let mut form = pse_valido();
        form.id_banco = None;
        assert!(form.validar().is_err());
    }

    #[test]
    fn test_nombres_con_diacriticos() {
        let mut form = pse_valido();
        form.nombres = "María José".to_string();
        assert!(form.validar().is_ok());
        form.nombres = "Ana3".to_string();
        assert!(form.validar().is_err());
    }
}
