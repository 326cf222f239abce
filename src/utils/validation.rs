//! Utilidades de validación
//!
//! Este módulo contiene las funciones de validación de campos que comparten
//! las pantallas de administración y los formularios de pago.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

lazy_static! {
    /// Letras, espacios y caracteres comunes en nombres (categorías, proveedores)
    static ref NOMBRE_RE: Regex = Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s\-\.]+$").unwrap();
    /// Nombres de producto: admite también dígitos
    static ref NOMBRE_PRODUCTO_RE: Regex =
        Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ0-9\s\-\.]+$").unwrap();
    /// Nombres de bodega: admite dígitos y guion bajo
    static ref NOMBRE_BODEGA_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s\-_\.]+$").unwrap();
    /// Solo letras y espacios (país, ciudad, titular de tarjeta)
    static ref SOLO_LETRAS_RE: Regex = Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s]+$").unwrap();
    /// Letras, dígitos y espacios (barrio)
    static ref ALFANUMERICO_RE: Regex = Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s]+$").unwrap();
    /// Solo números, máximo 10 dígitos (NIT, celular)
    static ref NUMERICO_10_RE: Regex = Regex::new(r"^[0-9]{1,10}$").unwrap();
    /// Solo números, sin tope (documentos de identidad)
    static ref NUMERICO_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();
    /// Referencia de producto: alfanumérica más guion y punto
    static ref REFERENCIA_RE: Regex = Regex::new(r"^[a-zA-Z0-9\-\.]+$").unwrap();
    /// Descripciones: texto con puntuación básica
    static ref DESCRIPCION_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s\-\.,;:\(\)]+$").unwrap();
    /// Direcciones: texto con numerales y signos habituales
    static ref DIRECCION_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9áéíóúÁÉÍÓÚñÑüÜ\s\-#,\.°]+$").unwrap();
    /// Email básico: requiere @ y punto en el dominio
    static ref CORREO_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

fn error_con_valor(codigo: &'static str, valor: &str) -> ValidationError {
    let mut error = ValidationError::new(codigo);
    error.add_param("value".into(), &valor.to_string());
    error
}

fn validar_regex(re: &Regex, codigo: &'static str, valor: &str) -> Result<(), ValidationError> {
    if re.is_match(valor) {
        Ok(())
    } else {
        Err(error_con_valor(codigo, valor))
    }
}

/// Validar que un string no esté vacío
pub fn validar_no_vacio(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(error_con_valor("requerido", valor));
    }
    Ok(())
}

/// Validar nombres de categorías y proveedores
pub fn validar_nombre(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NOMBRE_RE, "nombre", valor)
}

/// Validar nombres de producto
pub fn validar_nombre_producto(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NOMBRE_PRODUCTO_RE, "nombre_producto", valor)
}

/// Validar nombres de bodega
pub fn validar_nombre_bodega(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NOMBRE_BODEGA_RE, "nombre_bodega", valor)
}

/// Validar país o ciudad (solo letras)
pub fn validar_solo_letras(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&SOLO_LETRAS_RE, "solo_letras", valor)
}

/// Validar barrio (letras, números y espacios)
pub fn validar_barrio(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&ALFANUMERICO_RE, "barrio", valor)
}

/// Validar NIT (solo números, máximo 10 dígitos)
pub fn validar_nit(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NUMERICO_10_RE, "nit", valor)
}

/// Validar celular (solo números, máximo 10 dígitos)
pub fn validar_celular(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NUMERICO_10_RE, "celular", valor)
}

/// Validar documento de identidad (solo números)
pub fn validar_documento(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&NUMERICO_RE, "documento", valor)
}

/// Validar referencia de producto
pub fn validar_referencia(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&REFERENCIA_RE, "referencia", valor)
}

/// Validar descripciones de producto
pub fn validar_descripcion(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&DESCRIPCION_RE, "descripcion", valor)
}

/// Validar direcciones
pub fn validar_direccion(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&DIRECCION_RE, "direccion", valor)
}

/// Validar formato de email
pub fn validar_correo(valor: &str) -> Result<(), ValidationError> {
    validar_regex(&CORREO_RE, "correo", valor)
}

/// Validar longitud mínima y máxima
pub fn validar_longitud(valor: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = valor.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validar_positivo<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    valor: T,
) -> Result<(), ValidationError> {
    if valor <= T::zero() {
        let mut error = ValidationError::new("positivo");
        error.add_param("value".into(), &valor);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validar_no_negativo<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    valor: T,
) -> Result<(), ValidationError> {
    if valor < T::zero() {
        let mut error = ValidationError::new("no_negativo");
        error.add_param("value".into(), &valor);
        return Err(error);
    }
    Ok(())
}

/// Validar el descuento de un producto: entre 0 y el precio unitario
pub fn validar_descuento(descuento: f64, precio: f64) -> Result<(), ValidationError> {
    if descuento < 0.0 || descuento > precio {
        let mut error = ValidationError::new("descuento");
        error.add_param("value".into(), &descuento);
        error.add_param("precio".into(), &precio);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_nombre() {
        assert!(validar_nombre("Dulces Andiños S.A.").is_ok());
        assert!(validar_nombre("María-José").is_ok());
        assert!(validar_nombre("Dulces #1").is_err());
        assert!(validar_nombre("Calle 45").is_err());
    }

    #[test]
    fn test_validar_nombre_producto() {
        assert!(validar_nombre_producto("Chocolatina 35g").is_ok());
        assert!(validar_nombre_producto("Gomas ácidas").is_ok());
        assert!(validar_nombre_producto("Combo (x3)").is_err());
    }

    #[test]
    fn test_validar_nit_y_celular() {
        assert!(validar_nit("9001234567").is_ok());
        assert!(validar_nit("90012345678").is_err());
        assert!(validar_nit("900-123").is_err());
        assert!(validar_celular("3001234567").is_ok());
        assert!(validar_celular("300 123").is_err());
    }

    #[test]
    fn test_validar_correo() {
        assert!(validar_correo("ventas@districandy.com").is_ok());
        assert!(validar_correo("sin-arroba.com").is_err());
        assert!(validar_correo("a@b").is_err());
    }

    #[test]
    fn test_validar_referencia() {
        assert!(validar_referencia("CHO-35.G").is_ok());
        assert!(validar_referencia("CHO 35").is_err());
    }

    #[test]
    fn test_validar_direccion() {
        assert!(validar_direccion("Calle 45 #12-30, Local 2°").is_ok());
        assert!(validar_direccion("Calle 45 @").is_err());
    }

    #[test]
    fn test_validar_positivo() {
        assert!(validar_positivo(5.0).is_ok());
        assert!(validar_positivo(0.0).is_err());
        assert!(validar_positivo(-5.0).is_err());
    }

    #[test]
    fn test_validar_descuento() {
        assert!(validar_descuento(0.0, 1000.0).is_ok());
        assert!(validar_descuento(1000.0, 1000.0).is_ok());
        assert!(validar_descuento(-1.0, 1000.0).is_err());
        assert!(validar_descuento(1001.0, 1000.0).is_err());
    }

    #[test]
    fn test_validar_longitud() {
        assert!(validar_longitud("clave1", 6, 100).is_ok());
        assert!(validar_longitud("corta", 6, 100).is_err());
    }
}
