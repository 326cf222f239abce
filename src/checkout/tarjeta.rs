//! Detección y formato de tarjetas de crédito
//!
//! La franquicia detectada determina la longitud del CVV (4 para Amex, 3
//! para el resto) y el máximo de dígitos del número (15 para Amex, 16 para
//! el resto).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoTarjeta {
    Visa,
    Mastercard,
    Amex,
    Desconocida,
}

impl TipoTarjeta {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoTarjeta::Visa => "visa",
            TipoTarjeta::Mastercard => "mastercard",
            TipoTarjeta::Amex => "amex",
            TipoTarjeta::Desconocida => "desconocida",
        }
    }

    pub fn longitud_cvv(&self) -> usize {
        match self {
            TipoTarjeta::Amex => 4,
            _ => 3,
        }
    }

    pub fn max_digitos(&self) -> usize {
        match self {
            TipoTarjeta::Amex => 15,
            _ => 16,
        }
    }
}

/// Detectar la franquicia por los primeros dígitos: 4 → Visa, 51-55 →
/// Mastercard, 34/37 → Amex.
pub fn detectar_tipo_tarjeta(numero: &str) -> TipoTarjeta {
    let digitos = solo_digitos(numero);
    if digitos.starts_with('4') {
        return TipoTarjeta::Visa;
    }
    if digitos.starts_with('5') {
        if let Some(segundo) = digitos.chars().nth(1).and_then(|c| c.to_digit(10)) {
            if (1..=5).contains(&segundo) {
                return TipoTarjeta::Mastercard;
            }
        }
    }
    if digitos.starts_with("34") || digitos.starts_with("37") {
        return TipoTarjeta::Amex;
    }
    TipoTarjeta::Desconocida
}

/// Quitar espacios y cualquier carácter que no sea dígito
pub fn solo_digitos(valor: &str) -> String {
    valor.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalizar el número: solo dígitos, truncado al máximo de la franquicia,
/// agrupado de a 4 para mostrar.
pub fn formatear_numero(valor: &str) -> String {
    let tipo = detectar_tipo_tarjeta(valor);
    let digitos: String = solo_digitos(valor).chars().take(tipo.max_digitos()).collect();
    digitos
        .as_bytes()
        .chunks(4)
        .map(|grupo| std::str::from_utf8(grupo).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizar el CVV: solo dígitos, truncado a la longitud de la franquicia
pub fn normalizar_cvv(valor: &str, tipo: TipoTarjeta) -> String {
    solo_digitos(valor).chars().take(tipo.longitud_cvv()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detectar_visa() {
        let tipo = detectar_tipo_tarjeta("4532015112830366");
        assert_eq!(tipo, TipoTarjeta::Visa);
        assert_eq!(tipo.longitud_cvv(), 3);
        assert_eq!(tipo.max_digitos(), 16);
    }

    #[test]
    fn test_detectar_mastercard() {
        assert_eq!(detectar_tipo_tarjeta("5412750012340000"), TipoTarjeta::Mastercard);
        assert_eq!(detectar_tipo_tarjeta("5512345678901234"), TipoTarjeta::Mastercard);
        // 56-59 no son Mastercard
        assert_eq!(detectar_tipo_tarjeta("5612345678901234"), TipoTarjeta::Desconocida);
        assert_eq!(detectar_tipo_tarjeta("5012345678901234"), TipoTarjeta::Desconocida);
    }

    #[test]
    fn test_detectar_amex() {
        let tipo = detectar_tipo_tarjeta("371449635398431");
        assert_eq!(tipo, TipoTarjeta::Amex);
        assert_eq!(tipo.longitud_cvv(), 4);
        assert_eq!(tipo.max_digitos(), 15);
    }

    #[test]
    fn test_detectar_desconocida() {
        assert_eq!(detectar_tipo_tarjeta("6011000990139424"), TipoTarjeta::Desconocida);
        assert_eq!(detectar_tipo_tarjeta(""), TipoTarjeta::Desconocida);
        assert_eq!(detectar_tipo_tarjeta("5"), TipoTarjeta::Desconocida);
    }

    #[test]
    fn test_formatear_numero() {
        assert_eq!(formatear_numero("4532 0151 1283 0366"), "4532 0151 1283 0366");
        assert_eq!(formatear_numero("4532abc0151"), "4532 0151");
        // Amex trunca a 15 dígitos
        assert_eq!(formatear_numero("3714496353984319999"), "3714 4963 5398 431");
    }

    #[test]
    fn test_normalizar_cvv() {
        assert_eq!(normalizar_cvv("12345", TipoTarjeta::Visa), "123");
        assert_eq!(normalizar_cvv("12345", TipoTarjeta::Amex), "1234");
        assert_eq!(normalizar_cvv("1a2b3c", TipoTarjeta::Visa), "123");
    }
}
