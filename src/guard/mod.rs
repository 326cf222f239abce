//! Guardas de navegación por rol
//!
//! Decisiones puras sobre si la sesión actual puede entrar a una ruta; el
//! único efecto es la redirección que decide el llamador.

use crate::models::usuario::Rol;
use crate::session::SesionService;

/// Rutas del cliente
pub mod rutas {
    pub const AUTORIZACION: &str = "/autorizacion";
    pub const ADMIN: &str = "/admin";
    pub const TIENDA: &str = "/tienda";
    pub const CARRITO: &str = "/carrito";
    pub const VERIFICAR: &str = "/verificar";
    pub const PERFIL: &str = "/perfil";
}

/// Prefijos reservados a clientes; un admin que navegue aquí vuelve a /admin
const PREFIJOS_CLIENTE: [&str; 4] = [
    rutas::TIENDA,
    rutas::CARRITO,
    rutas::VERIFICAR,
    rutas::PERFIL,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRuta {
    Permitir,
    Redirigir(&'static str),
}

/// Guarda de rol para rutas protegidas.
///
/// Sin sesión → `/autorizacion`. `/admin*` solo para admins (los demás van a
/// la tienda). Los prefijos de cliente expulsan a los admins hacia `/admin`.
/// Cualquier otra ruta se permite.
pub fn guard_rol(sesion: &SesionService, ruta: &str) -> DecisionRuta {
    if !sesion.esta_autenticado() {
        return DecisionRuta::Redirigir(rutas::AUTORIZACION);
    }

    let rol = sesion.obtener_rol();

    if ruta.starts_with(rutas::ADMIN) {
        return if rol == Some(Rol::Admin) {
            DecisionRuta::Permitir
        } else {
            DecisionRuta::Redirigir(rutas::TIENDA)
        };
    }

    if PREFIJOS_CLIENTE.iter().any(|p| ruta.starts_with(p)) {
        return if rol == Some(Rol::Admin) {
            DecisionRuta::Redirigir(rutas::ADMIN)
        } else {
            DecisionRuta::Permitir
        };
    }

    DecisionRuta::Permitir
}

/// Guarda de la pantalla pública de autorización: un usuario ya autenticado
/// se redirige según su rol en lugar de volver a iniciar sesión.
pub fn guard_autorizacion(sesion: &SesionService) -> DecisionRuta {
    if !sesion.esta_autenticado() {
        return DecisionRuta::Permitir;
    }
    match sesion.obtener_rol() {
        Some(Rol::Admin) => DecisionRuta::Redirigir(rutas::ADMIN),
        _ => DecisionRuta::Redirigir(rutas::TIENDA),
    }
}

/// Tabla de enrutamiento completa: `/` y las rutas desconocidas van a la
/// pantalla de autorización; el resto pasa por su guarda.
pub fn decidir_navegacion(sesion: &SesionService, ruta: &str) -> DecisionRuta {
    if ruta == "/" || ruta.is_empty() {
        return DecisionRuta::Redirigir(rutas::AUTORIZACION);
    }
    if ruta.starts_with(rutas::AUTORIZACION) {
        return guard_autorizacion(sesion);
    }
    let conocida = ruta.starts_with(rutas::ADMIN)
        || PREFIJOS_CLIENTE.iter().any(|p| ruta.starts_with(p));
    if !conocida {
        return DecisionRuta::Redirigir(rutas::AUTORIZACION);
    }
    guard_rol(sesion, ruta)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::usuario::{RespuestaLogin, Usuario};
    use crate::storage::MemoryStorage;

    fn sesion_con_rol(tipo_usuario: Option<i32>) -> SesionService {
        let sesion = SesionService::new(Arc::new(MemoryStorage::new()));
        if let Some(tipo) = tipo_usuario {
            let respuesta = RespuestaLogin {
                exito: true,
                is_admin: Some(tipo == 1),
                mensaje: None,
                usuario: Some(Usuario {
                    id_usuario: 1,
                    correo: "u@districandy.com".into(),
                    nombre_completo: "Usuario Prueba".into(),
                    tipo_usuario: tipo,
                    es_admin: None,
                    username: None,
                    celular: None,
                    nombre: None,
                    apellido: None,
                    informacion_adicional: None,
                }),
                error: None,
                bloqueado: None,
            };
            sesion.registrar(&respuesta);
        }
        sesion
    }

    #[test]
    fn test_sin_sesion_redirige_a_autorizacion() {
        let sesion = sesion_con_rol(None);
        assert_eq!(
            guard_rol(&sesion, "/admin/productos"),
            DecisionRuta::Redirigir(rutas::AUTORIZACION)
        );
        assert_eq!(
            guard_rol(&sesion, "/tienda"),
            DecisionRuta::Redirigir(rutas::AUTORIZACION)
        );
    }

    #[test]
    fn test_usuario_no_entra_a_admin() {
        let sesion = sesion_con_rol(Some(2));
        assert_eq!(
            guard_rol(&sesion, "/admin"),
            DecisionRuta::Redirigir(rutas::TIENDA)
        );
        assert_eq!(guard_rol(&sesion, "/tienda"), DecisionRuta::Permitir);
        assert_eq!(guard_rol(&sesion, "/carrito"), DecisionRuta::Permitir);
    }

    #[test]
    fn test_admin_no_entra_a_tienda() {
        let sesion = sesion_con_rol(Some(1));
        assert_eq!(
            guard_rol(&sesion, "/tienda"),
            DecisionRuta::Redirigir(rutas::ADMIN)
        );
        assert_eq!(guard_rol(&sesion, "/admin/inventario"), DecisionRuta::Permitir);
    }

    #[test]
    fn test_rutas_sin_restriccion() {
        let sesion = sesion_con_rol(Some(2));
        assert_eq!(guard_rol(&sesion, "/acerca"), DecisionRuta::Permitir);
    }

    #[test]
    fn test_guard_autorizacion() {
        assert_eq!(
            guard_autorizacion(&sesion_con_rol(None)),
            DecisionRuta::Permitir
        );
        assert_eq!(
            guard_autorizacion(&sesion_con_rol(Some(1))),
            DecisionRuta::Redirigir(rutas::ADMIN)
        );
        assert_eq!(
            guard_autorizacion(&sesion_con_rol(Some(2))),
            DecisionRuta::Redirigir(rutas::TIENDA)
        );
    }

    #[test]
    fn test_navegacion_raiz_y_desconocidas() {
        let sesion = sesion_con_rol(None);
        assert_eq!(
            decidir_navegacion(&sesion, "/"),
            DecisionRuta::Redirigir(rutas::AUTORIZACION)
        );
        assert_eq!(
            decidir_navegacion(&sesion, "/lo-que-sea"),
            DecisionRuta::Redirigir(rutas::AUTORIZACION)
        );
    }
}
