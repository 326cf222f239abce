//! Almacenamiento clave/valor persistente
//!
//! Abstrae el almacenamiento del navegador detrás de un trait para poder
//! sustituirlo por una implementación en memoria en las pruebas. Escrituras
//! de último escritor ganan, sin bloqueo entre pantallas.

use std::collections::HashMap;
use std::sync::Mutex;

pub trait Storage: Send + Sync {
    fn get(&self, clave: &str) -> Option<String>;
    fn set(&self, clave: &str, valor: &str);
    fn remove(&self, clave: &str);
    fn clear(&self);
}

/// Implementación en memoria, usada en pruebas y como sesión efímera
#[derive(Default)]
pub struct MemoryStorage {
    datos: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, clave: &str) -> Option<String> {
        self.datos.lock().unwrap().get(clave).cloned()
    }

    fn set(&self, clave: &str, valor: &str) {
        self.datos.lock().unwrap().insert(clave.to_string(), valor.to_string());
    }

    fn remove(&self, clave: &str) {
        self.datos.lock().unwrap().remove(clave);
    }

    fn clear(&self) {
        self.datos.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(storage.get("clave").is_none());

        storage.set("clave", "valor");
        assert_eq!(storage.get("clave").as_deref(), Some("valor"));

        // último escritor gana
        storage.set("clave", "nuevo");
        assert_eq!(storage.get("clave").as_deref(), Some("nuevo"));

        storage.remove("clave");
        assert!(storage.get("clave").is_none());

        storage.set("a", "1");
        storage.set("b", "2");
        storage.clear();
        assert!(storage.get("a").is_none());
        assert!(storage.get("b").is_none());
    }
}
