//! Configuración de la aplicación desde variables de entorno.
//!
//! El historial es opcional: se activa únicamente si `DATABASE_URL` está
//! presente. No hay estado global de framework; el handle resultante se
//! construye explícitamente en el arranque y se inyecta al servicio.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL de Postgres para el historial; `None` deja el historial en
    /// memoria (sin durabilidad entre procesos).
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        Self { database_url }
    }
}
