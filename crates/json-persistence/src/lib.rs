//! json-persistence
//!
//! Implementación Postgres (Diesel) del contrato `HistoryStore` del core,
//! más utilidades de conexión y migraciones embebidas. El historial es una
//! tabla append-only sin hazard read-modify-write: inserciones puras y
//! lecturas ordenadas.
//!
//! Módulos:
//! - `pg`: implementación sobre Postgres (tabla `json_history`).
//! - `migrations`: runner embebido de migraciones Diesel.
//! - `config`: carga de configuración desde .env.
//! - `schema`: tabla Diesel declarada para compilar queries.

pub mod config;
pub mod error;
pub mod migrations;
pub mod pg;
pub mod schema;

pub use config::init_dotenv;
pub use error::PersistenceError;
pub use pg::{build_dev_pool_from_env, build_pool, ConnectionProvider, PgHistoryStore, PgPool, PoolProvider};
