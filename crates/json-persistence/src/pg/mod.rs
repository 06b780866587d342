//! Implementación Postgres (Diesel) del contrato de historial.
//!
//! Objetivo del módulo:
//! - Proveer un `HistoryStore` durable con paridad 1:1 respecto al backend
//!   en memoria del core (mismo orden de lectura, mismos campos).
//! - Aislar el mapeo registro ↔ fila de DB de `json-core`.
//!
//! Decisiones:
//! - Tabla append-only: sólo INSERT y SELECT, sin updates ni deletes.
//! - `id` BIGSERIAL y `created_at` DEFAULT now() los asigna la base;
//!   el INSERT los recupera vía `RETURNING`.
//! - Lectura canónica ordenada por `created_at` desc con desempate por
//!   `id` desc (los timestamps pueden colisionar a granularidad fina).
//! - Errores transitorios: reintento con backoff pequeño en insert y
//!   lectura, como capa de robustez; los fallos definitivos suben como
//!   `HistoryError` y el servicio decide si los traga.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use log::{debug, warn};

use json_core::errors::HistoryError;
use json_core::history::{HistoryRecord, HistoryStore, NewHistoryRecord};

use crate::error::PersistenceError;
use crate::migrations::run_pending_migrations;
use crate::schema::json_history;

/// Alias para el pool r2d2 de conexiones Postgres.
///
/// Al construirlo se corre automáticamente el set de migraciones
/// pendientes (una sola vez).
pub type PgPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Proveedor abstracto de conexiones.
///
/// Permite inyectar un pool real (producción/tests de integración) o
/// factorear en tests unitarios sin acoplar a r2d2.
pub trait ConnectionProvider: Send + Sync + 'static {
    /// Obtiene una conexión lista para ejecutar consultas Diesel.
    fn connection(&self) -> Result<r2d2::PooledConnection<ConnectionManager<PgConnection>>, PersistenceError>;
}

/// Implementación concreta de `ConnectionProvider` respaldada por un `PgPool`.
pub struct PoolProvider {
    pub pool: PgPool,
}

impl ConnectionProvider for PoolProvider {
    fn connection(&self) -> Result<r2d2::PooledConnection<ConnectionManager<PgConnection>>, PersistenceError> {
        self.pool
            .get()
            .map_err(|e| PersistenceError::TransientIo(format!("pool error: {e}")))
    }
}

/// Fila para insertar en `json_history`. `id`/`created_at` quedan a cargo
/// de la base y vuelven vía `RETURNING`.
#[derive(Insertable, Debug)]
#[diesel(table_name = json_history)]
pub struct NewHistoryRow<'a> {
    pub original_content: &'a str,
    pub processed_content: Option<&'a str>,
    pub operation: &'a str,
    pub success: bool,
    pub error_message: Option<&'a str>,
    pub original_size: i32,
    pub processed_size: Option<i32>,
}

/// Fila mapeada de `json_history` para lecturas (orden de campos igual a
/// la declaración de la tabla).
#[derive(Queryable, Debug)]
pub struct HistoryRow {
    pub id: i64,
    pub original_content: String,
    pub processed_content: Option<String>,
    pub operation: String,
    pub success: bool,
    pub error_message: Option<String>,
    pub original_size: i32,
    pub processed_size: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(row: HistoryRow) -> Self {
        HistoryRecord { id: row.id,
                        original_content: row.original_content,
                        processed_content: row.processed_content,
                        operation: row.operation,
                        success: row.success,
                        error_message: row.error_message,
                        original_size: row.original_size,
                        processed_size: row.processed_size,
                        created_at: row.created_at }
    }
}

/// Determina si un error es transitorio (recomendado reintentar con backoff).
fn is_retryable(e: &PersistenceError) -> bool {
    match e {
        PersistenceError::SerializationConflict => true,
        PersistenceError::TransientIo(_) => true,
        // Algunos mensajes (dependen de driver/pg) llegan como Unknown con
        // texto; best-effort sin acoplar a SQLSTATE.
        PersistenceError::Unknown(msg) => {
            let m = msg.to_lowercase();
            m.contains("deadlock detected")
            || m.contains("connection closed")
            || m.contains("connection refused")
            || m.contains("timeout")
        }
        _ => false,
    }
}

/// Retry simple con backoff muy pequeño (hasta 3 intentos: 15ms, 30ms, 45ms).
fn with_retry<F, T>(mut f: F) -> Result<T, PersistenceError>
    where F: FnMut() -> Result<T, PersistenceError>
{
    let mut attempts = 0;
    loop {
        match f() {
            Err(e) if is_retryable(&e) && attempts < 3 => {
                let delay_ms = 15 * ((attempts + 1) as u64);
                warn!("retryable error (attempt {}): {:?} -> sleeping {}ms",
                      attempts + 1,
                      e,
                      delay_ms);
                std::thread::sleep(std::time::Duration::from_millis(delay_ms));
                attempts += 1;
            }
            r => return r,
        }
    }
}

/// Implementación Postgres de `HistoryStore` (append-only).
pub struct PgHistoryStore<P: ConnectionProvider> {
    pub provider: P,
}

impl<P: ConnectionProvider> PgHistoryStore<P> {
    /// Crea un `PgHistoryStore` a partir de un `ConnectionProvider`
    /// (generalmente `PoolProvider`).
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: ConnectionProvider> HistoryStore for PgHistoryStore<P> {
    fn append(&mut self, record: NewHistoryRecord) -> Result<HistoryRecord, HistoryError> {
        debug!("history append:start operation={} success={}", record.operation, record.success);
        let row = NewHistoryRow { original_content: &record.original_content,
                                  processed_content: record.processed_content.as_deref(),
                                  operation: &record.operation,
                                  success: record.success,
                                  error_message: record.error_message.as_deref(),
                                  original_size: record.original_size,
                                  processed_size: record.processed_size };

        let (id, created_at): (i64, DateTime<Utc>) = with_retry(|| {
            let mut conn = self.provider.connection()?;
            diesel::insert_into(json_history::table)
                .values(&row)
                .returning((json_history::id, json_history::created_at))
                .get_result(&mut conn)
                .map_err(PersistenceError::from)
        })?;

        debug!("history append:done id={id}");
        Ok(HistoryRecord { id,
                           original_content: record.original_content,
                           processed_content: record.processed_content,
                           operation: record.operation,
                           success: record.success,
                           error_message: record.error_message,
                           original_size: record.original_size,
                           processed_size: record.processed_size,
                           created_at })
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        debug!("history list:start");
        let rows: Vec<HistoryRow> = with_retry(|| {
            let mut conn = self.provider.connection()?;
            json_history::table.order((json_history::created_at.desc(), json_history::id.desc()))
                               .load(&mut conn)
                               .map_err(PersistenceError::from)
        })?;
        debug!("history list:done count={}", rows.len());
        Ok(rows.into_iter().map(HistoryRecord::from).collect())
    }
}

/// Construye un pool Postgres r2d2 a partir de URL.
///
/// Comportamiento:
/// - Valida y ajusta tamaños (si `min_size > max_size`, usa `min_size =
///   max_size`).
/// - Ejecuta migraciones inmediatamente tras el primer `get()`.
/// - Devuelve `PersistenceError::TransientIo` ante errores del pool.
pub fn build_pool(database_url: &str, min_size: u32, max_size: u32) -> Result<PgPool, PersistenceError> {
    let validated_min = if min_size == 0 { 1 } else { min_size };
    let validated_max = if max_size == 0 { 1 } else { max_size };
    let final_min = validated_min.min(validated_max);
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().min_idle(Some(final_min))
                                    .max_size(validated_max)
                                    .build(manager)
                                    .map_err(|e| PersistenceError::TransientIo(format!("pool build: {e}")))?;
    // Migraciones una sola vez al construir (primer checkout de conexión).
    {
        let mut conn = pool.get()
                           .map_err(|e| PersistenceError::TransientIo(format!("pool get for migrations: {e}")))?;
        run_pending_migrations(&mut conn)?;
    }
    Ok(pool)
}

/// Helper de desarrollo: carga `.env`, lee configuración (DATABASE_URL,
/// tamaños) y construye un pool ya migrado.
pub fn build_dev_pool_from_env() -> Result<PgPool, PersistenceError> {
    crate::config::init_dotenv();
    let cfg = crate::config::DbConfig::from_env();
    build_pool(&cfg.url, cfg.min_connections, cfg.max_connections)
}
