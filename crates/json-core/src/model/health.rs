//! Respuesta del healthcheck.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Healthcheck {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl Healthcheck {
    /// Estado fijo "ok" con el instante actual; no consulta ningún recurso.
    pub fn ok() -> Self {
        Self { status: "ok".to_string(),
               timestamp: Utc::now() }
    }
}
