//! Registros de historial.
//!
//! Shape de la tabla `json_history`: el insert (`NewHistoryRecord`) no
//! lleva `id` ni `created_at` (los asigna el almacenamiento); la lectura
//! (`HistoryRecord`) los incluye. Los registros capturan la invocación
//! verbatim, éxito o fallo por igual.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ProcessResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHistoryRecord {
    pub original_content: String,
    pub processed_content: Option<String>,
    pub operation: String,
    pub success: bool,
    pub error_message: Option<String>,
    pub original_size: i32,
    pub processed_size: Option<i32>,
}

impl NewHistoryRecord {
    /// Captura una invocación ya resuelta del motor o de la puerta de
    /// subida, tal cual se devolvió al llamador.
    pub fn from_result(content: &str, result: &ProcessResult) -> Self {
        Self { original_content: content.to_string(),
               processed_content: result.result_text.clone(),
               operation: result.operation.to_string(),
               success: result.success,
               error_message: result.error_message.clone(),
               original_size: result.original_size as i32,
               processed_size: result.processed_size.map(|n| n as i32) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
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
