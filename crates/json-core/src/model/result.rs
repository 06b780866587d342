//! Resultados del motor y del validador.
//!
//! Invariantes (se garantizan por construcción, no por disciplina del
//! llamador):
//! - `success=true` ⇒ `result_text` presente, `error_message` ausente y
//!   `processed_size` = longitud en caracteres del resultado.
//! - `success=false` ⇒ `result_text` y `processed_size` ausentes.

use serde::{Deserialize, Serialize};

use super::operation::JsonOperation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    pub success: bool,
    pub result_text: Option<String>,
    pub error_message: Option<String>,
    /// Longitud en caracteres de la entrada (en la puerta de subida puede
    /// ser el tamaño declarado; ver `upload`).
    pub original_size: usize,
    pub processed_size: Option<usize>,
    pub operation: JsonOperation,
}

impl ProcessResult {
    /// Rama exitosa: calcula `processed_size` a partir del texto resultante.
    pub fn succeeded(operation: JsonOperation, result_text: String, original_size: usize) -> Self {
        let processed_size = result_text.chars().count();
        Self { success: true,
               result_text: Some(result_text),
               error_message: None,
               original_size,
               processed_size: Some(processed_size),
               operation }
    }

    /// Rama fallida: sin texto resultante ni tamaño procesado.
    pub fn failed(operation: JsonOperation, error_message: String, original_size: usize) -> Self {
        Self { success: false,
               result_text: None,
               error_message: Some(error_message),
               original_size,
               processed_size: None,
               operation }
    }
}

/// Resultado de `validate(content)`. La posición sólo se emite cuando el
/// parser subyacente reporta una usable (línea y columna >= 1); nunca se
/// fabrica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { is_valid: true,
               error_message: None,
               line_number: None,
               column_number: None }
    }

    pub fn invalid(error_message: String, position: Option<(u32, u32)>) -> Self {
        let (line_number, column_number) = match position {
            Some((line, column)) => (Some(line), Some(column)),
            None => (None, None),
        };
        Self { is_valid: false,
               error_message: Some(error_message),
               line_number,
               column_number }
    }
}
