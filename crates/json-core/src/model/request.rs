//! Petición de transformación.

use serde::{Deserialize, Serialize};

use super::operation::{Indent, JsonOperation};

/// Entrada del motor de transformación. Inmutable tras su construcción;
/// vive lo que dura la petición.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    /// Texto JSON crudo tal como lo entregó el llamador.
    pub content: String,
    pub operation: JsonOperation,
    /// Sangría para `format`/`sort-keys`; 2 por defecto.
    #[serde(default)]
    pub indent_size: Indent,
}

impl ProcessRequest {
    pub fn new(content: impl Into<String>, operation: JsonOperation) -> Self {
        Self { content: content.into(),
               operation,
               indent_size: Indent::default() }
    }

    pub fn with_indent(content: impl Into<String>, operation: JsonOperation, indent_size: Indent) -> Self {
        Self { content: content.into(),
               operation,
               indent_size }
    }
}
