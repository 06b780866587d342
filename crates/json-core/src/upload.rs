//! Puerta de subida de archivos.
//!
//! Precondiciones de tamaño ANTES de parsear; la subida siempre opera en
//! semántica validate pero devuelve un eco formateado (2 espacios fijos,
//! ignorando cualquier preferencia de sangría del llamador). Mensajes del
//! contrato observable: no cambiarlos sin ajustar a los consumidores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::MAX_UPLOAD_BYTES;
use crate::model::{Indent, JsonOperation, ProcessResult};
use crate::transform::serialize;

pub const OVERSIZE_MESSAGE: &str = "File size exceeds maximum limit of 10MB";
pub const SIZE_MISMATCH_MESSAGE: &str = "File size mismatch: declared size does not match content length";

/// Subida entrante: nombre, contenido y tamaño declarado por el cliente.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub file_name: String,
    pub file_content: String,
    pub file_size: usize,
}

pub fn process_file_upload(upload: &FileUpload) -> ProcessResult {
    // Rechazo por declaración: el contenido no se consulta en esta rama.
    if upload.file_size > MAX_UPLOAD_BYTES {
        return ProcessResult::failed(JsonOperation::Validate, OVERSIZE_MESSAGE.to_string(), upload.file_size);
    }

    let actual_size = upload.file_content.chars().count();
    if upload.file_size != actual_size {
        return ProcessResult::failed(JsonOperation::Validate, SIZE_MISMATCH_MESSAGE.to_string(), actual_size);
    }

    match serde_json::from_str::<Value>(&upload.file_content) {
        Ok(parsed) => {
            let formatted = serialize::to_pretty(&parsed, Indent::default());
            ProcessResult::succeeded(JsonOperation::Validate, formatted, actual_size)
        }
        Err(e) => ProcessResult::failed(JsonOperation::Validate, format!("JSON Parse Error: {e}"), actual_size),
    }
}
