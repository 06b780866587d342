//! Errores del núcleo (simples: fallos de frontera y de almacenamiento).
//!
//! Las entradas malformadas NO son errores de este enum: el motor las
//! reporta como `ProcessResult`/`ValidationResult` con `success=false`.
//! `CoreError` cubre únicamente violaciones del contrato del llamador que
//! se rechazan antes de llegar al motor.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("unknown operation: {0}")] UnknownOperation(String),
    #[error("indent size out of range 1..=8: {0}")] IndentOutOfRange(u8),
}

/// Fallo del almacenamiento de historial, visto desde el contrato
/// `HistoryStore`. El servicio lo registra y lo traga en escrituras;
/// sólo las lecturas lo propagan.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history storage error: {0}")] Storage(String),
}
