//! Almacenamiento de historial append-only.

use chrono::Utc;

use super::types::{HistoryRecord, NewHistoryRecord};
use crate::errors::HistoryError;

pub trait HistoryStore {
    /// Inserta un registro y devuelve el registro completo (con id y
    /// created_at asignados por el almacenamiento).
    fn append(&mut self, record: NewHistoryRecord) -> Result<HistoryRecord, HistoryError>;
    /// Lista registros más recientes primero (created_at desc; empates
    /// por id desc, porque los timestamps pueden colisionar).
    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError>;
}

pub struct InMemoryHistoryStore {
    pub inner: Vec<HistoryRecord>,
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn append(&mut self, record: NewHistoryRecord) -> Result<HistoryRecord, HistoryError> {
        let stored = HistoryRecord { id: self.inner.len() as i64 + 1,
                                     original_content: record.original_content,
                                     processed_content: record.processed_content,
                                     operation: record.operation,
                                     success: record.success,
                                     error_message: record.error_message,
                                     original_size: record.original_size,
                                     processed_size: record.processed_size,
                                     created_at: Utc::now() };
        self.inner.push(stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        let mut records = self.inner.clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}
