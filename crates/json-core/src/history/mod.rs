//! Contrato de historial y tipos de registro.

mod store;
mod types;

pub use store::{HistoryStore, InMemoryHistoryStore};
pub use types::{HistoryRecord, NewHistoryRecord};
