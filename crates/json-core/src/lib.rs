//! json-core: núcleo puro de transformaciones JSON.
//!
//! Contiene el motor de transformación (format / minify / sort-keys /
//! validate), el validador con posición de error, la puerta de subida de
//! archivos, el renderizador de árbol y el contrato de historial
//! (`HistoryStore` + implementación en memoria). Sin I/O: todo es trabajo
//! síncrono sobre valores ya parseados.

pub mod constants;
pub mod errors;
pub mod history;
pub mod model;
pub mod transform;
pub mod tree;
pub mod upload;
pub mod validate;

pub use errors::{CoreError, HistoryError};
pub use history::{HistoryRecord, HistoryStore, InMemoryHistoryStore, NewHistoryRecord};
pub use model::{Healthcheck, Indent, JsonOperation, ProcessRequest, ProcessResult, ValidationResult};
pub use transform::{process, sort_keys};
pub use tree::render_tree;
pub use upload::{process_file_upload, FileUpload};
pub use validate::validate;
