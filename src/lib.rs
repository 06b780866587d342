//! jsontools-rust: fachada de aplicación.
//!
//! Expone la superficie de manejadores transport-agnóstica (processJson,
//! validateJson, processFileUpload, getHistory, healthcheck) sobre el
//! núcleo puro y un `HistoryStore` inyectado. El binario `jsontools` la
//! consume desde la línea de comandos.

pub mod config;
pub mod service;

pub use config::AppConfig;
pub use service::JsonToolsService;
