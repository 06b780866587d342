//! Superficie de manejadores sobre el núcleo y el historial inyectado.
//!
//! Cada petición es independiente y sin estado compartido; el único I/O es
//! la escritura de historial, que es best-effort: un fallo se registra con
//! `warn!` y se traga, nunca pisa el resultado ya computado ni llega al
//! llamador. Las lecturas (`get_history`) sí propagan el error de
//! almacenamiento.

use log::{debug, warn};

use json_core::history::{HistoryRecord, HistoryStore, NewHistoryRecord};
use json_core::model::{Healthcheck, ProcessRequest, ProcessResult, ValidationResult};
use json_core::upload::FileUpload;
use json_core::{transform, upload, validate, HistoryError};

pub struct JsonToolsService<H: HistoryStore> {
    history: Option<H>,
}

impl<H: HistoryStore> JsonToolsService<H> {
    /// Servicio sin historial (las invocaciones no dejan registro).
    pub fn new() -> Self {
        Self { history: None }
    }

    /// Servicio con el almacenamiento de historial inyectado.
    pub fn with_history(store: H) -> Self {
        Self { history: Some(store) }
    }

    pub fn healthcheck(&self) -> Healthcheck {
        Healthcheck::ok()
    }

    /// processJson: transforma y registra la invocación (ambos desenlaces).
    pub fn process_json(&mut self, request: &ProcessRequest) -> ProcessResult {
        let result = transform::process(request);
        self.record(&request.content, &result);
        result
    }

    /// validateJson: consulta pura, no deja registro de historial.
    pub fn validate_json(&self, content: &str) -> ValidationResult {
        validate::validate(content)
    }

    /// processFileUpload: puerta de subida y registro de la invocación.
    pub fn process_file_upload(&mut self, upload: &FileUpload) -> ProcessResult {
        debug!("upload file_name={} declared_size={}", upload.file_name, upload.file_size);
        let result = upload::process_file_upload(upload);
        self.record(&upload.file_content, &result);
        result
    }

    /// getHistory: registros más recientes primero.
    pub fn get_history(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        match &self.history {
            Some(store) => store.list(),
            None => Ok(Vec::new()),
        }
    }

    fn record(&mut self, content: &str, result: &ProcessResult) {
        let Some(store) = self.history.as_mut() else {
            return;
        };
        if let Err(e) = store.append(NewHistoryRecord::from_result(content, result)) {
            // El resultado ya está computado; el fallo de persistencia no
            // debe enmascararlo.
            warn!("history append failed: {e}");
        }
    }
}

impl<H: HistoryStore> Default for JsonToolsService<H> {
    fn default() -> Self {
        Self::new()
    }
}
