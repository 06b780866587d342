//! Motor de transformación.
//!
//! Contrato: `process(request) -> ProcessResult`. Un único punto de fallo
//! (el parseo); cada rama exitosa re-serializa el valor según la operación
//! pedida. El mensaje del parser se reporta verbatim; el motor nunca
//! devuelve `Err` por entrada malformada.

pub mod serialize;
pub mod sort;

use serde_json::Value;

use crate::model::{JsonOperation, ProcessRequest, ProcessResult};

pub use sort::sort_keys;

pub fn process(request: &ProcessRequest) -> ProcessResult {
    let original_size = request.content.chars().count();

    let parsed: Value = match serde_json::from_str(&request.content) {
        Ok(value) => value,
        Err(e) => return ProcessResult::failed(request.operation, e.to_string(), original_size),
    };

    let rendered = match request.operation {
        // Eco byte-idéntico: la entrada ya demostró ser válida.
        JsonOperation::Validate => request.content.clone(),
        JsonOperation::Format => serialize::to_pretty(&parsed, request.indent_size),
        JsonOperation::Minify => serialize::to_minified(&parsed),
        JsonOperation::SortKeys => serialize::to_pretty(&sort::sort_keys(&parsed), request.indent_size),
    };

    ProcessResult::succeeded(request.operation, rendered, original_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Indent;

    #[test]
    fn validate_echoes_input_verbatim() {
        let request = ProcessRequest::new("{\"a\":1}", JsonOperation::Validate);
        let result = process(&request);
        assert!(result.success);
        assert_eq!(result.result_text.as_deref(), Some("{\"a\":1}"));
        assert_eq!(result.original_size, 7);
        assert_eq!(result.processed_size, Some(7));
    }

    #[test]
    fn format_keeps_insertion_order() {
        let request = ProcessRequest::new("{\"zebra\":1,\"apple\":2}", JsonOperation::Format);
        let result = process(&request);
        let text = result.result_text.unwrap();
        let zebra = text.find("zebra").unwrap();
        let apple = text.find("apple").unwrap();
        assert!(zebra < apple, "format must not reorder keys: {text}");
    }

    #[test]
    fn parse_failure_reports_parser_message() {
        let request = ProcessRequest::new("{\"a\":1,}", JsonOperation::Minify);
        let result = process(&request);
        assert!(!result.success);
        assert!(result.result_text.is_none());
        assert!(result.processed_size.is_none());
        assert_eq!(result.original_size, 8);
        assert!(!result.error_message.unwrap().is_empty());
    }

    #[test]
    fn sort_keys_formats_with_requested_indent() {
        let request = ProcessRequest::with_indent("{\"b\":{\"d\":1,\"c\":2},\"a\":3}",
                                                  JsonOperation::SortKeys,
                                                  Indent::new(4).unwrap());
        let text = process(&request).result_text.unwrap();
        assert_eq!(text,
                   "{\n    \"a\": 3,\n    \"b\": {\n        \"c\": 2,\n        \"d\": 1\n    }\n}");
    }
}
