//! Validador con posición de error.
//!
//! Política de entrada vacía (decisión registrada en DESIGN.md): el texto
//! vacío o sólo-espacios se rechaza ANTES de parsear, con un mensaje
//! genérico y sin posición. Para el resto, el mensaje del parser se
//! reporta verbatim y la posición sólo cuando línea y columna son >= 1:
//! el contrato nunca fabrica una posición que el parser no dio.

use serde_json::Value;

use crate::model::ValidationResult;

pub const NO_INPUT_MESSAGE: &str = "No input provided";

pub fn validate(content: &str) -> ValidationResult {
    if content.trim().is_empty() {
        return ValidationResult::invalid(NO_INPUT_MESSAGE.to_string(), None);
    }

    match serde_json::from_str::<Value>(content) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => {
            let position = usable_position(e.line(), e.column());
            ValidationResult::invalid(e.to_string(), position)
        }
    }
}

// serde_json reporta línea/columna 1-based; una columna 0 (EOF al inicio
// de línea) no es una posición usable dentro del contenido.
fn usable_position(line: usize, column: usize) -> Option<(u32, u32)> {
    if line >= 1 && column >= 1 {
        Some((line as u32, column as u32))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_has_no_error_fields() {
        let result = validate("{\"a\": [1, 2, 3]}");
        assert!(result.is_valid);
        assert!(result.error_message.is_none());
        assert!(result.line_number.is_none());
        assert!(result.column_number.is_none());
    }

    #[test]
    fn empty_and_whitespace_input_short_circuit() {
        for raw in ["", "   ", "\n\t  \n"] {
            let result = validate(raw);
            assert!(!result.is_valid);
            assert_eq!(result.error_message.as_deref(), Some(NO_INPUT_MESSAGE));
            assert!(result.line_number.is_none());
            assert!(result.column_number.is_none());
        }
    }

    #[test]
    fn syntax_error_carries_line_and_column() {
        let result = validate("{\n  \"a\": 1,\n  \"b\": oops\n}");
        assert!(!result.is_valid);
        assert_eq!(result.line_number, Some(3));
        assert_eq!(result.column_number, Some(8));
        assert!(result.error_message.unwrap().contains("line 3"));
    }

    #[test]
    fn single_line_error_is_line_one() {
        let result = validate("{\"a\":1,}");
        assert!(!result.is_valid);
        assert_eq!(result.line_number, Some(1));
        assert!(result.column_number.unwrap() >= 1);
    }
}
