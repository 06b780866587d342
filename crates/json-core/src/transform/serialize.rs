//! Re-serialización con política de formato.
//!
//! La fidelidad numérica (round-trip por double estándar) es propiedad del
//! codec serde_json, no lógica propia. Serializar un `Value` ya parseado a
//! memoria no puede fallar con entrada válida.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::model::Indent;

/// Pretty-print con `indent` espacios literales por nivel.
pub fn to_pretty(value: &Value, indent: Indent) -> String {
    let pad = vec![b' '; indent.get() as usize];
    let formatter = PrettyFormatter::with_indent(&pad);
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser).expect("serialize json value");
    String::from_utf8(out).expect("serializer emits utf-8")
}

/// Serialización compacta, sin espacios entre tokens.
pub fn to_minified(value: &Value) -> String {
    serde_json::to_string(value).expect("serialize json value")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_indents_with_literal_spaces() {
        let value: Value = serde_json::from_str("{\"a\":{\"b\":1}}").unwrap();
        let text = to_pretty(&value, Indent::new(4).unwrap());
        assert_eq!(text, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    }

    #[test]
    fn empty_containers_stay_compact() {
        let value: Value = serde_json::from_str("{\"a\":[],\"b\":{}}").unwrap();
        let text = to_pretty(&value, Indent::default());
        assert_eq!(text, "{\n  \"a\": [],\n  \"b\": {}\n}");
    }

    #[test]
    fn minify_strips_inter_token_whitespace() {
        let value: Value = serde_json::from_str("{\n  \"a\": [1, 2],\n  \"b\": null\n}").unwrap();
        assert_eq!(to_minified(&value), "{\"a\":[1,2],\"b\":null}");
    }

    #[test]
    fn numbers_roundtrip_through_double_formatting() {
        let value: Value = serde_json::from_str("[0.1, 1e10, -3.5, 42]").unwrap();
        assert_eq!(to_minified(&value), "[0.1,10000000000.0,-3.5,42]");
    }
}
