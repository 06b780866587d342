//! Renderizador de árbol en texto plano.
//!
//! Una línea por nodo, sangría de 2 espacios por nivel. Escalares con su
//! literal JSON más la etiqueta de tipo; contenedores resumidos como
//! `Object (n items)` / `Array[n]`. Los nodos más profundos que
//! `expand_depth` se colapsan a su línea de resumen (equivalente textual
//! del auto-expand de la vista cliente). Presentación pura: el camino de
//! transformación no lo consume.

use serde_json::Value;

pub use crate::constants::DEFAULT_EXPAND_DEPTH;

pub fn render_tree(value: &Value, expand_depth: usize) -> String {
    let mut out = String::new();
    render_node(value, None, 0, expand_depth, &mut out);
    out
}

fn render_node(value: &Value, label: Option<&str>, level: usize, expand_depth: usize, out: &mut String) {
    let pad = "  ".repeat(level);
    let prefix = match label {
        Some(label) => format!("{pad}{label}: "),
        None => pad,
    };

    match value {
        Value::Object(map) => {
            out.push_str(&format!("{prefix}Object ({})\n", count_label(map.len())));
            if level < expand_depth {
                for (key, child) in map {
                    render_node(child, Some(key), level + 1, expand_depth, out);
                }
            }
        }
        Value::Array(items) => {
            out.push_str(&format!("{prefix}Array[{}] ({})\n", items.len(), count_label(items.len())));
            if level < expand_depth {
                for (index, child) in items.iter().enumerate() {
                    let item_label = format!("[{index}]");
                    render_node(child, Some(&item_label), level + 1, expand_depth, out);
                }
            }
        }
        scalar => {
            out.push_str(&format!("{prefix}{} ({})\n", scalar_literal(scalar), type_name(scalar)));
        }
    }
}

fn count_label(n: usize) -> String {
    if n == 1 {
        "1 item".to_string()
    } else {
        format!("{n} items")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn scalar_literal(value: &Value) -> String {
    match value {
        Value::String(s) => serde_json::to_string(s).expect("serialize json string"),
        other => other.to_string(),
    }
}
