//! Ordenamiento recursivo de claves.
//!
//! Reordena claves de objeto por comparación ordinal ascendente en cada
//! profundidad; los arreglos conservan el orden de sus elementos (sólo se
//! ordena recursivamente su contenido). Escalares intactos. Idempotente.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut tree = BTreeMap::new();
            for (k, v) in map {
                tree.insert(k.clone(), sort_keys(v));
            }
            let mut sorted = Map::new();
            for (k, v) in tree {
                sorted.insert(k, v);
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        scalar => scalar.clone(),
    }
}
