//! Operación solicitada y sangría validada.
//!
//! Ambos tipos se validan en la frontera: una operación desconocida o una
//! sangría fuera de 1..=8 es un `CoreError` del llamador, nunca una rama en
//! tiempo de ejecución del motor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Transformación textual soportada. En el cable (y en el historial) se
/// usan los nombres kebab-case: `validate`, `format`, `minify`,
/// `sort-keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonOperation {
    Validate,
    Format,
    Minify,
    SortKeys,
}

impl JsonOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonOperation::Validate => "validate",
            JsonOperation::Format => "format",
            JsonOperation::Minify => "minify",
            JsonOperation::SortKeys => "sort-keys",
        }
    }
}

impl fmt::Display for JsonOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JsonOperation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validate" => Ok(JsonOperation::Validate),
            "format" => Ok(JsonOperation::Format),
            "minify" => Ok(JsonOperation::Minify),
            "sort-keys" => Ok(JsonOperation::SortKeys),
            other => Err(CoreError::UnknownOperation(other.to_string())),
        }
    }
}

/// Sangría en espacios por nivel de anidamiento, restringida a 1..=8.
/// Sólo es significativa para `format` y `sort-keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Indent(u8);

impl Indent {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(spaces: u8) -> Result<Self, CoreError> {
        if (Self::MIN..=Self::MAX).contains(&spaces) {
            Ok(Self(spaces))
        } else {
            Err(CoreError::IndentOutOfRange(spaces))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for Indent {
    type Error = CoreError;

    fn try_from(spaces: u8) -> Result<Self, Self::Error> {
        Self::new(spaces)
    }
}

impl From<Indent> for u8 {
    fn from(indent: Indent) -> u8 {
        indent.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_roundtrip_kebab_case() {
        assert_eq!("sort-keys".parse::<JsonOperation>().unwrap(), JsonOperation::SortKeys);
        assert_eq!(JsonOperation::SortKeys.to_string(), "sort-keys");
        let wire = serde_json::to_string(&JsonOperation::SortKeys).unwrap();
        assert_eq!(wire, "\"sort-keys\"");
    }

    #[test]
    fn unknown_operation_is_boundary_error() {
        let err = "prettify".parse::<JsonOperation>().unwrap_err();
        assert_eq!(err, CoreError::UnknownOperation("prettify".into()));
    }

    #[test]
    fn indent_range_enforced() {
        assert!(Indent::new(1).is_ok());
        assert!(Indent::new(8).is_ok());
        assert_eq!(Indent::new(0).unwrap_err(), CoreError::IndentOutOfRange(0));
        assert_eq!(Indent::new(9).unwrap_err(), CoreError::IndentOutOfRange(9));
        assert_eq!(Indent::default().get(), 2);
    }
}
