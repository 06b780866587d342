//! Constantes del núcleo.
//!
//! Valores fijos del contrato observable: límites de subida y profundidad
//! de expansión del árbol. Cambiarlos altera el comportamiento visible de
//! la puerta de subida y del renderizador.

/// Tamaño máximo declarado aceptado por la puerta de subida (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Profundidad de auto-expansión por defecto del árbol (los niveles más
/// profundos se colapsan a su línea de resumen).
pub const DEFAULT_EXPAND_DEPTH: usize = 2;
