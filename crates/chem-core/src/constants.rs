//! Constantes del formateo y del registro.
//!
//! Cambiarlas altera el texto de salida de todos los descriptores; los
//! clientes comparan contra estos valores literales.

/// Decimales de los valores reales.
pub const REAL_PRECISION: usize = 4;

/// Elementos de una secuencia que se muestran antes de truncar.
pub const MAX_SEQUENCE_ITEMS: usize = 10;

/// Texto para un valor ausente.
pub const MISSING_VALUE: &str = "N/A";

