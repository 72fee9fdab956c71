//! Errores del core: fallo de un descriptor individual y fallo del pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallo al calcular un único descriptor. Nunca aborta el lote.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum ComputeError {
    /// El motor no provee este descriptor; se omite sin dejar rastro.
    #[error("descriptor unavailable")]
    Unavailable,
    /// Cualquier otro fallo; se refleja como entrada `"Error"`.
    #[error("{0}")]
    Failed(String),
}

/// Error de una etapa del motor químico, con el mensaje ya legible.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{0}")]
pub struct EngineFailure(pub String);

/// Fallos fatales de `MoleculePipeline::build`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum PipelineError {
    #[error("invalid input: {0}")] InvalidInput(String),
    #[error("parse error: {0}")] Parse(String),
    #[error("layout error: {0}")] Layout(String),
    #[error("render error: {0}")] Render(String),
}

impl PipelineError {
    /// Los errores de entrada los provoca el cliente; el resto, la molécula.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(_))
    }
}
