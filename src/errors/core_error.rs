use chem_core::PipelineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error interno: {0}")]
    Internal(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Petición inválida: {0}")]
    BadRequest(String),
    #[error("Cuerpo demasiado grande: {0} bytes")]
    PayloadTooLarge(usize),
    #[error("Tiempo de espera agotado tras {0} ms")]
    Timeout(u64),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Código HTTP con el que se responde a este error.
    pub fn status_code(&self) -> u16 {
        match self {
            CoreError::BadRequest(_) => 400,
            CoreError::Pipeline(e) if e.is_invalid_input() => 400,
            CoreError::Pipeline(_) => 422,
            CoreError::PayloadTooLarge(_) => 413,
            CoreError::Timeout(_) => 504,
            CoreError::Internal(_) | CoreError::Io(_) | CoreError::Config(_) | CoreError::Serialization(_) => 500,
        }
    }

    /// Mensaje para el cliente. Los errores de entrada del pipeline se
    /// entregan tal cual ("SMILES string is required").
    pub fn client_message(&self) -> String {
        match self {
            CoreError::Pipeline(PipelineError::InvalidInput(m)) => m.clone(),
            other => other.to_string(),
        }
    }
}
