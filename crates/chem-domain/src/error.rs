use thiserror::Error;

/// Error del dominio: validación de entradas y conversión de identificadores.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Descriptor desconocido: {0}")]
    UnknownDescriptor(String),
}
