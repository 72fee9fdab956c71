use serde::{Deserialize, Serialize};

/// Valor crudo devuelto por el motor para un descriptor.
///
/// `Other` conserva una representación textual para formas que el catálogo
/// no tipa (p. ej. resultados compuestos de motores externos).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum DescriptorValue {
    Real(f64),
    Integer(i64),
    Boolean(bool),
    RealSeq(Vec<f64>),
    IntegerSeq(Vec<i64>),
    Missing,
    Other(String),
}

impl From<f64> for DescriptorValue {
    fn from(v: f64) -> Self {
        DescriptorValue::Real(v)
    }
}

impl From<i64> for DescriptorValue {
    fn from(v: i64) -> Self {
        DescriptorValue::Integer(v)
    }
}

impl From<usize> for DescriptorValue {
    fn from(v: usize) -> Self {
        DescriptorValue::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<bool> for DescriptorValue {
    fn from(v: bool) -> Self {
        DescriptorValue::Boolean(v)
    }
}

impl From<Vec<f64>> for DescriptorValue {
    fn from(v: Vec<f64>) -> Self {
        DescriptorValue::RealSeq(v)
    }
}

impl From<Vec<i64>> for DescriptorValue {
    fn from(v: Vec<i64>) -> Self {
        DescriptorValue::IntegerSeq(v)
    }
}
