use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{DescriptorResult, DomainError};

/// Molécula procesada: entrada SMILES más todo lo derivado de ella.
///
/// Se crea una por petición y nunca se comparte; el `id` es un UUID v4
/// generado en la construcción.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    id: Uuid,
    smiles: String,
    molfile: String,
    image: Vec<u8>,
    descriptors: Vec<DescriptorResult>,
    computed_at: DateTime<Utc>,
}

impl Molecule {
    pub fn new(smiles: &str,
               molfile: String,
               image: Vec<u8>,
               descriptors: Vec<DescriptorResult>)
               -> Result<Self, DomainError> {
        if smiles.trim().is_empty() {
            return Err(DomainError::ValidationError("SMILES string is required".to_string()));
        }
        Ok(Molecule { id: Uuid::new_v4(),
                      smiles: smiles.to_string(),
                      molfile,
                      image,
                      descriptors,
                      computed_at: Utc::now() })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn smiles(&self) -> &str {
        &self.smiles
    }
    pub fn molfile(&self) -> &str {
        &self.molfile
    }
    pub fn image(&self) -> &[u8] {
        &self.image
    }
    pub fn descriptors(&self) -> &[DescriptorResult] {
        &self.descriptors
    }
    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    pub fn descriptor(&self, id: &str) -> Option<&DescriptorResult> {
        self.descriptors.iter().find(|d| d.id == id)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<smiles: {}, {} descriptors>", self.smiles, self.descriptors.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DescriptorKind, DescriptorSpec};

    fn result(kind: DescriptorKind, value: &str) -> DescriptorResult {
        DescriptorResult::new(&DescriptorSpec::new(kind, "n", "d"), value.to_string())
    }

    #[test]
    fn ids_are_unique_per_instance() {
        let a = Molecule::new("CCO", String::new(), vec![], vec![]).unwrap();
        let b = Molecule::new("CCO", String::new(), vec![], vec![]).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.smiles(), "CCO");
    }

    #[test]
    fn blank_smiles_is_rejected() {
        assert!(matches!(Molecule::new("   ", String::new(), vec![], vec![]),
                         Err(DomainError::ValidationError(_))));
    }

    #[test]
    fn descriptor_lookup_by_id() {
        let list = vec![result(DescriptorKind::Weight, "1.0000"), result(DescriptorKind::Tpsa, "0.0000")];
        let m = Molecule::new("C", String::new(), vec![], list).unwrap();
        assert_eq!(m.descriptor(DescriptorKind::Tpsa.id()).map(|d| d.value.as_str()), Some("0.0000"));
        assert!(m.descriptor(DescriptorKind::Bcut.id()).is_none());
    }
}
