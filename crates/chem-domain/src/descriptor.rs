//! Catálogo cerrado de descriptores moleculares y sus tipos asociados.
//!
//! `DescriptorKind` enumera los 43 descriptores conocidos en el orden
//! canónico del catálogo. El identificador estable de cada uno es
//! `DESCRIPTOR_ID_PREFIX` seguido del nombre de clase (`WeightDescriptor`).
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Prefijo común de todos los identificadores de descriptor.
pub const DESCRIPTOR_ID_PREFIX: &str = "chemdesc.descriptors.molecular.";

macro_rules! descriptor_kinds {
    ($($variant:ident => $class:literal),* $(,)?) => {
        /// Identificador cerrado de un descriptor del catálogo.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum DescriptorKind {
            $($variant),*
        }

        impl DescriptorKind {
            /// Todos los descriptores en orden de catálogo.
            pub const ALL: &'static [DescriptorKind] = &[$(DescriptorKind::$variant),*];

            /// Nombre de clase (último segmento del identificador).
            pub fn class_name(self) -> &'static str {
                match self {
                    $(DescriptorKind::$variant => $class),*
                }
            }

            /// Identificador estable completo.
            pub fn id(self) -> &'static str {
                match self {
                    $(DescriptorKind::$variant => concat!("chemdesc.descriptors.molecular.", $class)),*
                }
            }
        }
    };
}

descriptor_kinds! {
    ALogP => "ALOGPDescriptor",
    APol => "APolDescriptor",
    AcidicGroupCount => "AcidicGroupCountDescriptor",
    AromaticAtomsCount => "AromaticAtomsCountDescriptor",
    AromaticBondsCount => "AromaticBondsCountDescriptor",
    AtomCount => "AtomCountDescriptor",
    AutocorrelationCharge => "AutocorrelationDescriptorCharge",
    AutocorrelationMass => "AutocorrelationDescriptorMass",
    AutocorrelationPolarizability => "AutocorrelationDescriptorPolarizability",
    BasicGroupCount => "BasicGroupCountDescriptor",
    Bcut => "BCUTDescriptor",
    BondCount => "BondCountDescriptor",
    BPol => "BPol",
    CarbonTypes => "CarbonTypesDescriptor",
    Cpsa => "CPSADescriptor",
    ChiIndexUtils => "ChiIndexUtils",
    ChiPathCluster => "ChiPathClusterDescriptor",
    ChiPath => "ChiPathDescriptor",
    EccentricConnectivityIndex => "EccentricConnectivityIndexDescriptor",
    Fmf => "FMFDescriptor",
    FragmentComplexity => "FragmentComplexityDescriptor",
    HBondAcceptorCount => "HBondAcceptorCountDescriptor",
    HBondDonorCount => "HBondDonorCountDescriptor",
    KappaShapeIndices => "KappaShapeIndicesDescriptor",
    KierHallSmarts => "KierHallSmartsDescriptor",
    LargestChain => "LargestChainDescriptor",
    LargestPiSystem => "LargestPiSystemDescriptor",
    LengthOverBreadth => "LengthOverBreadthDescriptor",
    LongestAliphaticChain => "LongestAliphaticChainDescriptor",
    Mde => "MDEDescriptor",
    MomentOfInertia => "MomentOfInertiaDescriptor",
    PetitjeanNumber => "PetitjeanNumberDescriptor",
    PetitjeanShapeIndex => "PetitjeanShapeIndexDescriptor",
    RotatableBondsCount => "RotatableBondsCountDescriptor",
    RuleOfFive => "RuleOfFiveDescriptor",
    SmallRing => "SmallRingDescriptor",
    Tpsa => "TPSADescriptor",
    VAdjMa => "VAdjMaDescriptor",
    Weight => "WeightDescriptor",
    Whim => "WHIMDescriptor",
    WienerNumbers => "WienerNumbersDescriptor",
    XLogP => "XLogPDescriptor",
    ZagrebIndex => "ZagrebIndexDescriptor",
}

impl DescriptorKind {
    /// Resuelve un identificador completo del catálogo.
    pub fn from_id(id: &str) -> Result<Self, DomainError> {
        Self::ALL.iter()
                 .copied()
                 .find(|k| k.id() == id)
                 .ok_or_else(|| DomainError::UnknownDescriptor(id.to_string()))
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Entrada de registro: identificador más metadatos legibles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSpec {
    pub kind: DescriptorKind,
    pub display_name: String,
    pub description: String,
}

impl DescriptorSpec {
    pub fn new(kind: DescriptorKind, display_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind,
               display_name: display_name.into(),
               description: description.into() }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }
}

/// Resultado de un descriptor ya formateado para presentación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorResult {
    pub id: String,
    pub display_name: String,
    pub value: String,
    pub description: String,
}

impl DescriptorResult {
    pub fn new(spec: &DescriptorSpec, value: String) -> Self {
        Self { id: spec.id().to_string(),
               display_name: spec.display_name.clone(),
               value,
               description: spec.description.clone() }
    }

    /// Entrada visible para un cálculo fallido: valor `"Error"` y la causa
    /// en la descripción.
    pub fn failed(spec: &DescriptorSpec, message: &str) -> Self {
        Self { id: spec.id().to_string(),
               display_name: spec.display_name.clone(),
               value: "Error".to_string(),
               description: format!("Failed to calculate: {message}") }
    }

    pub fn is_error(&self) -> bool {
        self.value == "Error" && self.description.starts_with("Failed to calculate: ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_43_unique_ids_with_prefix() {
        assert_eq!(DescriptorKind::ALL.len(), 43);
        let mut ids: Vec<&str> = DescriptorKind::ALL.iter().map(|k| k.id()).collect();
        assert!(ids.iter().all(|id| id.starts_with(DESCRIPTOR_ID_PREFIX)));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 43);
    }

    #[test]
    fn from_id_round_trips_and_rejects_unknown() {
        let id = DescriptorKind::Weight.id();
        assert_eq!(id, "chemdesc.descriptors.molecular.WeightDescriptor");
        assert_eq!(DescriptorKind::from_id(id), Ok(DescriptorKind::Weight));
        assert!(matches!(DescriptorKind::from_id("nope"), Err(DomainError::UnknownDescriptor(_))));
    }

    #[test]
    fn failed_result_carries_message() {
        let spec = DescriptorSpec::new(DescriptorKind::Tpsa, "TPSA", "area");
        let r = DescriptorResult::failed(&spec, "boom");
        assert_eq!(r.value, "Error");
        assert_eq!(r.description, "Failed to calculate: boom");
        assert!(r.is_error());
        assert_eq!(r.display_name, "TPSA");
    }
}
