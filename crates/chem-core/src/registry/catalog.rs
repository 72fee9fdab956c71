//! Nombres y descripciones fijados a mano para parte del catálogo. Todo
//! descriptor ausente de estas tablas recibe valores derivados (`naming`).

use chem_domain::DescriptorKind;

pub(crate) static NAME_OVERRIDES: &[(DescriptorKind, &str)] = &[
    (DescriptorKind::Weight, "Molecular Weight"),
    (DescriptorKind::XLogP, "XLogP"),
    (DescriptorKind::Tpsa, "Topological Polar Surface Area"),
    (DescriptorKind::RotatableBondsCount, "Rotatable Bonds Count"),
    (DescriptorKind::ALogP, "ALOGP"),
    (DescriptorKind::APol, "APol"),
    (DescriptorKind::AcidicGroupCount, "Acidic Group Count"),
    (DescriptorKind::AromaticAtomsCount, "Aromatic Atoms Count"),
    (DescriptorKind::AromaticBondsCount, "Aromatic Bonds Count"),
    (DescriptorKind::AtomCount, "Atom Count"),
    (DescriptorKind::BasicGroupCount, "Basic Group Count"),
    (DescriptorKind::BondCount, "Bond Count"),
    (DescriptorKind::ChiIndexUtils, "Chi Index Utils"),
    (DescriptorKind::CarbonTypes, "Carbon Types"),
    (DescriptorKind::EccentricConnectivityIndex, "Eccentric Connectivity Index"),
    (DescriptorKind::Fmf, "FMF Descriptor"),
];

pub(crate) static DESCRIPTION_OVERRIDES: &[(DescriptorKind, &str)] = &[
    (DescriptorKind::ALogP,
     "Calculates Ghose-Crippen LogKow (octanol/water partition coefficient) and other descriptors related to molecular hydrophobicity"),
    (DescriptorKind::APol, "Sum of the atomic polarizabilities"),
    (DescriptorKind::AcidicGroupCount, "Returns the number of acidic groups in a molecule"),
    (DescriptorKind::AromaticAtomsCount, "Returns the number of aromatic atoms in a molecule"),
    (DescriptorKind::AromaticBondsCount, "Returns the number of aromatic bonds in a molecule"),
    (DescriptorKind::AtomCount, "Returns the number of atoms of a given element type in a molecule"),
    (DescriptorKind::Bcut,
     "Eigenvalue-based descriptor that reflects atomic properties relevant to intermolecular interactions"),
    (DescriptorKind::BondCount, "Returns the number of bonds of a certain bond order"),
    (DescriptorKind::Tpsa, "Calculation of topological polar surface area based on fragment contributions"),
    (DescriptorKind::XLogP, "Calculates the XLogP value for a molecule"),
    (DescriptorKind::Weight, "Calculates the molecular weight"),
    (DescriptorKind::RotatableBondsCount, "Returns the number of rotatable bonds in a molecule"),
    (DescriptorKind::RuleOfFive,
     "Evaluates Lipinski's Rule of Five: molecular weight, logP, H-bond donors, H-bond acceptors"),
    (DescriptorKind::HBondAcceptorCount, "Returns the number of hydrogen bond acceptors in a molecule"),
    (DescriptorKind::HBondDonorCount, "Returns the number of hydrogen bond donors in a molecule"),
];

pub(crate) fn name_override(kind: DescriptorKind) -> Option<&'static str> {
    NAME_OVERRIDES.iter().find(|(k, _)| *k == kind).map(|(_, n)| *n)
}

pub(crate) fn description_override(kind: DescriptorKind) -> Option<&'static str> {
    DESCRIPTION_OVERRIDES.iter().find(|(k, _)| *k == kind).map(|(_, d)| *d)
}
