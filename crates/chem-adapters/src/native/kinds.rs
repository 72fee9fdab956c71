//! Correspondencia `DescriptorKind` -> cálculo del motor nativo.

use chem_core::ComputeError;
use chem_domain::{DescriptorKind, DescriptorValue};
use chemengine::descriptors as d;
use chemengine::MolGraph;

/// Descriptores que este motor no implementa; el pipeline los omite.
pub const UNAVAILABLE: &[DescriptorKind] = &[DescriptorKind::AutocorrelationCharge,
                                             DescriptorKind::Bcut,
                                             DescriptorKind::BPol,
                                             DescriptorKind::ChiIndexUtils,
                                             DescriptorKind::ChiPathCluster,
                                             DescriptorKind::KierHallSmarts,
                                             DescriptorKind::Mde,
                                             DescriptorKind::XLogP];

pub fn is_available(kind: DescriptorKind) -> bool {
    !UNAVAILABLE.contains(&kind)
}

fn ints(values: &[usize]) -> Vec<i64> {
    values.iter().map(|&v| i64::try_from(v).unwrap_or(i64::MAX)).collect()
}

pub(crate) fn compute(graph: &MolGraph, kind: DescriptorKind) -> Result<DescriptorValue, ComputeError> {
    use DescriptorKind::*;
    let value = match kind {
        ALogP => {
            let (alogp, amr) = d::crippen(graph);
            DescriptorValue::RealSeq(vec![alogp, alogp * alogp, amr])
        }
        APol => d::atomic_polarizability(graph).into(),
        AcidicGroupCount => d::acidic_groups(graph).into(),
        AromaticAtomsCount => d::aromatic_atom_count(graph).into(),
        AromaticBondsCount => d::aromatic_bond_count(graph).into(),
        AtomCount => d::atom_count(graph).into(),
        AutocorrelationMass => d::autocorrelation(graph, &d::scaled_masses(graph)).into(),
        AutocorrelationPolarizability => d::autocorrelation(graph, &d::polarizabilities(graph)).into(),
        BasicGroupCount => d::basic_groups(graph).into(),
        BondCount => d::bond_count(graph).into(),
        CarbonTypes => ints(&d::carbon_types(graph)).into(),
        ChiPath => d::chi_path(graph).to_vec().into(),
        EccentricConnectivityIndex => d::eccentric_connectivity(graph).into(),
        Fmf => d::framework_fraction(graph).into(),
        FragmentComplexity => d::fragment_complexity(graph).into(),
        HBondAcceptorCount => d::hbond_acceptors(graph).into(),
        HBondDonorCount => d::hbond_donors(graph).into(),
        KappaShapeIndices => d::kappa_shape(graph).to_vec().into(),
        LargestChain => d::largest_chain(graph).into(),
        LargestPiSystem => d::largest_pi_system(graph).into(),
        LongestAliphaticChain => d::longest_aliphatic_chain(graph).into(),
        PetitjeanNumber => d::petitjean_number(graph).map(DescriptorValue::Real)
                                                      .unwrap_or(DescriptorValue::Missing),
        // Índice topológico e índice geométrico (sin coordenadas 3D: NaN).
        PetitjeanShapeIndex => vec![d::petitjean_topological_shape(graph), f64::NAN].into(),
        RotatableBondsCount => d::rotatable_bonds(graph).into(),
        RuleOfFive => d::rule_of_five_violations(graph).into(),
        SmallRing => ints(&d::small_rings(graph)).into(),
        Tpsa => d::tpsa(graph).into(),
        VAdjMa => d::vertex_adjacency_magnitude(graph).into(),
        Weight => d::molecular_weight(graph).into(),
        WienerNumbers => {
            let (path, polarity) = d::wiener(graph);
            vec![path, polarity].into()
        }
        ZagrebIndex => d::zagreb(graph).into(),
        Cpsa | LengthOverBreadth | MomentOfInertia | Whim => {
            return d::require_3d(graph).map(|_| DescriptorValue::Missing)
                                       .map_err(|e| ComputeError::Failed(e.message().to_string()));
        }
        AutocorrelationCharge | Bcut | BPol | ChiIndexUtils | ChiPathCluster | KierHallSmarts | Mde | XLogP => {
            return Err(ComputeError::Unavailable);
        }
    };
    Ok(value)
}
