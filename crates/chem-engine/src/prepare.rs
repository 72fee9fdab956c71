//! Preparación previa al cálculo de descriptores: percepción de
//! aromaticidad en anillos Kekulé de seis miembros, normalización de H
//! implícitos y tipado de hibridación.
//!
//! Un átomo que supera su valencia máxima produce `EngineError::Valence`,
//! pero el grafo queda tipado en todo lo demás: quien llama decide si el
//! fallo es fatal.
use crate::core::{BondOrder, Hybridization, MolGraph};
use crate::{element, rings, smiles, EngineError};

pub fn prepare(graph: &mut MolGraph) -> Result<(), EngineError> {
    perceive_aromaticity(graph);
    for i in 0..graph.atom_count() {
        if !graph.atoms[i].bracket {
            let hydrogens = smiles::implicit_hydrogens(graph, i);
            graph.atoms[i].hydrogens = hydrogens;
        }
        let hyb = hybridization(graph, i);
        graph.atoms[i].hybridization = hyb;
    }
    graph.prepared = true;
    check_valences(graph)
}

/// Hibridación a partir de los órdenes de enlace del átomo.
pub fn hybridization(graph: &MolGraph, idx: usize) -> Hybridization {
    let atom = &graph.atoms[idx];
    if atom.atomic_number == 1 {
        return Hybridization::Unknown;
    }
    let mut doubles = 0;
    let mut triples = 0;
    for &(_, bi) in graph.adjacency(idx) {
        match graph.bonds[bi].order {
            BondOrder::Double => doubles += 1,
            BondOrder::Triple => triples += 1,
            _ => {}
        }
    }
    if triples > 0 || doubles > 1 {
        Hybridization::Sp
    } else if doubles == 1 || atom.aromatic {
        Hybridization::Sp2
    } else {
        Hybridization::Sp3
    }
}

/// Marca como aromáticos los anillos de seis átomos C/N con tres dobles
/// enlaces alternados dentro del anillo.
fn perceive_aromaticity(graph: &mut MolGraph) {
    let ring_list = rings::sssr(graph);
    for ring in ring_list.iter().filter(|r| r.len() == 6) {
        if !ring.iter().all(|&i| matches!(graph.atoms[i].atomic_number, 6 | 7)) {
            continue;
        }
        let bond_ids: Vec<usize> = (0..6).filter_map(|k| {
                                             let (a, b) = (ring[k], ring[(k + 1) % 6]);
                                             graph.adjacency(a).iter().find(|&&(n, _)| n == b).map(|&(_, bi)| bi)
                                         })
                                         .collect();
        if bond_ids.len() != 6 {
            continue;
        }
        let already = bond_ids.iter().all(|&bi| graph.bonds[bi].order == BondOrder::Aromatic);
        let alternating = (0..6).all(|k| {
                                    let here = graph.bonds[bond_ids[k]].order;
                                    let next = graph.bonds[bond_ids[(k + 1) % 6]].order;
                                    matches!((here, next),
                                             (BondOrder::Single, BondOrder::Double) | (BondOrder::Double, BondOrder::Single))
                                });
        if already || !alternating {
            continue;
        }
        for &bi in &bond_ids {
            graph.bonds[bi].order = BondOrder::Aromatic;
        }
        for &i in ring {
            graph.atoms[i].aromatic = true;
        }
        log::trace!("aromatic ring perceived: {:?}", ring);
    }
}

fn check_valences(graph: &MolGraph) -> Result<(), EngineError> {
    for (i, atom) in graph.atoms.iter().enumerate() {
        let Some(elem) = element::by_number(atom.atomic_number) else {
            continue;
        };
        let used = graph.bond_order_sum(i) as i16 + atom.hydrogens as i16;
        let allowed = elem.max_valence() as i16 + atom.charge.unsigned_abs() as i16;
        if used > allowed {
            return Err(EngineError::Valence(format!("atom {} ({}) has valence {} but at most {} is allowed",
                                                    i + 1,
                                                    elem.symbol,
                                                    used,
                                                    allowed)));
        }
    }
    Ok(())
}
