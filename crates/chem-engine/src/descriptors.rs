//! Descriptores moleculares 2D calculados sobre el grafo de átomos pesados.
//!
//! Los hidrógenos viven como conteos implícitos por átomo; los descriptores
//! que los cuentan (masa, conteos de átomos/enlaces, polarizabilidad) los
//! suman explícitamente. Todas las funciones asumen un grafo ya preparado
//! (`prepare::prepare`), aunque toleran uno sin preparar.
use std::collections::{BTreeSet, VecDeque};

use crate::core::{BondOrder, Hybridization, MolGraph};
use crate::{element, prepare, rings, EngineError};

const HYDROGEN_WEIGHT: f64 = 1.008;
const HYDROGEN_POLARIZABILITY: f64 = 0.666793;
const CARBON_WEIGHT: f64 = 12.011;

/// Número de retardos topológicos de las autocorrelaciones (0..=4).
pub const AUTOCORRELATION_LAGS: usize = 5;

/// Descriptores geométricos: el motor sólo genera coordenadas 2D.
pub fn require_3d(_graph: &MolGraph) -> Result<(), EngineError> {
    Err(EngineError::Compute("requires 3D coordinates".into()))
}

pub fn molecular_weight(graph: &MolGraph) -> f64 {
    graph.atoms
         .iter()
         .map(|a| {
             let heavy = element::by_number(a.atomic_number).map(|e| e.atomic_weight).unwrap_or(0.0);
             heavy + a.hydrogens as f64 * HYDROGEN_WEIGHT
         })
         .sum()
}

/// Átomos totales, hidrógenos incluidos.
pub fn atom_count(graph: &MolGraph) -> usize {
    graph.atom_count() + graph.total_hydrogens()
}

/// Enlaces totales, incluidos los X-H.
pub fn bond_count(graph: &MolGraph) -> usize {
    graph.bond_count() + graph.total_hydrogens()
}

pub fn aromatic_atom_count(graph: &MolGraph) -> usize {
    graph.atoms.iter().filter(|a| a.aromatic).count()
}

pub fn aromatic_bond_count(graph: &MolGraph) -> usize {
    graph.bonds.iter().filter(|b| b.order == BondOrder::Aromatic).count()
}

/// Donadores: N u O con al menos un hidrógeno.
pub fn hbond_donors(graph: &MolGraph) -> usize {
    graph.atoms
         .iter()
         .filter(|a| matches!(a.atomic_number, 7 | 8) && a.hydrogens > 0)
         .count()
}

/// Aceptores: todo O, y N no cargado positivamente que no sea tipo pirrol.
pub fn hbond_acceptors(graph: &MolGraph) -> usize {
    graph.atoms
         .iter()
         .filter(|a| match a.atomic_number {
             8 => true,
             7 => a.charge <= 0 && !(a.aromatic && a.hydrogens > 0),
             _ => false,
         })
         .count()
}

/// Enlaces simples fuera de anillo entre átomos no terminales.
pub fn rotatable_bonds(graph: &MolGraph) -> usize {
    let ring_list = rings::sssr(graph);
    let in_ring = rings::ring_bonds(graph, &ring_list);
    graph.bonds
         .iter()
         .enumerate()
         .filter(|&(bi, b)| {
             b.order == BondOrder::Single && !in_ring[bi] && graph.degree(b.a) > 1 && graph.degree(b.b) > 1
         })
         .count()
}

/// Área polar topológica (contribuciones de fragmento de Ertl).
pub fn tpsa(graph: &MolGraph) -> f64 {
    (0..graph.atom_count()).map(|i| tpsa_contribution(graph, i)).sum()
}

fn tpsa_contribution(graph: &MolGraph, idx: usize) -> f64 {
    let atom = &graph.atoms[idx];
    let degree = graph.degree(idx);
    let h = atom.hydrogens;
    let has_double = has_bond(graph, idx, BondOrder::Double);
    let has_triple = has_bond(graph, idx, BondOrder::Triple);
    match atom.atomic_number {
        7 => {
            if atom.charge > 0 {
                return match h {
                    3.. => 27.64,
                    2 => 25.59,
                    1 => 23.47,
                    _ if degree == 4 => 0.0,
                    _ => 3.01,
                };
            }
            if atom.aromatic {
                return match (degree, h) {
                    (_, 1..) => 15.79,
                    (3, _) => 4.41,
                    _ => 12.89,
                };
            }
            match (degree, h, has_double, has_triple) {
                (1, 0, _, true) => 23.79,
                (1, 2, false, _) => 26.02,
                (1, 1, true, _) => 23.85,
                (2, 1, false, _) => 12.03,
                (2, 0, true, _) => 12.36,
                (3, 0, false, _) => 3.24,
                (3, 0, true, _) => 11.68,
                (_, 2.., _, _) => 26.02,
                (_, 1, _, _) => 12.03,
                _ => 3.24,
            }
        }
        8 => {
            if atom.charge < 0 {
                return 23.06;
            }
            if atom.aromatic {
                return 13.14;
            }
            match (degree, h, has_double) {
                (1, 1, false) => 20.23,
                (1, 0, true) => 17.07,
                (2, 0, false) => 9.23,
                (0, 2, _) => 20.23,
                _ if h > 0 => 20.23,
                _ => 9.23,
            }
        }
        _ => 0.0,
    }
}

fn has_bond(graph: &MolGraph, idx: usize, order: BondOrder) -> bool {
    graph.adjacency(idx).iter().any(|&(_, bi)| graph.bonds[bi].order == order)
}

fn has_hetero_neighbor(graph: &MolGraph, idx: usize) -> bool {
    graph.neighbors(idx).any(|n| graph.atoms[n].is_hetero())
}

/// LogP y refractividad molar por contribuciones atómicas tipo Crippen.
/// Devuelve `(alogp, amr)`.
pub fn crippen(graph: &MolGraph) -> (f64, f64) {
    let ring_list = rings::sssr(graph);
    let mut in_ring = vec![false; graph.atom_count()];
    for &i in ring_list.iter().flatten() {
        in_ring[i] = true;
    }
    let mut logp = 0.0;
    let mut mr = 0.0;
    for (i, atom) in graph.atoms.iter().enumerate() {
        let (lp, m) = crippen_contribution(graph, i, in_ring[i]);
        logp += lp;
        mr += m;
        let h = atom.hydrogens as f64;
        logp += h * if atom.is_carbon() { 0.1230 } else { -0.2677 };
        mr += h * 1.057;
    }
    (logp, mr)
}

fn crippen_contribution(graph: &MolGraph, idx: usize, in_ring: bool) -> (f64, f64) {
    let atom = &graph.atoms[idx];
    let has_double = has_bond(graph, idx, BondOrder::Double);
    match atom.atomic_number {
        6 => {
            let hetero = has_hetero_neighbor(graph, idx);
            if atom.aromatic {
                if hetero { (-0.14, 3.509) } else { (0.296, 3.509) }
            } else if has_double {
                if hetero { (-0.03, 3.509) } else { (0.08, 3.509) }
            } else if in_ring || graph.degree(idx) <= 2 {
                (0.1441, 3.509)
            } else if graph.degree(idx) == 3 {
                (0.0, 3.509)
            } else {
                (-0.04, 3.509)
            }
        }
        7 => {
            if atom.aromatic {
                (-0.3187, 2.188)
            } else if atom.charge > 0 {
                (-1.019, 2.188)
            } else if has_double {
                (-0.5262, 2.188)
            } else {
                (-0.4458, 2.262)
            }
        }
        8 => {
            if atom.charge < 0 {
                (-1.189, 1.476)
            } else if has_double {
                (-0.3339, 1.476)
            } else if graph.degree(idx) >= 2 {
                (-0.2893, 1.476)
            } else {
                (-0.3567, 1.476)
            }
        }
        9 => (0.4118, 1.108),
        15 => (0.2836, 6.920),
        16 => {
            if has_double {
                (-0.1084, 7.365)
            } else if atom.charge != 0 {
                (-0.5188, 7.365)
            } else {
                (0.6237, 7.365)
            }
        }
        17 => (0.6895, 5.853),
        35 => (0.8813, 8.927),
        53 => (1.050, 13.940),
        _ => (0.0, 0.0),
    }
}

/// Suma de polarizabilidades atómicas, hidrógenos incluidos.
pub fn atomic_polarizability(graph: &MolGraph) -> f64 {
    graph.atoms
         .iter()
         .map(|a| {
             let heavy = element::by_number(a.atomic_number).map(|e| e.polarizability).unwrap_or(0.0);
             heavy + a.hydrogens as f64 * HYDROGEN_POLARIZABILITY
         })
         .sum()
}

/// Grupos ácidos: oxoácidos de C, S o P con un OH libre o desprotonado.
pub fn acidic_groups(graph: &MolGraph) -> usize {
    let mut centers = BTreeSet::new();
    for (i, atom) in graph.atoms.iter().enumerate() {
        let acidic_oxygen = atom.atomic_number == 8 && graph.degree(i) == 1 && (atom.hydrogens > 0 || atom.charge < 0);
        if !acidic_oxygen {
            continue;
        }
        for &(center, bi) in graph.adjacency(i) {
            if graph.bonds[bi].order != BondOrder::Single || !matches!(graph.atoms[center].atomic_number, 6 | 15 | 16) {
                continue;
            }
            let has_oxo = graph.adjacency(center)
                               .iter()
                               .any(|&(n, b)| n != i && graph.atoms[n].atomic_number == 8 && graph.bonds[b].order == BondOrder::Double);
            if has_oxo {
                centers.insert(center);
            }
        }
    }
    centers.len()
}

/// Grupos básicos: aminas alifáticas que no son amidas, anilinas ni
/// sulfonamidas, más las amidinas/guanidinas contadas por su carbono.
pub fn basic_groups(graph: &MolGraph) -> usize {
    let mut count = 0;
    for (i, atom) in graph.atoms.iter().enumerate() {
        if atom.atomic_number != 7 || atom.aromatic || atom.charge < 0 {
            continue;
        }
        if graph.adjacency(i).iter().any(|&(_, bi)| graph.bonds[bi].order != BondOrder::Single) {
            continue;
        }
        let deactivated = graph.neighbors(i).any(|n| {
                                                 let nb = &graph.atoms[n];
                                                 nb.aromatic || matches!(nb.atomic_number, 7 | 8 | 15 | 16) || carbonyl_like(graph, n)
                                             });
        if !deactivated {
            count += 1;
        }
    }
    for (i, atom) in graph.atoms.iter().enumerate() {
        if !atom.is_carbon() || atom.aromatic {
            continue;
        }
        let imine = graph.adjacency(i).iter().any(|&(n, bi)| {
                                                  graph.atoms[n].atomic_number == 7 && graph.bonds[bi].order == BondOrder::Double
                                              });
        let amine_neighbors = graph.adjacency(i)
                                   .iter()
                                   .filter(|&&(n, bi)| {
                                       graph.atoms[n].atomic_number == 7 && graph.bonds[bi].order == BondOrder::Single
                                   })
                                   .count();
        if imine && amine_neighbors >= 1 {
            count += 1;
        }
    }
    count
}

fn carbonyl_like(graph: &MolGraph, idx: usize) -> bool {
    graph.adjacency(idx).iter().any(|&(n, bi)| {
                                   graph.bonds[bi].order == BondOrder::Double && matches!(graph.atoms[n].atomic_number, 7 | 8 | 16)
                               })
}

/// Carbonos por hibridación y número de carbonos vecinos:
/// `[C1SP1, C2SP1, C1SP2, C2SP2, C3SP2, C1SP3, C2SP3, C3SP3, C4SP3]`.
pub fn carbon_types(graph: &MolGraph) -> [usize; 9] {
    let mut counts = [0usize; 9];
    for (i, atom) in graph.atoms.iter().enumerate() {
        if !atom.is_carbon() {
            continue;
        }
        let carbons = graph.neighbors(i).filter(|&n| graph.atoms[n].is_carbon()).count();
        let hyb = match atom.hybridization {
            Hybridization::Unknown => prepare::hybridization(graph, i),
            other => other,
        };
        let slot = match (hyb, carbons) {
            (Hybridization::Sp, 1) => Some(0),
            (Hybridization::Sp, 2) => Some(1),
            (Hybridization::Sp2, 1) => Some(2),
            (Hybridization::Sp2, 2) => Some(3),
            (Hybridization::Sp2, 3) => Some(4),
            (Hybridization::Sp3, 1) => Some(5),
            (Hybridization::Sp3, 2) => Some(6),
            (Hybridization::Sp3, 3) => Some(7),
            (Hybridization::Sp3, 4) => Some(8),
            _ => None,
        };
        if let Some(s) = slot {
            counts[s] += 1;
        }
    }
    counts
}

/// Caminos simples de `len` enlaces, cada uno contado una sola vez.
fn simple_paths(graph: &MolGraph, len: usize) -> Vec<Vec<usize>> {
    fn extend(graph: &MolGraph, path: &mut Vec<usize>, len: usize, out: &mut Vec<Vec<usize>>) {
        if path.len() == len + 1 {
            if path[0] < path[len] {
                out.push(path.clone());
            }
            return;
        }
        let last = path[path.len() - 1];
        for next in graph.neighbors(last) {
            if !path.contains(&next) {
                path.push(next);
                extend(graph, path, len, out);
                path.pop();
            }
        }
    }
    let mut out = Vec::new();
    if len == 0 {
        return (0..graph.atom_count()).map(|i| vec![i]).collect();
    }
    for start in 0..graph.atom_count() {
        extend(graph, &mut vec![start], len, &mut out);
    }
    out
}

/// Índices de conectividad de camino de orden 0 a 3 (Randić/Kier-Hall).
pub fn chi_path(graph: &MolGraph) -> [f64; 4] {
    let mut chi = [0.0; 4];
    for (order, slot) in chi.iter_mut().enumerate() {
        *slot = simple_paths(graph, order).iter()
                                          .filter(|p| p.iter().all(|&a| graph.degree(a) > 0))
                                          .map(|p| {
                                              let product: f64 = p.iter().map(|&a| graph.degree(a) as f64).product();
                                              1.0 / product.sqrt()
                                          })
                                          .sum();
    }
    chi
}

/// Excentricidad de cada átomo dentro de su fragmento.
fn eccentricities(dist: &[Vec<usize>]) -> Vec<usize> {
    dist.iter()
        .map(|row| row.iter().copied().filter(|&d| d != usize::MAX).max().unwrap_or(0))
        .collect()
}

pub fn eccentric_connectivity(graph: &MolGraph) -> usize {
    let ecc = eccentricities(&graph.distance_matrix());
    ecc.iter().enumerate().map(|(i, e)| e * graph.degree(i)).sum()
}

/// Fracción de átomos pesados que forman el esqueleto de Murcko (anillos
/// más conectores).
pub fn framework_fraction(graph: &MolGraph) -> f64 {
    if graph.is_empty() || rings::sssr(graph).is_empty() {
        return 0.0;
    }
    let framework = rings::ring_atoms(graph).into_iter().filter(|&f| f).count();
    framework as f64 / graph.atom_count() as f64
}

/// Complejidad de fragmento `|B^2 - A^2 + A| + H/100`.
pub fn fragment_complexity(graph: &MolGraph) -> f64 {
    let a = graph.atom_count() as f64;
    let b: f64 = graph.bonds.iter().map(|bond| bond.order.as_f64()).sum();
    let h = graph.atoms.iter().filter(|at| at.is_hetero()).count() as f64;
    (b * b - a * a + a).abs() + h / 100.0
}

/// Índices de forma kappa de Kier `[k1, k2, k3]`.
pub fn kappa_shape(graph: &MolGraph) -> [f64; 3] {
    let n = graph.atom_count() as f64;
    let p = |len: usize| simple_paths(graph, len).len() as f64;
    let (p1, p2, p3) = (p(1), p(2), p(3));
    let k1 = if p1 > 0.0 { n * (n - 1.0).powi(2) / p1.powi(2) } else { 0.0 };
    let k2 = if p2 > 0.0 { (n - 1.0) * (n - 2.0).powi(2) / p2.powi(2) } else { 0.0 };
    let k3 = if p3 > 0.0 {
        if graph.atom_count() % 2 == 1 {
            (n - 1.0) * (n - 3.0).powi(2) / p3.powi(2)
        } else {
            (n - 3.0) * (n - 2.0).powi(2) / p3.powi(2)
        }
    } else {
        0.0
    };
    [k1, k2, k3]
}

/// Átomos del camino más largo dentro del subgrafo inducido por `keep`.
fn longest_path_within(graph: &MolGraph, keep: &[bool]) -> usize {
    let mut best = 0;
    for start in (0..graph.atom_count()).filter(|&i| keep[i]) {
        let mut dist = vec![usize::MAX; graph.atom_count()];
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            best = best.max(dist[cur] + 1);
            for next in graph.neighbors(cur) {
                if keep[next] && dist[next] == usize::MAX {
                    dist[next] = dist[cur] + 1;
                    queue.push_back(next);
                }
            }
        }
    }
    best
}

/// Cadena más larga de átomos pesados fuera de anillos.
pub fn largest_chain(graph: &MolGraph) -> usize {
    let in_ring = ring_membership(graph);
    let keep: Vec<bool> = in_ring.iter().map(|r| !r).collect();
    longest_path_within(graph, &keep)
}

/// Cadena alifática más larga: carbonos no aromáticos fuera de anillos.
pub fn longest_aliphatic_chain(graph: &MolGraph) -> usize {
    let in_ring = ring_membership(graph);
    let keep: Vec<bool> = graph.atoms
                               .iter()
                               .zip(&in_ring)
                               .map(|(a, r)| a.is_carbon() && !a.aromatic && !r)
                               .collect();
    longest_path_within(graph, &keep)
}

fn ring_membership(graph: &MolGraph) -> Vec<bool> {
    let mut member = vec![false; graph.atom_count()];
    for &i in rings::sssr(graph).iter().flatten() {
        member[i] = true;
    }
    member
}

/// Átomos del mayor sistema pi conjugado.
pub fn largest_pi_system(graph: &MolGraph) -> usize {
    let pi: Vec<bool> = (0..graph.atom_count()).map(|i| {
                                                    graph.atoms[i].aromatic
                                                    || graph.adjacency(i).iter().any(|&(_, bi)| graph.bonds[bi].order.is_pi())
                                                })
                                                .collect();
    let mut seen = vec![false; graph.atom_count()];
    let mut best = 0;
    for start in 0..graph.atom_count() {
        if !pi[start] || seen[start] {
            continue;
        }
        seen[start] = true;
        let mut size = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(cur) = queue.pop_front() {
            size += 1;
            for next in graph.neighbors(cur) {
                if pi[next] && !seen[next] {
                    seen[next] = true;
                    queue.push_back(next);
                }
            }
        }
        best = best.max(size);
    }
    best
}

fn diameter_and_radius(graph: &MolGraph) -> (usize, usize) {
    let ecc = eccentricities(&graph.distance_matrix());
    let diameter = ecc.iter().copied().max().unwrap_or(0);
    let radius = ecc.iter().copied().min().unwrap_or(0);
    (diameter, radius)
}

/// Número de Petitjean `(D - R) / R`; `None` si el radio es cero.
pub fn petitjean_number(graph: &MolGraph) -> Option<f64> {
    let (d, r) = diameter_and_radius(graph);
    (r > 0).then(|| (d - r) as f64 / r as f64)
}

/// Índice de forma topológico de Petitjean; NaN si el radio es cero.
pub fn petitjean_topological_shape(graph: &MolGraph) -> f64 {
    petitjean_number(graph).unwrap_or(f64::NAN)
}

/// Violaciones de la regla de cinco de Lipinski.
pub fn rule_of_five_violations(graph: &MolGraph) -> usize {
    let (logp, _) = crippen(graph);
    [molecular_weight(graph) > 500.0,
     logp > 5.0,
     hbond_donors(graph) > 5,
     hbond_acceptors(graph) > 10].iter()
                                 .filter(|v| **v)
                                 .count()
}

/// `[nSmallRings, nAromRings, nRingBlocks, nAromBlocks, nRings3 .. nRings9]`.
pub fn small_rings(graph: &MolGraph) -> [usize; 11] {
    let ring_list = rings::sssr(graph);
    let aromatic = |ring: &Vec<usize>| ring.iter().all(|&i| graph.atoms[i].aromatic);
    let mut out = [0usize; 11];
    out[0] = ring_list.iter().filter(|r| r.len() <= 9).count();
    out[1] = ring_list.iter().filter(|r| aromatic(*r)).count();

    // Bloques: anillos que comparten algún átomo.
    let mut block_of: Vec<usize> = (0..ring_list.len()).collect();
    fn root(block_of: &mut [usize], mut i: usize) -> usize {
        while block_of[i] != i {
            block_of[i] = block_of[block_of[i]];
            i = block_of[i];
        }
        i
    }
    for i in 0..ring_list.len() {
        for j in (i + 1)..ring_list.len() {
            if ring_list[i].iter().any(|a| ring_list[j].contains(a)) {
                let (ri, rj) = (root(&mut block_of, i), root(&mut block_of, j));
                block_of[ri] = rj;
            }
        }
    }
    let roots: Vec<usize> = (0..ring_list.len()).map(|i| root(&mut block_of, i)).collect();
    let blocks: BTreeSet<usize> = roots.iter().copied().collect();
    out[2] = blocks.len();
    out[3] = blocks.iter()
                   .filter(|&&b| (0..ring_list.len()).any(|i| roots[i] == b && aromatic(&ring_list[i])))
                   .count();
    for ring in &ring_list {
        if (3..=9).contains(&ring.len()) {
            out[4 + ring.len() - 3] += 1;
        }
    }
    out
}

/// Información de adyacencia de vértices `1 + log2(m)`.
pub fn vertex_adjacency_magnitude(graph: &MolGraph) -> f64 {
    let m = graph.bond_count();
    if m == 0 {
        0.0
    } else {
        1.0 + (m as f64).log2()
    }
}

/// Primer índice de Zagreb, suma de grados al cuadrado.
pub fn zagreb(graph: &MolGraph) -> f64 {
    (0..graph.atom_count()).map(|i| (graph.degree(i) * graph.degree(i)) as f64).sum()
}

/// Números de Wiener `(camino, polaridad)`.
pub fn wiener(graph: &MolGraph) -> (f64, f64) {
    let dist = graph.distance_matrix();
    let mut path = 0usize;
    let mut polarity = 0usize;
    for i in 0..graph.atom_count() {
        for j in (i + 1)..graph.atom_count() {
            let d = dist[i][j];
            if d == usize::MAX {
                continue;
            }
            path += d;
            if d == 3 {
                polarity += 1;
            }
        }
    }
    (path as f64, polarity as f64)
}

/// Autocorrelación topológica de Moreau-Broto con pesos por átomo, para
/// los retardos `0..AUTOCORRELATION_LAGS`.
pub fn autocorrelation(graph: &MolGraph, weights: &[f64]) -> Vec<f64> {
    let dist = graph.distance_matrix();
    let mut out = vec![0.0; AUTOCORRELATION_LAGS];
    for i in 0..graph.atom_count() {
        for j in i..graph.atom_count() {
            let d = dist[i][j];
            if d < AUTOCORRELATION_LAGS {
                out[d] += weights[i] * weights[j];
            }
        }
    }
    out
}

/// Masas atómicas escaladas por la del carbono.
pub fn scaled_masses(graph: &MolGraph) -> Vec<f64> {
    graph.atoms
         .iter()
         .map(|a| element::by_number(a.atomic_number).map(|e| e.atomic_weight).unwrap_or(0.0) / CARBON_WEIGHT)
         .collect()
}

pub fn polarizabilities(graph: &MolGraph) -> Vec<f64> {
    graph.atoms
         .iter()
         .map(|a| element::by_number(a.atomic_number).map(|e| e.polarizability).unwrap_or(0.0))
         .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles;

    fn prepared(smi: &str) -> MolGraph {
        let mut g = smiles::parse(smi).unwrap();
        prepare::prepare(&mut g).unwrap();
        g
    }

    #[test]
    fn geometric_descriptors_need_3d() {
        let g = prepared("CCO");
        assert_eq!(require_3d(&g), Err(EngineError::Compute("requires 3D coordinates".into())));
    }

    #[test]
    fn benzene_counts() {
        let g = prepared("C1=CC=CC=C1");
        assert!((molecular_weight(&g) - 78.114).abs() < 1e-3);
        assert_eq!(atom_count(&g), 12);
        assert_eq!(bond_count(&g), 12);
        assert_eq!(aromatic_atom_count(&g), 6);
        assert_eq!(aromatic_bond_count(&g), 6);
        assert_eq!(rotatable_bonds(&g), 0);
        assert_eq!(tpsa(&g), 0.0);
        assert_eq!(zagreb(&g), 24.0);
        assert_eq!(wiener(&g), (27.0, 3.0));
        assert_eq!(small_rings(&g), [1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn polar_surface_and_hydrogen_bonding() {
        let ethanol = prepared("CCO");
        assert!((tpsa(&ethanol) - 20.23).abs() < 1e-9);
        assert_eq!(hbond_donors(&ethanol), 1);
        assert_eq!(hbond_acceptors(&ethanol), 1);

        let aspirin = prepared("CC(=O)Oc1ccccc1C(=O)O");
        assert!((tpsa(&aspirin) - 63.6).abs() < 1e-6);
        assert_eq!(acidic_groups(&aspirin), 1);
        assert_eq!(rotatable_bonds(&aspirin), 3);
    }

    #[test]
    fn basic_groups_skip_amides() {
        assert_eq!(basic_groups(&prepared("CCN")), 1);
        assert_eq!(basic_groups(&prepared("CC(=O)N")), 0);
        assert_eq!(basic_groups(&prepared("Nc1ccccc1")), 0);
    }

    #[test]
    fn chains_and_kappa() {
        let hexane = prepared("CCCCCC");
        assert_eq!(largest_chain(&hexane), 6);
        assert_eq!(longest_aliphatic_chain(&hexane), 6);
        let k = kappa_shape(&hexane);
        assert!((k[0] - 6.0).abs() < 1e-9);
        assert_eq!(carbon_types(&hexane), [0, 0, 0, 0, 0, 2, 4, 0, 0]);
        assert_eq!(petitjean_number(&hexane), Some(2.0 / 3.0));
    }

    #[test]
    fn single_atom_has_no_petitjean_number() {
        let methane = prepared("C");
        assert_eq!(petitjean_number(&methane), None);
        assert!(petitjean_topological_shape(&methane).is_nan());
        assert_eq!(vertex_adjacency_magnitude(&methane), 0.0);
    }

    #[test]
    fn autocorrelation_lag_zero_is_sum_of_squares() {
        let g = prepared("CO");
        let w = scaled_masses(&g);
        let ac = autocorrelation(&g, &w);
        assert_eq!(ac.len(), AUTOCORRELATION_LAGS);
        assert!((ac[0] - (w[0] * w[0] + w[1] * w[1])).abs() < 1e-12);
        assert!((ac[1] - w[0] * w[1]).abs() < 1e-12);
        assert_eq!(ac[2], 0.0);
    }

    #[test]
    fn framework_fraction_of_toluene() {
        let g = prepared("Cc1ccccc1");
        assert!((framework_fraction(&g) - 6.0 / 7.0).abs() < 1e-9);
        assert_eq!(framework_fraction(&prepared("CCO")), 0.0);
    }
}
