//! Percepción de anillos: conjunto de anillos más pequeños (SSSR) por BFS
//! sobre cada enlace de anillo.
use std::collections::VecDeque;

use crate::core::MolGraph;

/// Átomos que pertenecen a algún ciclo (poda iterativa de terminales).
pub fn ring_atoms(graph: &MolGraph) -> Vec<bool> {
    let n = graph.atom_count();
    let mut degree: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
    let mut removed = vec![false; n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| degree[i] <= 1).collect();
    while let Some(i) = queue.pop_front() {
        if removed[i] {
            continue;
        }
        removed[i] = true;
        for j in graph.neighbors(i) {
            if !removed[j] {
                degree[j] -= 1;
                if degree[j] <= 1 {
                    queue.push_back(j);
                }
            }
        }
    }
    removed.into_iter().map(|r| !r).collect()
}

/// SSSR ordenado por tamaño; cada anillo es la secuencia cíclica de átomos.
pub fn sssr(graph: &MolGraph) -> Vec<Vec<usize>> {
    let n = graph.atom_count();
    let expected = graph.bond_count() as isize - n as isize + graph.components().len() as isize;
    if expected <= 0 {
        return Vec::new();
    }
    let in_ring = ring_atoms(graph);
    let mut rings: Vec<Vec<usize>> = Vec::new();
    for (bi, bond) in graph.bonds.iter().enumerate() {
        if !in_ring[bond.a] || !in_ring[bond.b] {
            continue;
        }
        if let Some(mut ring) = shortest_path_avoiding(graph, bond.a, bond.b, bi, &in_ring) {
            normalize(&mut ring);
            if !rings.contains(&ring) {
                rings.push(ring);
            }
        }
    }
    rings.sort_by_key(|r| r.len());
    rings.truncate(expected as usize);
    rings
}

/// Índices de enlace contenidos en algún anillo del SSSR.
pub fn ring_bonds(graph: &MolGraph, rings: &[Vec<usize>]) -> Vec<bool> {
    let mut member = vec![false; graph.bond_count()];
    for ring in rings {
        for k in 0..ring.len() {
            let (a, b) = (ring[k], ring[(k + 1) % ring.len()]);
            if let Some(&(_, bi)) = graph.adjacency(a).iter().find(|&&(nb, _)| nb == b) {
                member[bi] = true;
            }
        }
    }
    member
}

fn shortest_path_avoiding(graph: &MolGraph, from: usize, to: usize, skip_bond: usize, in_ring: &[bool]) -> Option<Vec<usize>> {
    let n = graph.atom_count();
    let mut parent = vec![usize::MAX; n];
    let mut seen = vec![false; n];
    seen[from] = true;
    let mut queue = VecDeque::from([from]);
    while let Some(cur) = queue.pop_front() {
        if cur == to {
            let mut path = vec![to];
            let mut node = to;
            while node != from {
                node = parent[node];
                path.push(node);
            }
            path.reverse();
            return Some(path);
        }
        for &(next, bi) in graph.adjacency(cur) {
            if bi == skip_bond || seen[next] || !in_ring[next] {
                continue;
            }
            seen[next] = true;
            parent[next] = cur;
            queue.push_back(next);
        }
    }
    None
}

/// Rota para empezar en el menor índice y elige la dirección
/// lexicográficamente menor, de modo que un mismo ciclo compare igual.
fn normalize(ring: &mut Vec<usize>) {
    let Some(min_pos) = ring.iter().enumerate().min_by_key(|&(_, &v)| v).map(|(i, _)| i) else {
        return;
    };
    ring.rotate_left(min_pos);
    if ring.len() > 2 && ring[ring.len() - 1] < ring[1] {
        ring[1..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smiles;

    #[test]
    fn naphthalene_has_two_six_rings() {
        let g = smiles::parse("c1ccc2ccccc2c1").unwrap();
        let rings = sssr(&g);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn chains_have_no_rings() {
        let g = smiles::parse("CCCC(C)O").unwrap();
        assert!(sssr(&g).is_empty());
        assert!(ring_atoms(&g).iter().all(|r| !r));
    }

    #[test]
    fn ring_bonds_exclude_substituents() {
        let g = smiles::parse("C1CCCCC1C").unwrap();
        let rings = sssr(&g);
        let member = ring_bonds(&g, &rings);
        assert_eq!(member.iter().filter(|m| **m).count(), 6);
    }
}
