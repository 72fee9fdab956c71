//! Grafo molecular propiedad del motor.
//!
//! El resto del sistema lo trata como un handle opaco: sólo el motor lo
//! construye (parser), lo muta (layout / preparación) y lo consulta
//! (descriptores, molfile, depicción).
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribución a la valencia (aromático cuenta 1.5).
    pub fn as_f64(self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }

    /// Código de tipo de enlace MDL.
    pub fn mdl_code(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
            BondOrder::Aromatic => 4,
        }
    }

    pub fn is_pi(self) -> bool {
        !matches!(self, BondOrder::Single)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hybridization {
    #[default]
    Unknown,
    Sp,
    Sp2,
    Sp3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub atomic_number: u8,
    pub charge: i8,
    pub isotope: Option<u16>,
    pub aromatic: bool,
    /// Hidrógenos implícitos.
    pub hydrogens: u8,
    /// Átomo escrito entre corchetes: su conteo de H es explícito.
    pub bracket: bool,
    pub hybridization: Hybridization,
    pub x: f64,
    pub y: f64,
}

impl Atom {
    pub fn new(atomic_number: u8) -> Self {
        Self { atomic_number,
               charge: 0,
               isotope: None,
               aromatic: false,
               hydrogens: 0,
               bracket: false,
               hybridization: Hybridization::Unknown,
               x: 0.0,
               y: 0.0 }
    }

    pub fn symbol(&self) -> &'static str {
        element::by_number(self.atomic_number).map(|e| e.symbol).unwrap_or("*")
    }

    pub fn is_carbon(&self) -> bool {
        self.atomic_number == 6
    }

    pub fn is_hetero(&self) -> bool {
        !matches!(self.atomic_number, 1 | 6)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn other(&self, atom: usize) -> usize {
        if self.a == atom { self.b } else { self.a }
    }
}

/// Grafo molecular con lista de adyacencia `(vecino, índice de enlace)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MolGraph {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    adjacency: Vec<Vec<(usize, usize)>>,
    /// Coordenadas 2D asignadas por `layout`.
    pub has_coordinates: bool,
    /// Tipado atómico aplicado por `prepare`.
    pub prepared: bool,
}

impl MolGraph {
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        let mut adjacency = vec![Vec::new(); atoms.len()];
        for (bi, bond) in bonds.iter().enumerate() {
            adjacency[bond.a].push((bond.b, bi));
            adjacency[bond.b].push((bond.a, bi));
        }
        Self { atoms, bonds, adjacency, has_coordinates: false, prepared: false }
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn adjacency(&self, atom: usize) -> &[(usize, usize)] {
        &self.adjacency[atom]
    }

    pub fn neighbors(&self, atom: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[atom].iter().map(|&(n, _)| n)
    }

    pub fn degree(&self, atom: usize) -> usize {
        self.adjacency[atom].len()
    }

    pub fn bond_between(&self, a: usize, b: usize) -> Option<&Bond> {
        self.adjacency[a].iter().find(|&&(n, _)| n == b).map(|&(_, bi)| &self.bonds[bi])
    }

    /// Suma de órdenes de enlace; los aromáticos se redondean hacia arriba
    /// en conjunto (benceno: 1.5 + 1.5 = 3).
    pub fn bond_order_sum(&self, atom: usize) -> u8 {
        let sum: f64 = self.adjacency[atom].iter().map(|&(_, bi)| self.bonds[bi].order.as_f64()).sum();
        sum.ceil() as u8
    }

    pub fn total_hydrogens(&self) -> usize {
        self.atoms.iter().map(|a| a.hydrogens as usize).sum()
    }

    /// Matriz de distancias topológicas (BFS); `usize::MAX` si no conectados.
    pub fn distance_matrix(&self) -> Vec<Vec<usize>> {
        let n = self.atom_count();
        let mut dist = vec![vec![usize::MAX; n]; n];
        for start in 0..n {
            dist[start][start] = 0;
            let mut queue = VecDeque::from([start]);
            while let Some(cur) = queue.pop_front() {
                for &(next, _) in &self.adjacency[cur] {
                    if dist[start][next] == usize::MAX {
                        dist[start][next] = dist[start][cur] + 1;
                        queue.push_back(next);
                    }
                }
            }
        }
        dist
    }

    /// Componentes conexas como listas de índices de átomo.
    pub fn components(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.atom_count()];
        let mut out = Vec::new();
        for start in 0..self.atom_count() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut members = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(cur) = queue.pop_front() {
                for &(next, _) in &self.adjacency[cur] {
                    if !seen[next] {
                        seen[next] = true;
                        members.push(next);
                        queue.push_back(next);
                    }
                }
            }
            out.push(members);
        }
        out
    }
}
