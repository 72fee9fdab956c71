//! Generación de coordenadas 2D.
//!
//! Anillos como polígonos regulares, cadenas en zig-zag eligiendo la
//! dirección más libre alrededor de cada átomo, y fragmentos desconectados
//! dispuestos de izquierda a derecha. La estética no es un objetivo: basta
//! con que todo átomo reciba coordenadas finitas y distintas.
use std::collections::VecDeque;
use std::f64::consts::PI;

use crate::core::MolGraph;
use crate::{rings, EngineError};

/// Longitud de enlace en unidades de dibujo (Å aproximados).
pub const BOND_LENGTH: f64 = 1.5;

pub fn layout(graph: &mut MolGraph) -> Result<(), EngineError> {
    if graph.is_empty() {
        return Err(EngineError::Layout("molecule has no atoms".into()));
    }
    let ring_list = rings::sssr(graph);
    let mut pos: Vec<Option<(f64, f64)>> = vec![None; graph.atom_count()];
    let mut offset_x = 0.0;

    for component in graph.components() {
        let start = component[0];
        match ring_list.iter().find(|r| r.contains(&start)) {
            Some(ring) => place_ring(ring, start, (0.0, 0.0), 0.0, &mut pos),
            None => pos[start] = Some((0.0, 0.0)),
        }
        let mut queue = VecDeque::from([start]);
        let mut visited = vec![false; graph.atom_count()];
        visited[start] = true;
        while let Some(u) = queue.pop_front() {
            for v in graph.neighbors(u).collect::<Vec<_>>() {
                if pos[v].is_none() {
                    let angle = free_direction(graph, u, &pos);
                    let (ux, uy) = pos[u].unwrap_or((0.0, 0.0));
                    let target = (ux + BOND_LENGTH * angle.cos(), uy + BOND_LENGTH * angle.sin());
                    match ring_list.iter().find(|r| r.contains(&v) && r.iter().all(|&a| pos[a].is_none())) {
                        Some(ring) => place_ring(ring, v, target, angle, &mut pos),
                        None => pos[v] = Some(target),
                    }
                }
                if !visited[v] {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }

        // Desplaza el fragmento a la derecha del anterior.
        let min_x = component.iter().filter_map(|&i| pos[i]).map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = component.iter().filter_map(|&i| pos[i]).map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        for &i in &component {
            if let Some((x, y)) = pos[i] {
                pos[i] = Some((x - min_x + offset_x, y));
            }
        }
        offset_x += (max_x - min_x) + 2.0 * BOND_LENGTH;
    }

    for (atom, p) in graph.atoms.iter_mut().zip(pos) {
        let (x, y) = p.ok_or_else(|| EngineError::Layout("atom left without coordinates".into()))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(EngineError::Layout("non-finite coordinate generated".into()));
        }
        atom.x = x;
        atom.y = y;
    }
    graph.has_coordinates = true;
    Ok(())
}

/// Coloca `ring` como polígono regular con `entry` en `at`; `heading` es la
/// dirección de llegada, el centro queda más allá de `at` en esa dirección.
fn place_ring(ring: &[usize], entry: usize, at: (f64, f64), heading: f64, pos: &mut [Option<(f64, f64)>]) {
    let n = ring.len();
    let radius = BOND_LENGTH / (2.0 * (PI / n as f64).sin());
    let center = (at.0 + radius * heading.cos(), at.1 + radius * heading.sin());
    let start_angle = heading + PI;
    let first = ring.iter().position(|&a| a == entry).unwrap_or(0);
    for k in 0..n {
        let atom = ring[(first + k) % n];
        if pos[atom].is_some() {
            continue;
        }
        let theta = start_angle + 2.0 * PI * k as f64 / n as f64;
        pos[atom] = Some((center.0 + radius * theta.cos(), center.1 + radius * theta.sin()));
    }
}

/// Dirección (de 12 candidatas) que maximiza la separación angular respecto
/// a los vecinos ya colocados.
fn free_direction(graph: &MolGraph, u: usize, pos: &[Option<(f64, f64)>]) -> f64 {
    let Some((ux, uy)) = pos[u] else {
        return 0.0;
    };
    let taken: Vec<f64> = graph.neighbors(u)
                               .filter_map(|v| pos[v])
                               .map(|(vx, vy)| (vy - uy).atan2(vx - ux))
                               .collect();
    if taken.is_empty() {
        return -PI / 6.0;
    }
    let mut best = 0.0;
    let mut best_gap = f64::NEG_INFINITY;
    for k in 0..12 {
        let candidate = k as f64 * PI / 6.0 - PI / 6.0;
        let gap = taken.iter().map(|&t| angular_distance(candidate, t)).fold(f64::INFINITY, f64::min);
        if gap > best_gap + 1e-9 {
            best_gap = gap;
            best = candidate;
        }
    }
    best
}

fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(2.0 * PI);
    d.min(2.0 * PI - d)
}
