//! Escritura MDL Molfile V2000 (CTAB).
use std::fmt::Write as _;

use crate::core::MolGraph;
use crate::EngineError;

/// Serializa el grafo con sus coordenadas 2D. `title` va en la primera
/// línea del encabezado.
pub fn write_v2000(graph: &MolGraph, title: &str) -> Result<String, EngineError> {
    if graph.atom_count() > 999 || graph.bond_count() > 999 {
        return Err(EngineError::Render("V2000 supports at most 999 atoms and bonds".into()));
    }
    let mut out = String::new();
    render(graph, title, &mut out).map_err(|e| EngineError::Render(format!("molfile: {e}")))?;
    Ok(out)
}

fn render(graph: &MolGraph, title: &str, out: &mut String) -> std::fmt::Result {
    let dim = if graph.has_coordinates { "2D" } else { "  " };
    writeln!(out, "{}", title.lines().next().unwrap_or(""))?;
    writeln!(out, "  chemdesc          {dim}")?;
    writeln!(out)?;
    writeln!(out, "{:>3}{:>3}  0  0  0  0  0  0  0  0999 V2000", graph.atom_count(), graph.bond_count())?;

    for atom in &graph.atoms {
        writeln!(out,
                 "{:>10.4}{:>10.4}{:>10.4} {:<3} 0{:>3}  0  0  0  0  0  0  0  0  0  0",
                 atom.x,
                 atom.y,
                 0.0,
                 atom.symbol(),
                 charge_code(atom.charge))?;
    }
    for bond in &graph.bonds {
        writeln!(out, "{:>3}{:>3}{:>3}  0  0  0  0", bond.a + 1, bond.b + 1, bond.order.mdl_code())?;
    }

    let charged: Vec<(usize, i8)> = graph.atoms
                                         .iter()
                                         .enumerate()
                                         .filter(|(_, a)| a.charge != 0)
                                         .map(|(i, a)| (i + 1, a.charge))
                                         .collect();
    for chunk in charged.chunks(8) {
        write!(out, "M  CHG{:>3}", chunk.len())?;
        for (idx, charge) in chunk {
            write!(out, " {:>3} {:>3}", idx, charge)?;
        }
        writeln!(out)?;
    }

    let isotopes: Vec<(usize, u16)> = graph.atoms
                                           .iter()
                                           .enumerate()
                                           .filter_map(|(i, a)| a.isotope.map(|iso| (i + 1, iso)))
                                           .collect();
    for chunk in isotopes.chunks(8) {
        write!(out, "M  ISO{:>3}", chunk.len())?;
        for (idx, mass) in chunk {
            write!(out, " {:>3} {:>3}", idx, mass)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "M  END")
}

/// Código de carga del bloque de átomos (obsoleto pero aún leído).
fn charge_code(charge: i8) -> u8 {
    match charge {
        3 => 1,
        2 => 2,
        1 => 3,
        -1 => 5,
        -2 => 6,
        -3 => 7,
        _ => 0,
    }
}
