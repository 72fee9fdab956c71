//! Depicción 2D en SVG a partir de las coordenadas del layout.
use std::fmt::Write as _;

use crate::core::{BondOrder, MolGraph};
use crate::EngineError;

/// Tamaño del lienzo en píxeles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 400, height: 300 }
    }
}

const MARGIN: f64 = 30.0;
const LINE_GAP: f64 = 4.0;

pub fn render_svg(graph: &MolGraph, canvas: Canvas) -> Result<Vec<u8>, EngineError> {
    if !graph.has_coordinates {
        return Err(EngineError::Render("molecule has no 2D coordinates".into()));
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(EngineError::Render("canvas must have non-zero size".into()));
    }
    let mut svg = String::new();
    draw(graph, canvas, &mut svg).map_err(|e| EngineError::Render(format!("svg: {e}")))?;
    Ok(svg.into_bytes())
}

fn draw(graph: &MolGraph, canvas: Canvas, svg: &mut String) -> std::fmt::Result {
    let (w, h) = (canvas.width as f64, canvas.height as f64);
    let xs = graph.atoms.iter().map(|a| a.x);
    let ys = graph.atoms.iter().map(|a| a.y);
    let (min_x, max_x) = xs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let (min_y, max_y) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span_x = (max_x - min_x).max(1e-6);
    let span_y = (max_y - min_y).max(1e-6);
    let scale = ((w - 2.0 * MARGIN) / span_x).min((h - 2.0 * MARGIN) / span_y).clamp(1.0, 40.0);
    let off_x = (w - span_x * scale) / 2.0;
    let off_y = (h - span_y * scale) / 2.0;
    // El eje y del SVG crece hacia abajo.
    let project = |x: f64, y: f64| (off_x + (x - min_x) * scale, h - (off_y + (y - min_y) * scale));

    writeln!(svg,
             r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
             canvas.width, canvas.height, canvas.width, canvas.height)?;
    writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
    writeln!(svg, r#"<g stroke="black" stroke-width="1.6" stroke-linecap="round">"#)?;
    for bond in &graph.bonds {
        let (a, b) = (&graph.atoms[bond.a], &graph.atoms[bond.b]);
        let (x1, y1) = project(a.x, a.y);
        let (x2, y2) = project(b.x, b.y);
        let len = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt().max(1e-6);
        let (nx, ny) = (-(y2 - y1) / len * LINE_GAP, (x2 - x1) / len * LINE_GAP);
        match bond.order {
            BondOrder::Single => line(svg, x1, y1, x2, y2, "")?,
            BondOrder::Double => {
                line(svg, x1 + nx / 2.0, y1 + ny / 2.0, x2 + nx / 2.0, y2 + ny / 2.0, "")?;
                line(svg, x1 - nx / 2.0, y1 - ny / 2.0, x2 - nx / 2.0, y2 - ny / 2.0, "")?;
            }
            BondOrder::Triple => {
                line(svg, x1, y1, x2, y2, "")?;
                line(svg, x1 + nx, y1 + ny, x2 + nx, y2 + ny, "")?;
                line(svg, x1 - nx, y1 - ny, x2 - nx, y2 - ny, "")?;
            }
            BondOrder::Aromatic => {
                line(svg, x1, y1, x2, y2, "")?;
                line(svg, x1 + nx, y1 + ny, x2 + nx, y2 + ny, r#" stroke-dasharray="3,3""#)?;
            }
        }
    }
    writeln!(svg, "</g>")?;

    for atom in graph.atoms.iter().filter(|a| !a.is_carbon() || a.charge != 0 || a.isotope.is_some()) {
        let (x, y) = project(atom.x, atom.y);
        let mut label = String::new();
        if let Some(iso) = atom.isotope {
            write!(label, "{iso}")?;
        }
        label.push_str(atom.symbol());
        match atom.hydrogens {
            0 => {}
            1 => label.push('H'),
            n => write!(label, "H{n}")?,
        }
        match atom.charge {
            0 => {}
            1 => label.push('+'),
            -1 => label.push('-'),
            c if c > 0 => write!(label, "{c}+")?,
            c => write!(label, "{}-", c.unsigned_abs())?,
        }
        writeln!(svg, r#"<circle cx="{x:.2}" cy="{y:.2}" r="8" fill="white"/>"#)?;
        writeln!(svg,
                 r#"<text x="{x:.2}" y="{y:.2}" font-family="sans-serif" font-size="13" text-anchor="middle" dominant-baseline="central" fill="{}">{label}</text>"#,
                 atom_colour(atom.atomic_number))?;
    }
    writeln!(svg, "</svg>")
}

fn line(svg: &mut String, x1: f64, y1: f64, x2: f64, y2: f64, extra: &str) -> std::fmt::Result {
    writeln!(svg, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}"{extra}/>"#)
}

fn atom_colour(atomic_number: u8) -> &'static str {
    match atomic_number {
        7 => "#3050F8",
        8 => "#FF0D0D",
        9 | 17 => "#1FA01F",
        15 => "#FF8000",
        16 => "#C8A000",
        35 => "#A62929",
        53 => "#940094",
        _ => "black",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layout, smiles};

    #[test]
    fn renders_svg_document_with_bonds_and_labels() {
        let mut g = smiles::parse("OC(=O)c1ccccc1").unwrap();
        layout::layout(&mut g).unwrap();
        let bytes = render_svg(&g, Canvas::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<svg"));
        assert!(text.trim_end().ends_with("</svg>"));
        assert!(text.contains(">OH</text>"));
        assert!(text.contains("stroke-dasharray"));
        assert!(text.contains(r#"width="400""#));
    }

    #[test]
    fn requires_coordinates() {
        let g = smiles::parse("CC").unwrap();
        assert!(matches!(render_svg(&g, Canvas::default()), Err(EngineError::Render(_))));
    }

    #[test]
    fn extreme_charges_render_their_magnitude() {
        let mut g = smiles::parse("[O-]").unwrap();
        layout::layout(&mut g).unwrap();
        g.atoms[0].charge = i8::MIN;
        let text = String::from_utf8(render_svg(&g, Canvas::default()).unwrap()).unwrap();
        assert!(text.contains(">O128-</text>"));
    }
}
