//! Motor químico nativo.
//!
//! Cubre todo lo que el pipeline necesita de una biblioteca química:
//! parseo de SMILES, coordenadas 2D, escritura de molfile V2000, depicción
//! SVG, preparación (aromaticidad, hidrógenos, hibridación) y el cálculo de
//! descriptores 2D sobre el grafo resultante.
use thiserror::Error;

pub mod core;
pub mod depict;
pub mod descriptors;
pub mod element;
pub mod layout;
pub mod molfile;
pub mod prepare;
pub mod rings;
pub mod smiles;

pub use core::{Atom, Bond, BondOrder, Hybridization, MolGraph};
pub use depict::Canvas;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("SMILES inválido: {0}")]
    Parse(String),
    #[error("Error generando coordenadas 2D: {0}")]
    Layout(String),
    #[error("Valencia inválida: {0}")]
    Valence(String),
    #[error("Error de renderizado: {0}")]
    Render(String),
    #[error("Error calculando descriptor: {0}")]
    Compute(String),
}

impl EngineError {
    /// Mensaje sin el prefijo de la variante.
    pub fn message(&self) -> &str {
        match self {
            EngineError::Parse(m)
            | EngineError::Layout(m)
            | EngineError::Valence(m)
            | EngineError::Render(m)
            | EngineError::Compute(m) => m,
        }
    }
}

/// Fachada del motor: agrupa las etapas con la configuración de dibujo.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChemEngine {
    canvas: Canvas,
}

impl ChemEngine {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn parse(&self, smiles: &str) -> Result<MolGraph, EngineError> {
        smiles::parse(smiles)
    }

    pub fn layout(&self, graph: &mut MolGraph) -> Result<(), EngineError> {
        layout::layout(graph)
    }

    pub fn prepare(&self, graph: &mut MolGraph) -> Result<(), EngineError> {
        prepare::prepare(graph)
    }

    pub fn molfile(&self, graph: &MolGraph, title: &str) -> Result<String, EngineError> {
        molfile::write_v2000(graph, title)
    }

    pub fn depict(&self, graph: &MolGraph) -> Result<Vec<u8>, EngineError> {
        depict::render_svg(graph, self.canvas)
    }
}
