//! `ChemistryEngine` sobre el motor nativo.

mod kinds;

use chem_core::{ChemistryEngine, ComputeError, EngineFailure};
use chem_domain::{DescriptorKind, DescriptorValue};
use chemengine::{Canvas, ChemEngine, EngineError, MolGraph};

pub use kinds::{is_available, UNAVAILABLE};

#[derive(Debug, Clone, Copy, Default)]
pub struct NativeEngine {
    inner: ChemEngine,
}

impl NativeEngine {
    /// Motor que dibuja sobre un lienzo de `width`×`height` píxeles.
    pub fn new(width: u32, height: u32) -> Self {
        Self { inner: ChemEngine::new(Canvas { width, height }) }
    }

    pub fn canvas(&self) -> Canvas {
        self.inner.canvas()
    }
}

fn failure(e: EngineError) -> EngineFailure {
    EngineFailure(e.message().to_string())
}

impl ChemistryEngine for NativeEngine {
    type Graph = MolGraph;

    fn parse(&self, smiles: &str) -> Result<MolGraph, EngineFailure> {
        self.inner.parse(smiles).map_err(failure)
    }

    fn layout(&self, graph: &mut MolGraph) -> Result<(), EngineFailure> {
        self.inner.layout(graph).map_err(failure)
    }

    fn prepare(&self, graph: &mut MolGraph) -> Result<(), EngineFailure> {
        self.inner.prepare(graph).map_err(failure)
    }

    fn depict(&self, graph: &MolGraph) -> Result<Vec<u8>, EngineFailure> {
        self.inner.depict(graph).map_err(failure)
    }

    fn molfile(&self, graph: &MolGraph) -> Result<String, EngineFailure> {
        self.inner.molfile(graph, "").map_err(failure)
    }

    fn supports(&self, kind: DescriptorKind) -> bool {
        is_available(kind)
    }

    fn compute(&self, graph: &MolGraph, kind: DescriptorKind) -> Result<DescriptorValue, ComputeError> {
        kinds::compute(graph, kind)
    }
}
