//! Motor de prueba que cuenta llamadas y puede fallar en cualquier etapa.

use std::sync::atomic::{AtomicUsize, Ordering};

use chem_core::{ChemistryEngine, ComputeError, EngineFailure};
use chem_domain::{DescriptorKind, DescriptorValue};

#[derive(Default)]
pub struct CountingEngine {
    pub calls: AtomicUsize,
    pub fail_parse: bool,
    pub fail_layout: bool,
    pub fail_depict: bool,
}

impl CountingEngine {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl ChemistryEngine for CountingEngine {
    type Graph = Vec<char>;

    fn parse(&self, smiles: &str) -> Result<Vec<char>, EngineFailure> {
        self.tick();
        if self.fail_parse {
            return Err(EngineFailure("unexpected character".into()));
        }
        Ok(smiles.chars().collect())
    }

    fn layout(&self, _graph: &mut Vec<char>) -> Result<(), EngineFailure> {
        self.tick();
        if self.fail_layout {
            return Err(EngineFailure("no coordinates".into()));
        }
        Ok(())
    }

    fn prepare(&self, _graph: &mut Vec<char>) -> Result<(), EngineFailure> {
        self.tick();
        Ok(())
    }

    fn depict(&self, graph: &Vec<char>) -> Result<Vec<u8>, EngineFailure> {
        self.tick();
        if self.fail_depict {
            return Err(EngineFailure("canvas too small".into()));
        }
        Ok(graph.iter().collect::<String>().into_bytes())
    }

    fn molfile(&self, graph: &Vec<char>) -> Result<String, EngineFailure> {
        self.tick();
        Ok(format!("{}\nM  END\n", graph.iter().collect::<String>()))
    }

    fn supports(&self, kind: DescriptorKind) -> bool {
        kind != DescriptorKind::Bcut
    }

    fn compute(&self, graph: &Vec<char>, kind: DescriptorKind) -> Result<DescriptorValue, ComputeError> {
        self.tick();
        match kind {
            DescriptorKind::AtomCount => Ok(DescriptorValue::Integer(graph.len() as i64)),
            DescriptorKind::XLogP => Err(ComputeError::Unavailable),
            DescriptorKind::Whim => Err(ComputeError::Failed("requires 3D coordinates".into())),
            _ => Ok(DescriptorValue::Real(0.5)),
        }
    }
}
