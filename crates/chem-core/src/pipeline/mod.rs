//! Orquestador SMILES -> `Molecule`.
//!
//! Etapas: validación de entrada, parseo, layout 2D, derivación de imagen y
//! molfile, y lote de descriptores. Las cuatro primeras son fatales; el lote
//! absorbe sus propios fallos.

mod config;

pub use config::PipelineConfig;

use chem_domain::{DescriptorSpec, Molecule};

use crate::chemistry::ChemistryEngine;
use crate::errors::PipelineError;
use crate::executor::DescriptorExecutor;
use crate::registry::Registry;

#[derive(Debug)]
pub struct MoleculePipeline<E: ChemistryEngine> {
    engine: E,
    registry: &'static Registry,
    config: PipelineConfig,
}

impl<E: ChemistryEngine> MoleculePipeline<E> {
    /// Pipeline sobre el registro global con la configuración por defecto.
    pub fn new(engine: E) -> Self {
        Self { engine,
               registry: Registry::global(),
               config: PipelineConfig::default() }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Solo la imagen: parseo, layout y depicción, sin descriptores.
    pub fn image(&self, smiles: &str) -> Result<Vec<u8>, PipelineError> {
        let smiles = Self::validated(smiles)?;
        let mut graph = self.engine.parse(smiles).map_err(|e| PipelineError::Parse(e.0))?;
        self.engine.layout(&mut graph).map_err(|e| PipelineError::Layout(e.0))?;
        self.engine.depict(&graph).map_err(|e| PipelineError::Render(e.0))
    }

    fn validated(smiles: &str) -> Result<&str, PipelineError> {
        let smiles = smiles.trim();
        if smiles.is_empty() {
            return Err(PipelineError::InvalidInput("SMILES string is required".to_string()));
        }
        Ok(smiles)
    }

    /// Construye la molécula completa para `input`. El motor recibe la
    /// entrada sin espacios en los extremos; la molécula guarda la original.
    /// Una entrada en blanco no llega al motor.
    pub fn build(&self, input: &str) -> Result<Molecule, PipelineError> {
        let smiles = Self::validated(input)?;
        let mut graph = self.engine.parse(smiles).map_err(|e| PipelineError::Parse(e.0))?;
        self.engine.layout(&mut graph).map_err(|e| PipelineError::Layout(e.0))?;

        let image = self.engine.depict(&graph).map_err(|e| PipelineError::Render(e.0))?;
        let molfile = self.engine.molfile(&graph).map_err(|e| PipelineError::Render(e.0))?;

        let descriptors = DescriptorExecutor::new(&self.engine, self.registry).parallel(self.config.parallel)
                                                                              .run(&mut graph);
        let molecule = Molecule::new(input, molfile, image, descriptors)
            .map_err(|e| PipelineError::InvalidInput(e.to_string()))?;
        log::info!("molecule {} built from '{}' with {} descriptors",
                   molecule.id(),
                   smiles,
                   molecule.descriptors().len());
        Ok(molecule)
    }

    /// Catálogo completo, en orden de registro.
    pub fn descriptors(&self) -> Vec<&DescriptorSpec> {
        self.registry.list().collect()
    }

    /// Entradas del registro que este motor sabe calcular.
    pub fn available_descriptors(&self) -> Vec<&DescriptorSpec> {
        self.registry.list().filter(|s| self.engine.supports(s.kind)).collect()
    }
}
