//! Frontera con la biblioteca química.
//!
//! El core nunca manipula átomos ni enlaces: recibe un grafo opaco
//! (`Graph`) del motor y se lo devuelve en cada llamada. Cualquier
//! implementación de `ChemistryEngine` sirve, sea nativa o externa.

use chem_domain::{DescriptorKind, DescriptorValue};

use crate::errors::{ComputeError, EngineFailure};

pub trait ChemistryEngine: Send + Sync {
    /// Grafo molecular propiedad del motor.
    type Graph: Send + Sync;

    /// SMILES -> grafo. Falla con entradas sintácticamente inválidas.
    fn parse(&self, smiles: &str) -> Result<Self::Graph, EngineFailure>;

    /// Asigna coordenadas 2D en sitio.
    fn layout(&self, graph: &mut Self::Graph) -> Result<(), EngineFailure>;

    /// Tipado atómico y normalización de hidrógenos. Un fallo aquí no es
    /// fatal para quien llama.
    fn prepare(&self, graph: &mut Self::Graph) -> Result<(), EngineFailure>;

    /// Imagen 2D del grafo ya posicionado.
    fn depict(&self, graph: &Self::Graph) -> Result<Vec<u8>, EngineFailure>;

    /// Serialización MDL molfile del grafo ya posicionado.
    fn molfile(&self, graph: &Self::Graph) -> Result<String, EngineFailure>;

    /// Si el motor sabe calcular `kind`. Los no soportados se omiten del
    /// resultado.
    fn supports(&self, kind: DescriptorKind) -> bool;

    fn compute(&self, graph: &Self::Graph, kind: DescriptorKind) -> Result<DescriptorValue, ComputeError>;
}
