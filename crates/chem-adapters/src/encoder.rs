//! Encoder Dominio → JSON de transporte
//!
//! Este módulo define `WireEncoder`, un trait para serializar entidades de
//! dominio (`chem-domain`) en el JSON que ven los clientes.
//!
//! Reglas clave:
//! - Los nombres de campo van en camelCase (`imageSvg`, `computedAt`).
//! - Los descriptores conservan el orden del registro.
//! - La imagen se entrega como texto SVG; si los bytes no son UTF-8 válido
//!   se sustituyen los caracteres inválidos.

use chem_domain::{DescriptorResult, DescriptorSpec, Molecule};
use serde::Serialize;
use serde_json::Value;

/// Vista de un descriptor calculado.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DescriptorView {
    pub id: String,
    pub name: String,
    pub value: String,
    pub description: String,
}

/// Vista de una entrada del catálogo.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpecView {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Vista completa de una molécula procesada.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeView {
    pub id: String,
    pub smiles: String,
    pub molfile: String,
    pub image_svg: String,
    pub descriptors: Vec<DescriptorView>,
    pub computed_at: String,
}

/// Contrato de serialización dominio → JSON.
pub trait WireEncoder {
    fn encode_molecule(&self, m: &Molecule) -> Value;
    fn encode_result(&self, r: &DescriptorResult) -> Value;
    fn encode_specs<'a, I>(&self, specs: I) -> Value
        where I: IntoIterator<Item = &'a DescriptorSpec>;
}

/// Implementación por defecto de `WireEncoder` basada en las vistas tipadas.
#[derive(Clone, Default)]
pub struct JsonWireEncoder;

impl JsonWireEncoder {
    pub fn molecule_view(&self, m: &Molecule) -> MoleculeView {
        MoleculeView { id: m.id().to_string(),
                       smiles: m.smiles().to_string(),
                       molfile: m.molfile().to_string(),
                       image_svg: String::from_utf8_lossy(m.image()).into_owned(),
                       descriptors: m.descriptors().iter().map(|r| self.result_view(r)).collect(),
                       computed_at: m.computed_at().to_rfc3339() }
    }

    pub fn result_view(&self, r: &DescriptorResult) -> DescriptorView {
        DescriptorView { id: r.id.clone(),
                         name: r.display_name.clone(),
                         value: r.value.clone(),
                         description: r.description.clone() }
    }

    pub fn spec_view(&self, s: &DescriptorSpec) -> SpecView {
        SpecView { id: s.id().to_string(),
                   name: s.display_name.clone(),
                   description: s.description.clone() }
    }
}

fn to_value<T: Serialize>(view: &T) -> Value {
    serde_json::to_value(view).unwrap_or_else(|e| {
                                  log::error!("wire view serialization failed: {e}");
                                  Value::Null
                              })
}

impl WireEncoder for JsonWireEncoder {
    fn encode_molecule(&self, m: &Molecule) -> Value {
        to_value(&self.molecule_view(m))
    }

    fn encode_result(&self, r: &DescriptorResult) -> Value {
        to_value(&self.result_view(r))
    }

    fn encode_specs<'a, I>(&self, specs: I) -> Value
        where I: IntoIterator<Item = &'a DescriptorSpec>
    {
        let views: Vec<SpecView> = specs.into_iter().map(|s| self.spec_view(s)).collect();
        to_value(&views)
    }
}
