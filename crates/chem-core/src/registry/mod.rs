//! Registro de descriptores: catálogo ordenado, inmutable tras construirse.
//!
//! El orden de iteración es el orden del catálogo y define el orden de los
//! resultados de cada molécula. Las consultas concurrentes no requieren
//! sincronización: nada se muta después de `Registry::new`.

mod catalog;
pub mod naming;

use chem_domain::{DescriptorKind, DescriptorSpec};
use indexmap::IndexMap;
use once_cell::sync::Lazy;

pub use naming::{derive_description, derive_display_name};

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    log::debug!("descriptor registry initialised with {} entries", registry.len());
    registry
});

#[derive(Debug, Clone)]
pub struct Registry {
    entries: IndexMap<&'static str, DescriptorSpec>,
}

impl Registry {
    /// Construye el catálogo completo. Para una molécula concreta, preferir
    /// `Registry::global()`.
    pub fn new() -> Self {
        let entries = DescriptorKind::ALL.iter()
                                         .map(|&kind| (kind.id(), Self::spec_for(kind)))
                                         .collect();
        Self { entries }
    }

    /// Instancia de proceso, inicializada una sola vez.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    fn spec_for(kind: DescriptorKind) -> DescriptorSpec {
        let display_name = catalog::name_override(kind).map(str::to_string)
                                                       .unwrap_or_else(|| derive_display_name(kind.class_name()));
        let description = catalog::description_override(kind).map(str::to_string)
                                                              .unwrap_or_else(|| derive_description(&display_name));
        DescriptorSpec::new(kind, display_name, description)
    }

    /// Todas las entradas en orden de catálogo.
    pub fn list(&self) -> impl ExactSizeIterator<Item = &DescriptorSpec> + '_ {
        self.entries.values()
    }

    pub fn get(&self, id: &str) -> Option<&DescriptorSpec> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_and_size() {
        let reg = Registry::new();
        assert_eq!(reg.len(), 43);
        let kinds: Vec<DescriptorKind> = reg.list().map(|s| s.kind).collect();
        assert_eq!(kinds, DescriptorKind::ALL);
        assert_eq!(reg.list().last().map(|s| s.kind), Some(DescriptorKind::ZagrebIndex));
    }

    #[test]
    fn overrides_take_precedence_over_derivation() {
        let reg = Registry::global();
        let weight = reg.get(DescriptorKind::Weight.id()).unwrap();
        assert_eq!(weight.display_name, "Molecular Weight");
        assert_eq!(weight.description, "Calculates the molecular weight");
        assert_eq!(reg.get(DescriptorKind::Fmf.id()).unwrap().display_name, "FMF Descriptor");
    }

    #[test]
    fn derived_entries() {
        let reg = Registry::global();
        let bcut = reg.get(DescriptorKind::Bcut.id()).unwrap();
        assert_eq!(bcut.display_name, "BCUT");
        // BCUT tiene descripción propia aunque no nombre propio.
        assert!(bcut.description.starts_with("Eigenvalue-based"));
        let wiener = reg.get(DescriptorKind::WienerNumbers.id()).unwrap();
        assert_eq!(wiener.display_name, "Wiener Numbers");
        assert_eq!(wiener.description, "Descriptor that calculates Wiener Numbers properties");
    }

    #[test]
    fn unknown_id_is_absent() {
        assert!(Registry::global().get("org.example.Nope").is_none());
    }
}
