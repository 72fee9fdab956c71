//! Ejecución por lotes de todos los descriptores del registro.
//!
//! Cada descriptor se calcula aislado: un fallo (o un pánico del motor) se
//! convierte en una entrada `"Error"` visible y el lote continúa. Sólo los
//! descriptores que el motor declara no disponibles se omiten.

use std::panic::{self, AssertUnwindSafe};

use chem_domain::{DescriptorResult, DescriptorSpec};
use rayon::prelude::*;

use crate::chemistry::ChemistryEngine;
use crate::errors::ComputeError;
use crate::formatter::format_value;
use crate::registry::Registry;

pub struct DescriptorExecutor<'a, E: ChemistryEngine> {
    engine: &'a E,
    registry: &'a Registry,
    parallel: bool,
}

impl<'a, E: ChemistryEngine> DescriptorExecutor<'a, E> {
    pub fn new(engine: &'a E, registry: &'a Registry) -> Self {
        Self { engine,
               registry,
               parallel: false }
    }

    /// Calcula los descriptores en el pool de rayon. El orden de salida
    /// sigue siendo el del registro.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Prepara el grafo (sin abortar si falla) y calcula cada descriptor en
    /// orden de registro.
    pub fn run(&self, graph: &mut E::Graph) -> Vec<DescriptorResult> {
        if let Err(e) = self.engine.prepare(graph) {
            log::warn!("graph preparation failed, computing on unprepared graph: {e}");
        }
        let graph: &E::Graph = graph;
        let specs: Vec<&DescriptorSpec> = self.registry.list().collect();
        let results: Vec<Option<DescriptorResult>> = if self.parallel {
            specs.par_iter().map(|spec| self.compute_one(graph, spec)).collect()
        } else {
            specs.iter().map(|spec| self.compute_one(graph, spec)).collect()
        };
        results.into_iter().flatten().collect()
    }

    /// `None` si el descriptor no está disponible en este motor.
    fn compute_one(&self, graph: &E::Graph, spec: &DescriptorSpec) -> Option<DescriptorResult> {
        if !self.engine.supports(spec.kind) {
            log::debug!("descriptor {} unavailable, skipped", spec.id());
            return None;
        }
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.engine.compute(graph, spec.kind)));
        match outcome {
            Ok(Ok(value)) => {
                let formatted = format_value(&value);
                log::debug!("descriptor {} = {}", spec.id(), formatted);
                Some(DescriptorResult::new(spec, formatted))
            }
            Ok(Err(ComputeError::Unavailable)) => {
                log::debug!("descriptor {} unavailable, skipped", spec.id());
                None
            }
            Ok(Err(ComputeError::Failed(msg))) => {
                log::warn!("descriptor {} failed: {}", spec.id(), msg);
                Some(DescriptorResult::failed(spec, &msg))
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                log::warn!("descriptor {} panicked: {}", spec.id(), msg);
                Some(DescriptorResult::failed(spec, &msg))
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineFailure;
    use chem_domain::{DescriptorKind, DescriptorValue};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Motor de prueba: todo vale 1.0 salvo las excepciones configuradas.
    #[derive(Default)]
    struct ScriptedEngine {
        failing: Vec<DescriptorKind>,
        unavailable: Vec<DescriptorKind>,
        panicking: Vec<DescriptorKind>,
        fail_prepare: bool,
        prepared: AtomicUsize,
    }

    impl ChemistryEngine for ScriptedEngine {
        type Graph = ();

        fn parse(&self, _smiles: &str) -> Result<(), EngineFailure> {
            Ok(())
        }
        fn layout(&self, _graph: &mut ()) -> Result<(), EngineFailure> {
            Ok(())
        }
        fn prepare(&self, _graph: &mut ()) -> Result<(), EngineFailure> {
            self.prepared.fetch_add(1, Ordering::SeqCst);
            if self.fail_prepare {
                Err(EngineFailure("bad valence".into()))
            } else {
                Ok(())
            }
        }
        fn depict(&self, _graph: &()) -> Result<Vec<u8>, EngineFailure> {
            Ok(vec![])
        }
        fn molfile(&self, _graph: &()) -> Result<String, EngineFailure> {
            Ok(String::new())
        }
        fn supports(&self, kind: DescriptorKind) -> bool {
            !self.unavailable.contains(&kind)
        }
        fn compute(&self, _graph: &(), kind: DescriptorKind) -> Result<DescriptorValue, ComputeError> {
            if self.panicking.contains(&kind) {
                panic!("index out of range");
            }
            if self.failing.contains(&kind) {
                return Err(ComputeError::Failed("overflow".into()));
            }
            Ok(DescriptorValue::Real(1.0))
        }
    }

    #[test]
    fn one_failure_among_n_keeps_cardinality() {
        let engine = ScriptedEngine { failing: vec![DescriptorKind::Tpsa],
                                      ..Default::default() };
        let registry = Registry::new();
        let results = DescriptorExecutor::new(&engine, &registry).run(&mut ());
        assert_eq!(results.len(), registry.len());
        let errors: Vec<&DescriptorResult> = results.iter().filter(|r| r.value == "Error").collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].id, DescriptorKind::Tpsa.id());
        assert_eq!(errors[0].description, "Failed to calculate: overflow");
        assert_eq!(errors[0].display_name, "Topological Polar Surface Area");
    }

    #[test]
    fn unavailable_descriptors_are_skipped() {
        let engine = ScriptedEngine { unavailable: vec![DescriptorKind::Bcut, DescriptorKind::XLogP],
                                      ..Default::default() };
        let registry = Registry::new();
        let results = DescriptorExecutor::new(&engine, &registry).run(&mut ());
        assert_eq!(results.len(), registry.len() - 2);
        assert!(results.iter().all(|r| r.id != DescriptorKind::Bcut.id()));
        assert!(results.iter().all(|r| r.value == "1.0000"));
    }

    #[test]
    fn panics_become_error_entries() {
        let engine = ScriptedEngine { panicking: vec![DescriptorKind::Weight],
                                      ..Default::default() };
        let registry = Registry::new();
        let results = DescriptorExecutor::new(&engine, &registry).run(&mut ());
        assert_eq!(results.len(), registry.len());
        let weight = results.iter().find(|r| r.id == DescriptorKind::Weight.id()).unwrap();
        assert_eq!(weight.value, "Error");
        assert_eq!(weight.description, "Failed to calculate: index out of range");
    }

    #[test]
    fn preparation_failure_is_not_fatal() {
        let engine = ScriptedEngine { fail_prepare: true,
                                      ..Default::default() };
        let registry = Registry::new();
        let results = DescriptorExecutor::new(&engine, &registry).run(&mut ());
        assert_eq!(engine.prepared.load(Ordering::SeqCst), 1);
        assert_eq!(results.len(), registry.len());
    }

    #[test]
    fn parallel_run_preserves_registry_order() {
        let engine = ScriptedEngine { failing: vec![DescriptorKind::ChiPath],
                                      unavailable: vec![DescriptorKind::Mde],
                                      ..Default::default() };
        let registry = Registry::new();
        let sequential = DescriptorExecutor::new(&engine, &registry).run(&mut ());
        let parallel = DescriptorExecutor::new(&engine, &registry).parallel(true).run(&mut ());
        assert_eq!(sequential, parallel);
        let expected: Vec<&str> = registry.list().map(|s| s.id()).filter(|id| *id != DescriptorKind::Mde.id()).collect();
        let got: Vec<&str> = parallel.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, expected);
    }
}
