mod support;

use chem_core::{MoleculePipeline, PipelineConfig, PipelineError, Registry};
use chem_domain::DescriptorKind;
use support::CountingEngine;

#[test]
fn blank_input_never_reaches_the_engine() {
    let pipeline = MoleculePipeline::new(CountingEngine::default());
    for input in ["", "   ", "\t\n"] {
        let err = pipeline.build(input).unwrap_err();
        assert_eq!(err, PipelineError::InvalidInput("SMILES string is required".to_string()));
    }
    assert_eq!(pipeline.engine().calls(), 0);
}

#[test]
fn fatal_stages_short_circuit() {
    let parse = MoleculePipeline::new(CountingEngine { fail_parse: true,
                                                       ..Default::default() });
    assert!(matches!(parse.build("C1CC"), Err(PipelineError::Parse(m)) if m == "unexpected character"));
    assert_eq!(parse.engine().calls(), 1);

    let layout = MoleculePipeline::new(CountingEngine { fail_layout: true,
                                                        ..Default::default() });
    assert!(matches!(layout.build("CC"), Err(PipelineError::Layout(_))));

    let render = MoleculePipeline::new(CountingEngine { fail_depict: true,
                                                        ..Default::default() });
    assert!(matches!(render.build("CC"), Err(PipelineError::Render(_))));
}

#[test]
fn descriptors_follow_registry_order_minus_unavailable() {
    let pipeline = MoleculePipeline::new(CountingEngine::default());
    let mol = pipeline.build("  CCO ").unwrap();
    assert_eq!(mol.smiles(), "  CCO ");
    assert_eq!(mol.image(), b"CCO");

    let expected: Vec<&str> = Registry::global().list()
                                                .map(|s| s.id())
                                                .filter(|id| *id != DescriptorKind::Bcut.id() && *id != DescriptorKind::XLogP.id())
                                                .collect();
    let got: Vec<&str> = mol.descriptors().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(got, expected);

    assert_eq!(mol.descriptor(DescriptorKind::AtomCount.id()).unwrap().value, "3");
    let whim = mol.descriptor(DescriptorKind::Whim.id()).unwrap();
    assert_eq!(whim.value, "Error");
    assert_eq!(whim.description, "Failed to calculate: requires 3D coordinates");
}

#[test]
fn parallel_configuration_gives_identical_results() {
    let sequential = MoleculePipeline::new(CountingEngine::default());
    let parallel = MoleculePipeline::new(CountingEngine::default()).with_config(PipelineConfig { parallel: true });
    let a = sequential.build("c1ccccc1").unwrap();
    let b = parallel.build("c1ccccc1").unwrap();
    assert_eq!(a.descriptors(), b.descriptors());
    assert_ne!(a.id(), b.id());
}

#[test]
fn available_descriptors_hide_unsupported_kinds() {
    let pipeline = MoleculePipeline::new(CountingEngine::default());
    assert_eq!(pipeline.descriptors().len(), 43);
    let available = pipeline.available_descriptors();
    assert_eq!(available.len(), 42);
    assert!(available.iter().all(|s| s.kind != DescriptorKind::Bcut));
}

#[test]
fn image_only_skips_descriptors() {
    let pipeline = MoleculePipeline::new(CountingEngine::default());
    assert_eq!(pipeline.image(" CC ").unwrap(), b"CC".to_vec());
    assert_eq!(pipeline.engine().calls(), 3);
    assert!(matches!(pipeline.image(""), Err(PipelineError::InvalidInput(_))));
    assert_eq!(pipeline.engine().calls(), 3);
}
