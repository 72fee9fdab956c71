use chem_adapters::{JsonWireEncoder, NativeEngine, WireEncoder};
use chem_core::{MoleculePipeline, PipelineConfig, PipelineError};
use chem_domain::{DescriptorKind, DescriptorSpec, DomainError};
use serde::Serialize;

const USAGE: &str = "Uso: chem <parse|molfile|image> <SMILES> | chem descriptors [ID] [--parallel] [--all] [--width <N>] [--height <N>]";

/// Opciones comunes a todos los subcomandos.
#[derive(Debug, Default, PartialEq)]
struct Options {
    command: String,
    smiles: Option<String>,
    parallel: bool,
    all: bool,
    width: Option<u32>,
    height: Option<u32>,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let command = args.get(1)?.clone();
    let mut opts = Options { command, ..Options::default() };
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--parallel" => opts.parallel = true,
            "--all" => opts.all = true,
            "--width" => { i += 1; if i < args.len() { opts.width = args[i].parse::<u32>().ok(); } }
            "--height" => { i += 1; if i < args.len() { opts.height = args[i].parse::<u32>().ok(); } }
            other => {
                if opts.smiles.is_none() { opts.smiles = Some(other.to_string()); }
            }
        }
        i += 1;
    }
    Some(opts)
}

/// Variable de entorno numérica; un valor ilegible cuenta como ausente.
fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<u32>().ok())
}

fn pipeline_for(opts: &Options) -> MoleculePipeline<NativeEngine> {
    let width = opts.width.or_else(|| env_u32("CHEMDESC_IMAGE_WIDTH")).unwrap_or(400);
    let height = opts.height.or_else(|| env_u32("CHEMDESC_IMAGE_HEIGHT")).unwrap_or(300);
    MoleculePipeline::new(NativeEngine::new(width, height)).with_config(PipelineConfig { parallel: opts.parallel })
}

/// Código de salida por tipo de fallo: 3 entrada, 4 química, 5 interno.
fn exit_code(err: &PipelineError) -> i32 {
    match err {
        PipelineError::InvalidInput(_) => 3,
        PipelineError::Parse(_) | PipelineError::Layout(_) => 4,
        PipelineError::Render(_) => 5,
    }
}

/// Entrada del catálogo para un identificador completo.
fn lookup_spec<'a>(pipeline: &'a MoleculePipeline<NativeEngine>, id: &str) -> Result<&'a DescriptorSpec, DomainError> {
    let kind = DescriptorKind::from_id(id.trim())?;
    pipeline.descriptors()
            .into_iter()
            .find(|s| s.kind == kind)
            .ok_or_else(|| DomainError::UnknownDescriptor(id.to_string()))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => { eprintln!("[chem] error serializando salida: {e}"); std::process::exit(5); }
    }
}

fn main() {
    // Cargar .env si existe para obtener el tamaño del lienzo
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    let Some(opts) = parse_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let pipeline = pipeline_for(&opts);
    let encoder = JsonWireEncoder;

    if opts.command == "descriptors" {
        let specs = match opts.smiles.as_deref() {
            Some(id) => match lookup_spec(&pipeline, id) {
                Ok(spec) => vec![spec],
                Err(e) => { eprintln!("[chem descriptors] {e}"); std::process::exit(2); }
            },
            None if opts.all => pipeline.descriptors(),
            None => pipeline.available_descriptors(),
        };
        print_json(&encoder.encode_specs(specs));
        return;
    }

    if !matches!(opts.command.as_str(), "parse" | "molfile" | "image") {
        eprintln!("[chem] subcomando desconocido: {}", opts.command);
        eprintln!("{USAGE}");
        std::process::exit(2);
    }
    let Some(smiles) = opts.smiles.as_deref() else {
        eprintln!("Uso: chem {} <SMILES>", opts.command);
        std::process::exit(2);
    };
    let molecule = match pipeline.build(smiles) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("[chem {}] {e}", opts.command);
            std::process::exit(exit_code(&e));
        }
    };
    match opts.command.as_str() {
        "parse" => print_json(&encoder.encode_molecule(&molecule)),
        "molfile" => print!("{}", molecule.molfile()),
        _ => println!("{}", String::from_utf8_lossy(molecule.image())),
    }
}
