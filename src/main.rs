use clap::{Args, Parser, Subcommand};
use floorplan::pipeline::{ErrorEnvelope, ExecutionMode, PipelineConfig, RenderRequest};
use floorplan::{health, PageSize, PipelineBuilder, PipelineError};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Validate floor plans and render them as SVG previews and printable PDFs.
#[derive(Parser, Debug)]
#[command(name = "floorplan", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a plan (or a `{"plan": ..., "px_per_m": ...}` request) to SVG and PDF.
    Render(RenderArgs),
    /// Check a plan and print `ok` or the first problem found.
    Validate {
        /// Path to the plan JSON
        input: PathBuf,
    },
    /// Print the service health report.
    Health,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Path to the plan or request JSON
    input: PathBuf,

    /// Preview density in pixels per meter (overrides the request and FLOORPLAN_PX_PER_M)
    #[arg(long)]
    px_per_m: Option<u32>,

    /// Where to write the SVG preview [default: <input>.svg]
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Where to write the PDF [default: <input>.pdf]
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Print `{"svg": ..., "pdf_base64": ...}` to stdout instead of writing files
    #[arg(long)]
    envelope: bool,

    /// Paper size: a4, letter or legal
    #[arg(long)]
    page_size: Option<PageSize>,

    /// Render the two artifacts one after the other
    #[arg(long)]
    sequential: bool,

    /// JSON file with pipeline settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => {
            let envelope = args.envelope;
            match run_render(args) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if envelope => {
                    print_json(&ErrorEnvelope::from(&e));
                    ExitCode::FAILURE
                }
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Validate { input } => match run_validate(&input) {
            Ok(()) => {
                println!("ok");
                ExitCode::SUCCESS
            }
            Err(e) => {
                println!("{}", e);
                ExitCode::FAILURE
            }
        },
        Command::Health => {
            print_json(&health());
            ExitCode::SUCCESS
        }
    }
}

fn run_render(args: RenderArgs) -> Result<(), PipelineError> {
    let config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };
    let mut builder = PipelineBuilder::new().with_config(config.apply_env()?);
    if let Some(size) = args.page_size {
        builder = builder.with_page_size(size);
    }
    if args.sequential {
        builder = builder.with_execution_mode(ExecutionMode::Sequential);
    }
    let pipeline = builder.build()?;

    let mut request = RenderRequest::from_document(read_json(&args.input)?)?;
    if let Some(px_per_m) = args.px_per_m {
        request.px_per_m = Some(px_per_m);
    }
    let output = pipeline.render_request(&request)?;

    if args.envelope {
        print_json(&output.to_envelope());
        return Ok(());
    }

    let svg_path = args
        .svg
        .unwrap_or_else(|| args.input.with_extension("svg"));
    let pdf_path = args
        .pdf
        .unwrap_or_else(|| args.input.with_extension("pdf"));
    fs::write(&svg_path, &output.svg)?;
    fs::write(&pdf_path, &output.pdf)?;
    info!(
        "Wrote {} and {}",
        svg_path.display(),
        pdf_path.display()
    );
    Ok(())
}

fn run_validate(input: &Path) -> Result<(), PipelineError> {
    let request = RenderRequest::from_document(read_json(input)?)?;
    floorplan::validate(&request.plan)?;
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, PipelineError> {
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", path.display(), e),
        ))
    })?;
    Ok(serde_json::from_str(&source)?)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: failed to serialize output: {}", e),
    }
}
