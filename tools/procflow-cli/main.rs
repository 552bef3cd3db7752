use clap::{Parser, ValueEnum};
use procflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Output formats the CLI can produce.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed graph JSON for a renderer
    Json,
    /// Human-readable node and edge listing
    Text,
    /// Binary graph artifact (requires --output)
    Artifact,
}

/// Synthesizes a laid-out flow graph from a process snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the process snapshot JSON file (`null` renders nothing)
    snapshot_path: String,

    /// Optional layout configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli);
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let load_start = Instant::now();
    let snapshot = snapshot_from_file(&cli.snapshot_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load snapshot '{}': {}",
            cli.snapshot_path, e
        ))
    });
    let config = match &cli.config {
        Some(path) => LayoutConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load layout config '{}': {}", path, e))
        }),
        None => LayoutConfig::default(),
    };
    let load_duration = load_start.elapsed();

    // --- 2. Synthesis ---
    let synth_start = Instant::now();
    let synthesizer = Synthesizer::builder()
        .with_layout(config)
        .build()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid layout: {}", e)));
    let graph = synthesizer.synthesize_snapshot(snapshot.as_ref());
    let synth_duration = synth_start.elapsed();

    let title = snapshot
        .as_ref()
        .map(|p| p.name.clone().unwrap_or_else(|| p.id.clone()))
        .unwrap_or_else(|| "<none>".to_string());

    // --- 3. Output ---
    match cli.format {
        OutputFormat::Json => {
            let json = graph.to_json_pretty().unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to serialize graph: {}", e))
            });
            emit(cli.output.as_deref(), &json);
        }
        OutputFormat::Text => emit(cli.output.as_deref(), &visualize_graph(&graph, &title)),
        OutputFormat::Artifact => {
            let path = cli.output.as_deref().unwrap_or_else(|| {
                exit_with_error("The artifact format requires an --output path.")
            });
            graph.save(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write artifact: {}", e))
            });
        }
    }

    // --- 4. Summary ---
    let mode = snapshot
        .as_ref()
        .map(|p| format!("{:?}", p.mode()))
        .unwrap_or_else(|| "-".to_string());
    eprintln!("\n--- Synthesis Summary ---");
    eprintln!("Process:              {}", title);
    eprintln!("Mode:                 {}", mode);
    eprintln!("Nodes:                {}", graph.nodes.len());
    eprintln!("Edges:                {}", graph.edges.len());
    eprintln!("Snapshot Loading:     {:?}", load_duration);
    eprintln!("Synthesis:            {:?}", synth_duration);
    eprintln!("Total Execution:      {:?}", total_start.elapsed());
}

fn emit(output: Option<&str>, content: &str) {
    match output {
        Some(path) => {
            fs::write(path, content).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", path, e))
            });
            log::info!("Wrote output to '{}'", path);
        }
        None => println!("{}", content),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
