use clap::{Parser, ValueEnum};
use itertools::Itertools;
use routo::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Output formats for the computed layout.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable dump of the layout
    Describe,
    /// Pretty-printed JSON geometry tree
    Json,
    /// Compact bincode artifact (requires --output)
    Bincode,
}

/// Lays out a funnel definition and prints or saves the resulting geometry
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the funnel definition JSON file
    funnel_path: String,

    /// Width of the drawing area in pixels
    #[arg(long, default_value_t = 960.0)]
    width: f64,

    /// Height of the drawing area in pixels
    #[arg(long, default_value_t = 540.0)]
    height: f64,

    /// Optional layout options JSON file
    #[arg(long)]
    options: Option<String>,

    /// What to emit
    #[arg(short, long, value_enum, default_value = "describe")]
    format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let funnel = FunnelSpec::from_file(&cli.funnel_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load funnel: {}", e)));
    let options = match &cli.options {
        Some(path) => LayoutOptions::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load options: {}", e))),
        None => LayoutOptions::default(),
    };
    tracing::info!(
        steps = funnel.steps.len(),
        path = %cli.funnel_path,
        "funnel loaded"
    );

    // --- 2. Layout ---
    let engine = LayoutEngine::new(options)
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid options: {}", e)));
    let layout_start = Instant::now();
    let layout = engine
        .layout(&funnel, Dimensions::new(cli.width, cli.height))
        .unwrap_or_else(|e| exit_with_error(&format!("Layout failed: {}", e)));
    let layout_duration = layout_start.elapsed();

    if let Some(reason) = layout.skipped {
        tracing::warn!(?reason, "no geometry produced");
    }
    let columns = layout.steps.iter().map(|s| s.title.as_str()).join(" -> ");
    tracing::info!(
        %columns,
        flows = layout.flows.len(),
        drops = layout.drops.len(),
        elapsed = ?layout_duration,
        "layout computed"
    );

    // --- 3. Output ---
    match cli.format {
        OutputFormat::Describe => emit_text(describe(&layout), cli.output.as_deref()),
        OutputFormat::Json => {
            let json = layout
                .to_json()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode layout: {}", e)));
            emit_text(json, cli.output.as_deref());
        }
        OutputFormat::Bincode => {
            let path = cli
                .output
                .as_deref()
                .unwrap_or_else(|| exit_with_error("--output is required for bincode output"));
            layout
                .save(path)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save layout: {}", e)));
            println!("Saved layout artifact to '{}'", path);
        }
    }

    tracing::debug!(elapsed = ?total_start.elapsed(), "done");
}

fn emit_text(text: String, output: Option<&str>) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                exit_with_error(&format!("Could not write '{}': {}", path, e))
            });
            println!("Wrote layout to '{}'", path);
        }
        None => println!("{}", text),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
