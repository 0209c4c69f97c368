use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "exposure-heatmap", version)]
struct Cli {
    /// Log at DEBUG instead of INFO.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Accumulate exposure over an annotation file and write the heatmap.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// JSON run config; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Annotation file (`<frame> <count> x1 y1 ... x4 y4 ...` per line).
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Seconds between consecutive annotated frames.
    #[arg(long)]
    seconds_per_frame: Option<f64>,

    /// Directory relative frame references resolve against.
    #[arg(long)]
    frames_root: Option<PathBuf>,

    /// Directory for highlighted frames.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output heatmap image path.
    #[arg(long)]
    heatmap: Option<PathBuf>,

    /// Only produce the heatmap.
    #[arg(long, default_value_t = false)]
    no_highlights: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Run(args) => cmd_run(args),
    }
}

fn build_config(args: RunArgs) -> anyhow::Result<exposure_heatmap::RunConfig> {
    let mut cfg = match &args.config {
        Some(path) => exposure_heatmap::RunConfig::from_path(path)?,
        None => exposure_heatmap::RunConfig::default(),
    };

    if let Some(labels) = args.labels {
        cfg.labels = labels;
    }
    if let Some(secs) = args.seconds_per_frame {
        cfg.seconds_per_frame = exposure_heatmap::SecondsPerFrame::new(secs)?;
    }
    if let Some(root) = args.frames_root {
        cfg.frames_root = Some(root);
    }
    if let Some(dir) = args.out_dir {
        cfg.output_dir = dir;
    }
    if let Some(path) = args.heatmap {
        cfg.heatmap_path = path;
    }
    if args.no_highlights {
        cfg.write_highlights = false;
    }
    Ok(cfg)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = build_config(args)?;
    let report = exposure_heatmap::execute(&cfg)
        .with_context(|| format!("process annotations '{}'", cfg.labels.display()))?;

    eprintln!(
        "processed {} frame(s), peak exposure {:.3}s",
        report.frames,
        report.grid.peak()
    );
    eprintln!("wrote {}", cfg.heatmap_path.display());
    Ok(())
}
