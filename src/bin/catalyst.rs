use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catalyst", version)]
struct Cli {
    /// Sketch config JSON (size, fps, duration, seed).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Write the default settings export.
    Settings(SettingsArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path; defaults to a timestamped name in the current directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Settings export to load before rendering.
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long, requires = "height")]
    width: Option<u32>,

    #[arg(long, requires = "width")]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Number of frames; defaults to the full timeline.
    #[arg(long)]
    count: Option<u64>,

    /// Output directory for `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SettingsArgs {
    /// Output path; defaults to the generated file name in the current directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// File name prefix.
    #[arg(long, default_value = "catalyst")]
    prefix: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => catalyst::SketchConfig::load(path)?,
        None => catalyst::SketchConfig::default(),
    };
    match cli.cmd {
        Command::Frame(args) => cmd_frame(config, args),
        Command::Frames(args) => cmd_frames(config, args),
        Command::Settings(args) => cmd_settings(config, args),
    }
}

fn open_sketch(
    config: catalyst::SketchConfig,
    settings: Option<&Path>,
) -> anyhow::Result<catalyst::Sketch> {
    let mut sketch = catalyst::Sketch::new(config)?;
    if let Some(path) = settings {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        sketch
            .load_settings(&text)
            .with_context(|| format!("load settings '{}'", path.display()))?;
    }
    Ok(sketch)
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(config: catalyst::SketchConfig, args: FrameArgs) -> anyhow::Result<()> {
    let mut sketch = open_sketch(config, args.settings.as_deref())?;
    if let (Some(w), Some(h)) = (args.width, args.height) {
        sketch.resize(w, h);
    }

    let out = args.out.unwrap_or_else(|| {
        let tag = catalyst::foundation::math::timestamp_b64();
        PathBuf::from(format!("{}.png", catalyst::Generator::output_file_name(&tag)))
    });

    let frame = sketch.render_frame(args.frame)?;
    ensure_parent(&out)?;
    frame
        .write_png(&out)
        .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_frames(config: catalyst::SketchConfig, args: FramesArgs) -> anyhow::Result<()> {
    let sketch = open_sketch(config, args.settings.as_deref())?;
    let count = args.count.unwrap_or_else(|| sketch.timeline().n_frames());
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..count {
        let frame = sketch.render_frame(i)?;
        let path = args.out_dir.join(format!("frame_{i:05}.png"));
        frame
            .write_png(&path)
            .with_context(|| format!("write png '{}'", path.display()))?;
    }

    eprintln!("wrote {count} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_settings(config: catalyst::SketchConfig, args: SettingsArgs) -> anyhow::Result<()> {
    let sketch = catalyst::Sketch::new(config)?;
    let export = sketch
        .export_settings(&args.prefix)?
        .context("changeset has no current entry")?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(&export.file_name));
    ensure_parent(&out)?;
    std::fs::write(&out, &export.contents)
        .with_context(|| format!("write settings '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
