use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ringclock", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Keep rendering the live clock, replacing the output PNG every frame.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Label font file. Defaults to a bold system face ($RINGCLOCK_FONT_FAMILY or Arial).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Render without any text.
    #[arg(long, conflicts_with = "font")]
    no_text: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Time of day to render (HH:MM:SS[.ffffff]); defaults to now.
    #[arg(long)]
    at: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Print the compiled frame plan as JSON to stdout.
    #[arg(long)]
    dump_plan: bool,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    surface: SurfaceArgs,

    /// Output PNG path, replaced atomically on every frame.
    #[arg(long)]
    out: PathBuf,

    /// Frame period in milliseconds.
    #[arg(long, default_value_t = 16)]
    interval_ms: u64,

    /// Stop after this many ticks, skipped frames included, instead of running until killed.
    #[arg(long)]
    frames: Option<u64>,
}

impl SurfaceArgs {
    fn canvas(&self) -> anyhow::Result<ringclock::Canvas> {
        Ok(ringclock::Canvas::new(self.width, self.height)?)
    }

    fn backend(&self) -> anyhow::Result<ringclock::CpuBackend> {
        let font = match (&self.font, self.no_text) {
            (_, true) => ringclock::FontSource::Disabled,
            (Some(path), false) => ringclock::FontSource::File(path.clone()),
            (None, false) => ringclock::FontSource::default(),
        };
        let backend = ringclock::CpuBackend::new(ringclock::RenderSettings { font })
            .context("create cpu backend")?;
        Ok(backend)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    use ringclock::TimeSource as _;

    let canvas = args.surface.canvas()?;
    let mut backend = args.surface.backend()?;

    let sample = match &args.at {
        Some(at) => ringclock::FixedTimeSource::parse(at)
            .with_context(|| format!("invalid --at value '{at}'"))?
            .sample()?,
        None => ringclock::SystemTimeSource.sample()?,
    };

    let plan = ringclock::compile_frame(canvas, &sample)?;
    if args.dump_plan {
        let stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(stdout, &plan).context("write frame plan JSON")?;
        println!();
    }

    let frame = ringclock::execute_plan(&mut backend, &plan)?;
    ringclock::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let canvas = args.surface.canvas()?;
    let backend = args.surface.backend()?;

    let scheduler = ringclock::FixedRateScheduler::new(Duration::from_millis(args.interval_ms))?
        .with_max_ticks(args.frames);
    let mut face = ringclock::ClockFace::new(canvas, ringclock::SystemTimeSource, backend);
    let mut layer = ringclock::HeadlessLayer::default();
    let mut sink = ringclock::PngFrameSink::new(&args.out);

    tracing::info!(
        out = %sink.path().display(),
        interval_ms = args.interval_ms,
        "starting clock"
    );
    let stats = ringclock::run_clock(&mut face, &mut layer, &mut sink, &scheduler)?;

    eprintln!(
        "rendered {} frames ({} skipped, {} ticks dropped) to {}",
        stats.frames,
        stats.skipped_frames,
        stats.dropped_ticks,
        args.out.display()
    );
    Ok(())
}
