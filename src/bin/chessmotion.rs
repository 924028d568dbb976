use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chessmotion", version)]
struct Cli {
    /// Log debug detail to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a move-list JSON into an animation event stream.
    Compile(CompileArgs),
    /// Print the board state at a point in time.
    Sample(SampleArgs),
    /// Map a pixel position to the nearest square.
    Square(SquareArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input move-list JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input move-list JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in seconds.
    #[arg(long)]
    time: f64,

    /// Include pieces that are fully transparent at `time`.
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[derive(Parser, Debug)]
struct SquareArgs {
    /// Horizontal pixel position.
    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    /// Vertical pixel position.
    #[arg(long, allow_hyphen_values = true)]
    y: f64,

    #[command(flatten)]
    settings: SettingsArgs,
}

/// Overrides applied on top of the document's embedded settings.
#[derive(Parser, Debug)]
struct SettingsArgs {
    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Time of the first move, in seconds.
    #[arg(long)]
    start_time: Option<f64>,

    /// Length of one move, in seconds.
    #[arg(long)]
    move_duration: Option<f64>,

    /// Length of capture and promotion fades, in seconds.
    #[arg(long)]
    fade_duration: Option<f64>,

    /// Pause after each move, in seconds.
    #[arg(long)]
    gap: Option<f64>,

    /// View the board from Black's side.
    #[arg(long)]
    flip: bool,
}

impl SettingsArgs {
    fn apply(&self, s: &mut chessmotion::TimelineSettings) {
        if let Some(w) = self.width {
            s.canvas.width = w;
        }
        if let Some(h) = self.height {
            s.canvas.height = h;
        }
        if let Some(v) = self.start_time {
            s.timing.start_time = v;
        }
        if let Some(v) = self.move_duration {
            s.timing.move_duration = v;
        }
        if let Some(v) = self.fade_duration {
            s.timing.fade_duration = v;
        }
        if let Some(v) = self.gap {
            s.timing.gap_between_moves = v;
        }
        if self.flip {
            s.orientation = chessmotion::Orientation::Black;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Square(args) => cmd_square(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_document(
    path: &Path,
    overrides: &SettingsArgs,
) -> anyhow::Result<chessmotion::TimelineDocument> {
    let mut doc = chessmotion::TimelineDocument::from_path(path)
        .with_context(|| format!("load timeline '{}'", path.display()))?;
    overrides.apply(&mut doc.settings);
    doc.settings.validate()?;
    Ok(doc)
}

fn write_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, &args.settings)?;
    let compiled = chessmotion::compile_document(&doc)?;

    write_json(&compiled, args.out.as_deref())?;

    eprintln!(
        "compiled {} moves into {} events ({} diagnostics), ends at {:.3}s",
        doc.moves.len(),
        compiled.events.len(),
        compiled.diagnostics.len(),
        compiled.end_time
    );
    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path, &args.settings)?;
    let compiled = chessmotion::compile_document(&doc)?;
    let anim = chessmotion::BoardAnimation::from_timeline(
        &compiled,
        doc.settings.geometry(),
        doc.settings.ease,
    )?;

    let frames = if args.all {
        anim.sample(args.time)?
    } else {
        anim.visible_at(args.time)?
    };
    write_json(&frames, None)
}

fn cmd_square(args: SquareArgs) -> anyhow::Result<()> {
    let mut settings = chessmotion::TimelineSettings::default();
    args.settings.apply(&mut settings);
    settings.validate()?;

    let geometry = settings.geometry();
    let square = geometry.position_to_nearest_square(chessmotion::Point::new(args.x, args.y));
    let center = geometry.square_center(square);
    println!("{square} {:.3} {:.3}", center.x, center.y);
    Ok(())
}
