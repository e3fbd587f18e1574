use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use thiserror::Error;

use traj_o_mat::config::{parse_duration, Config, ConfigError};
use traj_o_mat::playback::Sequencer;
use traj_o_mat::render::{self, RenderError, Renderer, TextRenderer, TrajectoryExport};
use traj_o_mat::telemetry::{LogParser, ParseStats, Sample};
use traj_o_mat::trajectory::{Trajectory, TrajectoryBuilder, TrajectoryError};

#[derive(Parser)]
#[command(name = "traj-o-mat")]
#[command(about = "Altitude-colored trajectory playback from telemetry logs")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a log and report accepted and rejected records
    Validate { log: PathBuf },
    /// Print the state of every playback frame
    Frames { log: PathBuf },
    /// Print the map area to fetch tiles for
    Bounds { log: PathBuf },
    /// Write trajectory, colors and frame labels as JSON
    Export {
        log: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay frames as text at a fixed cadence
    Play {
        log: PathBuf,
        #[arg(long, value_parser = parse_duration)]
        interval: Option<Duration>,
        /// Stop after the last frame instead of looping
        #[arg(long)]
        once: bool,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Validate { log } => validate(&log, &config),
        Commands::Frames { log } => frames(&log, &config),
        Commands::Bounds { log } => bounds(&log, &config),
        Commands::Export { log, output } => export(&log, output.as_deref(), &config),
        Commands::Play {
            log,
            interval,
            once,
        } => play(&log, interval, once, &config),
    }
}

fn read_samples(path: &Path) -> Result<(Vec<Sample>, ParseStats), AppError> {
    let read_err = |source| AppError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut parser = LogParser::open(path).map_err(read_err)?;
    let samples = parser
        .by_ref()
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_err)?;
    let stats = parser.stats().clone();

    log::info!(
        "{}: {} lines, {} samples, {} skipped",
        path.display(),
        stats.lines,
        stats.accepted,
        stats.rejected_total()
    );
    if stats.rejected_total() > stats.accepted {
        log::warn!("more records were skipped than accepted: {:?}", stats.rejected);
    } else if stats.rejected_total() > 0 {
        log::debug!("skipped records by reason: {:?}", stats.rejected);
    }

    Ok((samples, stats))
}

fn load(path: &Path, config: &Config) -> Result<Trajectory, AppError> {
    let (samples, _) = read_samples(path)?;
    let trajectory = TrajectoryBuilder::new()
        .palette(config.style.palette)
        .build(samples)?;
    Ok(trajectory)
}

fn validate(path: &Path, config: &Config) -> Result<(), AppError> {
    let (samples, stats) = read_samples(path)?;
    let trajectory = TrajectoryBuilder::new()
        .palette(config.style.palette)
        .build(samples)?;

    let range = trajectory.altitude_range();
    println!(
        "Log is usable ({} samples from {} lines, altitude {}..{} m)",
        stats.accepted, stats.lines, range.min, range.max
    );
    for (reason, count) in &stats.rejected {
        println!("  skipped {}: {}", reason, count);
    }
    Ok(())
}

fn frames(path: &Path, config: &Config) -> Result<(), AppError> {
    let trajectory = load(path, config)?;
    let sequencer = Sequencer::new(&trajectory, config.playback.utc_offset()?);
    let mut renderer = TextRenderer::new(io::stdout().lock());

    for frame in sequencer.frames() {
        renderer.render(&frame)?;
    }
    Ok(())
}

fn bounds(path: &Path, config: &Config) -> Result<(), AppError> {
    let trajectory = load(path, config)?;
    let request = trajectory.tile_request(config.map.margin_m, config.map.zoom);
    let b = request.bounds;

    println!("south: {:.1}", b.south);
    println!("west:  {:.1}", b.west);
    println!("north: {:.1}", b.north);
    println!("east:  {:.1}", b.east);
    println!("zoom:  {}", request.zoom);
    Ok(())
}

fn export(path: &Path, output: Option<&Path>, config: &Config) -> Result<(), AppError> {
    let trajectory = load(path, config)?;
    let sequencer = Sequencer::new(&trajectory, config.playback.utc_offset()?);
    let export = TrajectoryExport::new(
        &sequencer,
        trajectory.tile_request(config.map.margin_m, config.map.zoom),
    );

    match output {
        Some(out) => {
            let mut writer = BufWriter::new(File::create(out)?);
            export.write_json(&mut writer)?;
            writer.flush()?;
            log::info!("wrote {} frames to {}", export.frames.len(), out.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            export.write_json(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn play(
    path: &Path,
    interval: Option<Duration>,
    once: bool,
    config: &Config,
) -> Result<(), AppError> {
    let trajectory = load(path, config)?;
    let sequencer = Sequencer::new(&trajectory, config.playback.utc_offset()?);
    let interval = interval.unwrap_or(config.playback.interval);
    let repeat = config.playback.repeat && !once;

    log::info!(
        "playing {} frames every {}",
        sequencer.len(),
        humantime::format_duration(interval)
    );
    let mut renderer = TextRenderer::new(io::stdout().lock());
    render::play(&sequencer, &mut renderer, interval, repeat)?;
    Ok(())
}
