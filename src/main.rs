//! `tidelight` command-line previewer.
//!
//! Runs a scene headlessly on a simulated 60 Hz clock and writes the last
//! frame as SVG. Also prints the options JSON schema and lists presets.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tidelight::color::Rgba;
use tidelight::driver::{AnimationDriver, Scene};
use tidelight::input::InputEvent;
use tidelight::options::Options;
use tidelight::particles::ParticleScene;
use tidelight::surface::{SvgSurface, SurfaceSize};
use tidelight::waves::WaveScene;
use web_time::{Duration, Instant};

/// Preview backdrop; the animations are designed for a dark page.
const BACKGROUND: Rgba = Rgba::new(15, 23, 42, 1.0);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate a scene and write its last frame as SVG.
    Render(RenderArgs),
    /// Print the options JSON schema.
    Schema,
    /// List TOML presets in a directory.
    Presets {
        /// Directory to scan.
        dir: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneKind {
    Waves,
    Particles,
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Which animation to run.
    #[arg(long, value_enum, default_value_t = SceneKind::Waves)]
    scene: SceneKind,
    #[arg(long, default_value_t = 1280)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Ticks to simulate before capturing.
    #[arg(long, default_value_t = 60)]
    frames: u32,
    /// Hovering pointer position as `X,Y` in pixels.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<(f32, f32)>,
    /// Seed for particle placement.
    #[arg(long)]
    seed: Option<u64>,
    /// TOML options file.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Leave the background transparent.
    #[arg(long)]
    transparent: bool,
    /// Output file.
    #[arg(long, short, default_value = "frame.svg")]
    out: PathBuf,
}

fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok((parse(x)?, parse(y)?))
}

fn simulate<C: Scene>(
    scene: C,
    options: &Options,
    args: &RenderArgs,
) -> Result<SvgSurface> {
    let mut surface = SvgSurface::new(SurfaceSize::new(args.width, args.height));
    if !args.transparent {
        surface = surface.with_background(BACKGROUND);
    }

    let mut driver = AnimationDriver::new(scene, &options.driver);
    driver.mount(Some(surface));
    if let Some((x, y)) = args.pointer {
        driver.handle_event(InputEvent::PointerMoved { x, y });
    }

    let start = Instant::now();
    let frame = Duration::from_secs_f64(1.0 / 60.0);
    for i in 0..args.frames.max(1) {
        let _ = driver.tick(start + frame * i);
    }
    log::info!(
        "simulated {} frames, {} rendered",
        args.frames.max(1),
        driver.frame_index()
    );
    driver.surface().cloned().context("surface was not mounted")
}

fn render(args: &RenderArgs) -> Result<()> {
    let options = match &args.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };

    let surface = match args.scene {
        SceneKind::Waves => {
            simulate(WaveScene::from_options(&options), &options, args)?
        }
        SceneKind::Particles => {
            let particles = options.particles.clone();
            let scene = match args.seed {
                Some(seed) => ParticleScene::with_seed(particles, seed),
                None => ParticleScene::new(particles),
            };
            simulate(scene, &options, args)?
        }
    };

    surface
        .write_to(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}

fn print_schema() -> Result<()> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())?;
    writeln!(std::io::stdout().lock(), "{schema}")?;
    Ok(())
}

fn print_presets(dir: &Path) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for name in Options::list_presets(dir) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Render(args) => render(args),
        Command::Schema => print_schema(),
        Command::Presets { dir } => print_presets(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse_with_whitespace() {
        assert_eq!(parse_point("12, 34.5"), Ok((12.0, 34.5)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
