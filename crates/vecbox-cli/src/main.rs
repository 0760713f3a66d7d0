//! vecbox CLI - generate axis triples and perspective boxes
//!
//! Prints scenes as JSON and writes them as SVG.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vecbox::{AxisIndex, AxisSample, LengthBounds, Scene, SceneConfig, SvgDocument};

#[derive(Parser)]
#[command(name = "vecbox")]
#[command(about = "Random vectors and perspective boxes", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random scene
    Generate {
        /// Minimum vector length (invalid input falls back to 1)
        #[arg(long)]
        min: Option<String>,
        /// Maximum vector length (invalid input falls back to 400)
        #[arg(long)]
        max: Option<String>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Draw a scene from explicit angles and lengths
    Draw {
        /// Angles of A, B, C in degrees
        #[arg(long, required = true, num_args = 3, value_names = ["A", "B", "C"], allow_hyphen_values = true)]
        angles: Vec<f64>,
        /// Lengths of A, B, C
        #[arg(long, required = true, num_args = 3, value_names = ["A", "B", "C"], allow_hyphen_values = true)]
        lengths: Vec<i64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the default configuration as TOML
    Config,
}

#[derive(Args)]
struct OutputArgs {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Convergence factors for A, B, C (0 = parallel)
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"], allow_hyphen_values = true)]
    convergence: Option<Vec<f64>>,
    /// Construct the box
    #[arg(long = "box")]
    show_box: bool,
    /// Write SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the frame as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            min,
            max,
            seed,
            output,
        } => {
            let mut config = load_config(&output)?;
            if min.is_some() || max.is_some() {
                let current = config.lengths;
                config.lengths = LengthBounds::parse(
                    &min.unwrap_or_else(|| current.min().to_string()),
                    &max.unwrap_or_else(|| current.max().to_string()),
                );
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let scene = Scene::generate(&config, &mut rng)?;
            emit(scene, &config, &output)?;
        }
        Commands::Draw {
            angles,
            lengths,
            output,
        } => {
            let config = load_config(&output)?;
            let samples = [0, 1, 2].map(|i| AxisSample {
                angle_degrees: angles[i],
                length: 0,
            });
            // lengths from the command line are taken as given, like a manual slider
            let scene = AxisIndex::ALL.iter().fold(
                Scene::new(config.canvas.origin(), samples, config.convergence),
                |scene, axis| scene.with_length(*axis, lengths[axis.index()]),
            );
            emit(scene, &config, &output)?;
        }
        Commands::Config => {
            print!("{}", SceneConfig::default().to_toml_string()?);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(output: &OutputArgs) -> Result<SceneConfig> {
    let mut config = match &output.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(conv) = &output.convergence {
        config.convergence = [conv[0], conv[1], conv[2]];
    }
    Ok(config)
}

fn emit(scene: Scene, config: &SceneConfig, output: &OutputArgs) -> Result<()> {
    let scene = scene.with_box_visible(output.show_box);
    let frame = scene.frame();

    if let Some(path) = &output.svg {
        write_svg(&frame, config, path)?;
    }
    if output.json || output.svg.is_none() {
        println!("{}", frame.to_json_pretty()?);
    }
    Ok(())
}

fn write_svg(frame: &vecbox::Frame, config: &SceneConfig, path: &Path) -> Result<()> {
    SvgDocument::new(frame, config.canvas).export(path)?;
    log::info!("wrote SVG to {}", path.display());
    Ok(())
}
