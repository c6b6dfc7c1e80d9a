use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use img2verilog::loader;
use img2verilog::models::{AppConfig, CONFIG_ENV_VAR};
use img2verilog::services::{corner_samples, Converter, ImageSummary, CORNER_SIZE};

#[derive(Parser)]
#[command(name = "img2verilog")]
#[command(about = "Convert a PNG frame into a Verilog pixel_index lookup chain")]
struct Cli {
    /// YAML config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the if/else-if chain for an image
    Convert {
        /// Input PNG file
        input: PathBuf,

        /// Write the generated code here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Variable assigned by each statement (default: oled_data)
        #[arg(long)]
        target: Option<String>,

        /// Signal tested by each condition (default: pixel_index)
        #[arg(long)]
        index_signal: Option<String>,

        /// Also print corner pixel mapping and image info
        #[arg(long)]
        details: bool,
    },
    /// Print coordinate/index mapping and image info without generating code
    Inspect {
        /// Input PNG file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so generated code on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "img2verilog=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = AppConfig::resolve_path(cli.config, std::env::var(CONFIG_ENV_VAR).ok());

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            target,
            index_signal,
            details,
        }) => {
            let config = AppConfig::load(config_path.as_deref());
            run_convert_command(
                &config,
                &input,
                output.as_deref(),
                target,
                index_signal,
                details,
            )
        }
        Some(Commands::Inspect { input }) => run_inspect_command(&input),
        None => {
            run_status_command(config_path.as_deref());
            Ok(())
        }
    }
}

/// Generate the lookup chain and write it to a file or stdout
fn run_convert_command(
    config: &AppConfig,
    input: &Path,
    output: Option<&Path>,
    target: Option<String>,
    index_signal: Option<String>,
    details: bool,
) -> anyhow::Result<()> {
    let converter =
        Converter::new(config).with_generator(config.generator_with(target, index_signal));
    let report = converter.convert_file(input)?;

    if details {
        println!("{}", corner_samples(&report.grid, CORNER_SIZE));
    }

    match output {
        Some(path) => {
            Converter::write_output(&report, path)?;
            println!(
                "Wrote {} ({} colours)",
                path.display(),
                report.table.color_count()
            );
        }
        None => println!("{}", report.table),
    }

    if details {
        println!("\n{}", ImageSummary::from_grid(&report.grid));
    }

    Ok(())
}

/// Print the corner mapping and image summary
fn run_inspect_command(input: &Path) -> anyhow::Result<()> {
    let grid = loader::load_png(input)?;
    println!("{}", corner_samples(&grid, CORNER_SIZE));
    println!("{}", ImageSummary::from_grid(&grid));
    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("img2verilog v{VERSION}");
    println!("PNG to Verilog pixel_index lookup chain generator\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| "(not set)".to_string())
    );
    println!(
        "  RUST_LOG    = {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "img2verilog=info (default)".to_string())
    );

    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = AppConfig::load(config_path);

    println!("\nConfiguration:");
    println!("  Source:       {source}");
    println!(
        "  Display:      {}x{}",
        config.display.width, config.display.height
    );
    println!("  Target:       {}", config.verilog.target);
    println!("  Index signal: {}", config.verilog.index_signal);

    println!("\nCommands:");
    println!("  img2verilog convert <PNG>   Generate the if/else-if chain");
    println!("  img2verilog inspect <PNG>   Show pixel coordinate/index mapping");
    println!("\nRun 'img2verilog --help' for more details.");
}
