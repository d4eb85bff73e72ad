// Tue Oct 13 2026 - Alex

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use regexrs::config::EngineConfig;
use regexrs::pattern::{self, presets, Flags};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Times compile + findall over a text file", long_about = None)]
struct Args {
    filename: PathBuf,

    /// Custom pattern; when omitted the email, uri and ip presets run
    #[arg(short, long)]
    pattern: Option<String>,

    /// Inline flag letters for --pattern, e.g. "im"
    #[arg(short, long, default_value = "")]
    flags: String,

    /// JSON file with engine limits
    #[arg(long)]
    engine_config: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(EngineConfig::from_json(&raw)?)
        }
        None => Ok(EngineConfig::from_env()?),
    }
}

fn measure(data: &str, source: &str, flags: Flags, config: &EngineConfig) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let compiled = pattern::compile_with(source, flags, config)?;
    let matches = pattern::findall(&compiled, data, Flags::empty())?;

    let elapsed = start_time.elapsed();
    println!("{} - {}", elapsed.as_secs_f64() * 1e3, matches.len());
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.engine_config.as_ref())?;
    let data = std::fs::read_to_string(&args.filename)
        .with_context(|| format!("reading {}", args.filename.display()))?;

    log::info!("loaded {} bytes from {}", data.len(), args.filename.display());

    match args.pattern {
        Some(source) => {
            let flags: Flags = args.flags.parse()?;
            measure(&data, &source, flags, &config)?;
        }
        None => {
            for (name, source) in presets::all() {
                log::info!("running preset {}", name);
                measure(&data, source, Flags::empty(), &config)?;
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}
