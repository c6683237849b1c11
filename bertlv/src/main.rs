use anyhow::Context;
use bertlv::{CodecConfig, TlvEditor, TlvParser};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bertlv")]
#[command(about = "Inspect and edit hex-encoded BER-TLV data")]
#[command(version)]
struct Cli {
    /// JSON configuration file (max_depth, max_length_octets)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the element tree
    Parse {
        /// BER-TLV data as hex
        hex: String,

        /// Print JSON instead of the indented tree
        #[arg(long)]
        json: bool,
    },
    /// Replace the value at a tag path and print the new hex
    Edit {
        /// BER-TLV data as hex
        hex: String,

        /// Colon-separated tag path, e.g. E0:9F33
        path: String,

        /// New value as hex
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    log::debug!("Using {:?}", config);

    match cli.command {
        Command::Parse { hex, json } => {
            let stream = TlvParser::new(config).parse_hex(&hex)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stream)?);
            } else {
                print!("{}", stream);
            }
        }
        Command::Edit { hex, path, value } => {
            let output = TlvEditor::new(config).edit(&hex, &path, &value)?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialise logger")
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CodecConfig> {
    let Some(path) = path else {
        return Ok(CodecConfig::default());
    };
    if !path.exists() {
        log::info!("Config file {:?} not found, using defaults", path);
        return Ok(CodecConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {:?}", path))
}
