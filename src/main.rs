use clap::Parser;
use decklist_converter::{default_cache_path, ConvertConfig, InputGrammar, OutputFormat};
use std::path::PathBuf;

/// Convert MTG decklists between text formats, adding Scryfall set names
#[derive(Parser, Debug)]
#[command(name = "decklist_converter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Decklist text file to read
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// Output file (default: output.csv or output.txt, depending on --to)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input line format
    #[arg(long, value_enum, default_value_t = InputGrammar::Bracketed)]
    from: InputGrammar,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::CardKingdom)]
    to: OutputFormat,

    /// Path to the cached Scryfall set catalog
    #[arg(long, default_value_os_t = default_cache_path())]
    cache: PathBuf,

    /// Ignore the cached set catalog and fetch it from Scryfall again
    #[arg(long, default_value_t = false)]
    refresh: bool,
}

impl From<Args> for ConvertConfig {
    fn from(args: Args) -> Self {
        let config = ConvertConfig::new(args.input, args.from, args.to)
            .with_cache_path(args.cache)
            .with_refresh(args.refresh);
        match args.output {
            Some(output) => config.with_output(output),
            None => config,
        }
    }
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=decklist_converter=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConvertConfig::from(Args::parse());

    match decklist_converter::run(&config) {
        Ok(count) => {
            log::info!("Wrote {} cards to {}", count, config.output.display());
        }
        Err(e) => {
            log::error!("Conversion failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
