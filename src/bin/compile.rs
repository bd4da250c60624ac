//! Model Properties CLI
//!
//! Compiles property specifications and prints the resulting schema as JSON.

use clap::Parser;
use model_properties::{OutputFormat, PropertiesConfig, PropertyCompiler};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "model-properties")]
#[command(about = "Compile model property specifications into a schema")]
struct Cli {
    /// Path to a config file (properties.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// Print compact JSON instead of the configured format
    #[arg(long)]
    compact: bool,

    /// Property specifications, e.g. `title:string` or `email:string:def`
    specs: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PropertiesConfig::load_from(cli.config.as_deref())?;
    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        config.output.format
    };

    let compiler = PropertyCompiler::from_config(&config.naming);
    let schema = compiler.compile(Some(&cli.specs));
    tracing::debug!(properties = schema.len(), "compiled property schema");

    println!("{}", schema.to_json(format)?);
    Ok(())
}
