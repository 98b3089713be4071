use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "har2wstalker")]
#[command(author, version, about = "Convert a HAR file to WStalker CSV", long_about = None)]
struct Args {
    /// Input HAR file
    #[arg(short, long, env = "HAR2WSTALKER_INPUT")]
    input: String,

    /// Output CSV file
    #[arg(short, long, env = "HAR2WSTALKER_OUTPUT")]
    output: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    har2wstalker::convert_file(&args.input, &args.output)
        .with_context(|| format!("Failed to convert {}", args.input))?;

    Ok(())
}
