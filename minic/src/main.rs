use anyhow::{Context, Result};
use clap::Parser;
use minic::Emit;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "minic")]
#[command(author, version, about = "Lexes and parses a minimal C-like language", long_about = None)]
struct Cli {
    /// Source file to compile
    file: PathBuf,

    /// Output path (defaults to the input path with a `.s` extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to write to the output
    #[arg(long, value_enum, default_value = "ast")]
    emit: Emit,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.stdout {
        let rendered = minic::render_file(&cli.file, cli.emit)
            .with_context(|| format!("Failed to compile {}", cli.file.display()))?;
        print!("{}", rendered);
    } else {
        minic::compile_file(&cli.file, cli.output.as_deref(), cli.emit)
            .with_context(|| format!("Failed to compile {}", cli.file.display()))?;
    }

    Ok(())
}
