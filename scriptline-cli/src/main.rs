use clap::Parser;
use scriptline_cli::commands::Commands;

/// Normalize scraped text into OCR ground truth and render training lines
#[derive(Debug, Parser)]
#[command(name = "scriptline", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
