use clap::Parser;
use miette::Result;
use rorschach::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    rorschach::cli::run(cli)?;
    Ok(())
}
