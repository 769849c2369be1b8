pub mod completions;
pub mod generate;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::output::Printer;

/// rorschach - Symmetric inkblot generator
#[derive(Parser, Debug)]
#[command(name = "rorschach")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,

    /// Load defaults from a YAML settings file (default: ./rorschach.yaml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print warnings
    #[arg(long, short)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completions::run(shell);
    }

    let printer = Printer::new().quiet(cli.quiet);
    generate::run(cli.generate, cli.config.as_deref(), &printer)
}
