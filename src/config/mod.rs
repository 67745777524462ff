use clap::Parser;

/// Command-line switches. Generation itself is configured interactively.
#[derive(Debug, Clone, Parser)]
#[command(name = "pwgen", version)]
#[command(about = "Interactive generator for random passwords")]
pub struct CliConfig {
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
