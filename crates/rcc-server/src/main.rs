//! Recruitment Crew Cache server binary

use clap::Parser;
use rcc_server::run_server;

/// Command line interface
#[derive(Parser, Debug)]
#[command(name = "rcc")]
#[command(about = "Content-addressed result cache for candidate profile analysis")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_server(cli.config.as_deref()).await
}
