use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "analyzer-console")]
#[clap(about = "Client for the code analysis service", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/analyzer-console/config.toml)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend URL, overriding the config file
    #[clap(long, global = true)]
    pub base_url: Option<String>,

    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
