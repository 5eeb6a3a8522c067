use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::category_filter::CategoryFilter;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a sample config file
    Init,
    /// Probe the backend once
    Health,
    /// Analyze a snippet from --code, --file, or stdin
    Analyze {
        #[clap(short, long, conflicts_with = "file")]
        code: Option<String>,
        #[clap(short, long)]
        file: Option<PathBuf>,
        #[clap(short, long)]
        language: Option<String>,
        /// Print the Markdown analysis instead of HTML
        #[clap(long)]
        raw: bool,
    },
    /// List the files the backend would analyze in a repository
    Scan {
        repo_path: String,
    },
    /// List stored reports
    Reports {
        #[clap(short, long)]
        query: Option<String>,
        #[clap(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Show one report
    Report {
        path: String,
    },
    /// Interactive session with health monitoring
    Console,
}
