use analyzer_console::errors::ErrorHandler;
use analyzer_console::logger;
use analyzer_console::structs::cli::Cli;
use analyzer_console::workers::command_runner::CommandRunner;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let mut runner = CommandRunner::new();
    if let Err(error) = runner.run(cli).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }

    Ok(())
}
