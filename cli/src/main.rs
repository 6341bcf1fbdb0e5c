use clap::Parser;
use heap_cli::config::cli::{Cli, Commands};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Run(config) => {
            tracer::init_log(Some(&config.log_level))?;
            heap_cli::demo::run(config, &mut io::stdout().lock(), &mut io::stderr().lock())?;
        }
    }
    Ok(())
}
