use clap::{ArgAction, Args, Parser, Subcommand};
use std::num::NonZeroUsize;

pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(12).unwrap();

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Runs the scripted min-heap demonstration
    Run(DemoConfig),
}

#[derive(Args, Debug, Clone)]
pub struct DemoConfig {
    /// Maximum number of values the heap holds
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: NonZeroUsize,

    ///  Log level
    #[arg(long, default_value_t = String::from("warn"))]
    pub log_level: String,

    /// Extracts every remaining value after the dump, smallest first
    #[arg(long, action = ArgAction::SetTrue)]
    pub drain: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_level: String::from("warn"),
            drain: false,
        }
    }
}

impl DemoConfig {
    pub fn capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn drain(mut self) -> Self {
        self.drain = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<DemoConfig, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Run(config) => Ok(config),
        }
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["heap-demo", "run"]).unwrap();

        assert_eq!(config.capacity.get(), 12);
        assert_eq!(config.log_level, "warn");
        assert!(!config.drain);
    }

    #[test]
    fn test_overrides() {
        let config = parse(&[
            "heap-demo",
            "run",
            "--capacity",
            "3",
            "--log-level",
            "fixed_heap=debug",
            "--drain",
        ])
        .unwrap();

        assert_eq!(config.capacity.get(), 3);
        assert_eq!(config.log_level, "fixed_heap=debug");
        assert!(config.drain);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert!(parse(&["heap-demo", "run", "--capacity", "0"]).is_err());
    }
}
