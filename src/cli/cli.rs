use std::path::PathBuf;

use clap::Parser;
use nstree::CdMode;

use crate::application::data::LogLevel;

#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Commands to run in order: "mkdir PATH", "cd PATH", "tree", "pwd", "ls [PATH]"
    pub commands: Vec<String>,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// YAML config file, defaults to ./nstree.yaml when present
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Overrides the cd mode of the config file
    #[clap(long, value_enum)]
    pub cd_mode: Option<CdMode>,
}
