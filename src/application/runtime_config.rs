use std::path::PathBuf;

use nstree::CdMode;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub commands: Vec<String>,
    pub config_path: Option<PathBuf>,
    pub cd_mode: Option<CdMode>,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            commands: cli.commands,
            config_path: cli.config,
            cd_mode: cli.cd_mode,
        }
    }
}
