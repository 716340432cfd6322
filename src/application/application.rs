use std::io::{Stdout, Write};

use nstree::{CdMode, Session};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::application::{Command, CommandParseError, Output, RuntimeConfig};
use crate::config::{ConfigCreationError, NamespaceConfig};

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        Self::run_with_output(app_config, &mut Output::<Stdout>::default()).await
    }

    pub async fn run_with_output<W: Write>(
        app_config: impl Into<RuntimeConfig>,
        output: &mut Output<W>,
    ) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let config = NamespaceConfig::read(app_config.config_path.as_deref())
            .await
            .context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", config);

        let commands = Self::parse_commands(&config, &app_config)?;
        let cd_mode = Self::cd_mode(&config, &app_config);
        info!("Running {} commands in {:?} cd mode", commands.len(), cd_mode);

        let mut session = Session::with_cd_mode(cd_mode);
        Self::preload(&mut session, &config.preload);

        for command in &commands {
            debug!("Executing {:?} in {}", command, session.current_path());
            for message in command.execute(&mut session) {
                output.print(&message).context(OutputSnafu)?;
            }
        }

        Ok(())
    }

    /// Config file commands come first, then the command line ones. Nothing
    /// runs unless every line parses.
    fn parse_commands(
        config: &NamespaceConfig,
        app_config: &RuntimeConfig,
    ) -> Result<Vec<Command>, ApplicationError> {
        config
            .commands
            .iter()
            .chain(&app_config.commands)
            .map(|line| Command::try_from(line.as_str()).context(CommandSnafu { line }))
            .collect()
    }

    fn cd_mode(config: &NamespaceConfig, app_config: &RuntimeConfig) -> CdMode {
        app_config.cd_mode.or(config.cd_mode).unwrap_or_default()
    }

    fn preload(session: &mut Session, paths: &[String]) {
        for path in paths {
            if let Err(error) = session.make_directory(path) {
                warn!("Failed to preload directory '{}': {}", path, error);
            }
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: ConfigCreationError },
    #[snafu(display("Failed to parse command '{}'", line))]
    CommandError {
        line: String,
        source: CommandParseError,
    },
    #[snafu(display("Failed to write command output"))]
    OutputError { source: std::io::Error },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn runtime_config(commands: &[&str], config_path: Option<&NamedTempFile>) -> RuntimeConfig {
        RuntimeConfig {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            config_path: config_path.map(|file| file.path().to_path_buf()),
            cd_mode: None,
        }
    }

    fn config_file(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{contents}").expect("Failed to write to temp file");
        temp_file
    }

    #[compio::test]
    async fn application_runs_config_and_cli_commands() {
        let file = config_file(
            "cd_mode: descend\npreload:\n  - /usr\ncommands:\n  - mkdir /usr/bin",
        );
        let mut output = Output::new(Vec::new(), false);

        Application::run_with_output(
            runtime_config(&["mkdir /usr", "cd /usr", "tree", "pwd"], Some(&file)),
            &mut output,
        )
        .await
        .expect("Batch should run");

        let written = String::from_utf8(output.into_inner()).expect("Output should be UTF-8");
        assert_eq!(
            written.lines().collect::<Vec<_>>(),
            vec![
                "MKDIR SUCCESS: Node /usr/bin successfully created",
                "MKDIR ERROR: Directory /usr already exists",
                "|---usr",
                "   |---bin",
                "/usr",
            ]
        );
    }

    #[compio::test]
    async fn application_stops_on_unparsable_command() {
        let file = config_file("commands:\n  - tree");
        let result = Application::run(runtime_config(&["mkdir /a", "bogus"], Some(&file))).await;
        assert!(matches!(
            result,
            Err(ApplicationError::CommandError { ref line, .. }) if line == "bogus"
        ));
    }

    #[compio::test]
    async fn application_reports_broken_config() {
        let file = config_file("cd_mode: sideways");
        let result = Application::run(runtime_config(&[], Some(&file))).await;
        assert!(matches!(result, Err(ApplicationError::ConfigError { .. })));
    }

    #[test]
    fn command_line_cd_mode_overrides_config() {
        let config = NamespaceConfig {
            cd_mode: Some(CdMode::Descend),
            ..Default::default()
        };
        let mut app_config = runtime_config(&[], None);
        assert_eq!(Application::cd_mode(&config, &app_config), CdMode::Descend);

        app_config.cd_mode = Some(CdMode::Parent);
        assert_eq!(Application::cd_mode(&config, &app_config), CdMode::Parent);

        let defaults = NamespaceConfig::default();
        let app_config = runtime_config(&[], None);
        assert_eq!(Application::cd_mode(&defaults, &app_config), CdMode::Parent);
    }

    #[test]
    fn commands_from_config_run_first() {
        let config = NamespaceConfig {
            commands: vec!["mkdir /a".to_string()],
            ..Default::default()
        };
        let app_config = runtime_config(&["tree"], None);

        let commands = Application::parse_commands(&config, &app_config)
            .expect("Commands should parse");
        assert_eq!(
            commands,
            vec![Command::MakeDirectory("/a".to_string()), Command::Tree]
        );
    }

    #[test]
    fn preload_skips_failing_paths() {
        let mut session = Session::new();
        Application::preload(
            &mut session,
            &["/a".to_string(), "/missing/b".to_string(), "/a/c".to_string()],
        );
        assert_eq!(session.tree().node_count(), 3);
    }
}
