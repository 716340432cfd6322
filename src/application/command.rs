use nstree::{CdError, MkdirError, NodeKind, ResolveError, Session};
use snafu::prelude::*;

/// One line of the batch, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MakeDirectory(String),
    ChangeDirectory(String),
    Tree,
    PrintWorkingDirectory,
    List(Option<String>),
}

/// Something a command wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Success(String),
    Error(String),
    Entry { text: String, kind: NodeKind },
    Plain(String),
}

impl Command {
    pub fn execute(&self, session: &mut Session) -> Vec<Message> {
        match self {
            Command::MakeDirectory(path) => vec![match session.make_directory(path) {
                Ok(_) => Message::Success(format!("MKDIR SUCCESS: Node {path} successfully created")),
                Err(error) => Message::Error(mkdir_error_message(path, &error)),
            }],
            Command::ChangeDirectory(path) => match session.change_directory(path) {
                Ok(()) => Vec::new(),
                Err(CdError::EmptyPath) => {
                    vec![Message::Error("CD ERROR: No path provided".to_string())]
                }
                Err(CdError::PathComponentNotFound { token }) => {
                    vec![Message::Error(missing_directory_message(&token))]
                }
            },
            Command::Tree => session
                .render_tree()
                .map(|line| Message::Entry {
                    text: line.to_string(),
                    kind: line.kind,
                })
                .collect(),
            Command::PrintWorkingDirectory => vec![Message::Plain(session.current_path())],
            Command::List(path) => match session.list_directory(path.as_deref()) {
                Ok(entries) => entries
                    .into_iter()
                    .map(|node| Message::Entry {
                        text: node.name().to_string(),
                        kind: node.kind(),
                    })
                    .collect(),
                Err(error) => vec![Message::Error(format!("LS ERROR: {error}"))],
            },
        }
    }
}

fn mkdir_error_message(path: &str, error: &MkdirError) -> String {
    match error {
        MkdirError::EmptyPath
        | MkdirError::ParentNotFound {
            source: ResolveError::EmptyPath,
        } => "MKDIR ERROR: No path provided".to_string(),
        MkdirError::ParentNotFound {
            source: ResolveError::PathComponentNotFound { token },
        } => missing_directory_message(token),
        MkdirError::AlreadyExists { .. } => {
            format!("MKDIR ERROR: Directory {path} already exists")
        }
        MkdirError::NameTooLong { .. } => "MKDIR ERROR: Directory name too long".to_string(),
        MkdirError::AllocationFailure { source } => {
            format!("MKDIR ERROR: Failed to allocate memory: {source}")
        }
    }
}

fn missing_directory_message(token: &str) -> String {
    format!("ERROR: Directory {token} does not exist")
}

impl TryFrom<&str> for Command {
    type Error = CommandParseError;

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let line = line.trim();
        let (word, operand) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let no_operand = |command: Command| -> Result<Command, CommandParseError> {
            ensure!(
                operand.is_empty(),
                UnexpectedOperandSnafu {
                    command: word,
                    operand,
                }
            );
            Ok(command)
        };

        match word {
            "" => EmptyCommandSnafu.fail(),
            "mkdir" => Ok(Command::MakeDirectory(operand.to_string())),
            "cd" => Ok(Command::ChangeDirectory(operand.to_string())),
            "tree" => no_operand(Command::Tree),
            "pwd" => no_operand(Command::PrintWorkingDirectory),
            "ls" => Ok(Command::List(
                (!operand.is_empty()).then(|| operand.to_string()),
            )),
            other => UnknownCommandSnafu { command: other }.fail(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum CommandParseError {
    #[snafu(display("Empty command"))]
    EmptyCommand,
    #[snafu(display("Unknown command '{}'", command))]
    UnknownCommand { command: String },
    #[snafu(display("Command '{}' takes no operand, got '{}'", command, operand))]
    UnexpectedOperand { command: String, operand: String },
}
