//! Command validation and authorization error types.

/// Kinds of command errors.
///
/// These cover validation faults (bad arguments) and authorization faults
/// (non-operator callers). Neither mutates any state; both are reported back
/// to the caller as a usage or denial message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandErrorKind {
    /// Unknown plan identifier in a command argument
    #[display("Unknown plan: {}", _0)]
    UnknownPlan(String),
    /// User id argument was not a number
    #[display("Invalid user id: {}", _0)]
    InvalidUserId(String),
    /// Required arguments are missing
    #[display("Missing arguments, usage: {}", usage)]
    MissingArguments {
        /// Usage hint shown to the caller
        usage: String,
    },
    /// Caller is not authorized for this command
    #[display("Not authorized")]
    Unauthorized,
    /// Command name is not recognized
    #[display("Unknown command: {}", _0)]
    UnknownCommand(String),
}

/// Command error with location tracking.
///
/// # Examples
///
/// ```
/// use corso_error::{CommandError, CommandErrorKind};
///
/// let err = CommandError::new(CommandErrorKind::UnknownPlan("GOLD".to_string()));
/// assert!(format!("{}", err).contains("GOLD"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new command error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
