use thiserror::Error;

/// Errors that can occur during CLI command execution.
///
/// This enum represents all possible error conditions in the CLI system,
/// from command discovery failures to documents that do not load. Each
/// variant provides contextual information to help users understand what
/// went wrong.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    ///
    /// This error is returned when argument validation fails, such as
    /// missing required arguments or too many arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The panel document could not be located.
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    /// The panel document failed to load.
    ///
    /// Carries the rendered report, one problem per line.
    #[error("{0}")]
    InvalidDocument(String),

    /// A dot-path query did not resolve.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for command execution results.
///
/// All CLI commands return this type, providing either the text to print
/// or a CliError describing what went wrong.
pub type CommandResult = Result<String, CliError>;

/// Specification for a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "panel", "path").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone)]
pub enum ArgType {
    /// A panel file path or a panel name in the active profile.
    Panel,

    /// A dot-separated path into the document.
    Path,
}

impl ArgType {
    /// Short description of the accepted values, shown in help.
    pub fn hint(&self) -> &'static str {
        match self {
            ArgType::Panel => "file path or panel name",
            ArgType::Path => "dot path, array indices as numbers",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// This struct serves as the single source of truth for everything about
/// a command: its identity, arguments, usage examples, and categorization.
/// The CLI system uses this metadata for help generation and argument
/// validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "check", "get").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Specification of all arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "panel").
    pub category: String,
}

/// Trait defining the interface for all CLI commands.
///
/// All commands implement this trait to provide consistent execution
/// and metadata discovery. Commands receive dependencies through
/// their constructors.
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against the
    /// command's metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure, including documents
    /// that cannot be found or do not load.
    fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
