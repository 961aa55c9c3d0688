//! Command-line interface for panel documents.
//!
//! Provides a hierarchical command system for checking, querying and
//! normalising panel documents. Commands are organized by category and
//! help text is generated from their metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use commands::panel::{
    CheckCommand, DefaultCommand, GetCommand, NormalizeCommand, PluginsCommand, SchemaCommand,
};
pub use registry::CommandRegistry;
pub use service::CliService;
pub use source::{PanelSource, render_report};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
