//! panelconf - Loader and validator for desktop panel layout documents.
//!
//! A panel document describes one taskbar: where it sits on screen, how it
//! looks, and which plugin widgets it hosts in which order. The main features
//! include:
//!
//! - Parsing with defaults for every omitted panel-wide option
//! - Schema validation that reports every problem with its location
//! - Opaque pass-through of plugin settings and unknown keys
//! - A built-in stock panel for hosts to fall back on
//! - CLI tooling to check, query and normalise documents
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use panelconf::config::PanelConfig;
//!
//! let text = std::fs::read_to_string("bottom.js")?;
//! let config = PanelConfig::load_or_default(&text);
//!
//! for plugin in &config.plugins {
//!     println!("{} (expand: {})", plugin.plugin_type, plugin.expand);
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

/// Panel document schema, loading and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command-line interface for inspecting panel documents.
pub mod cli;

/// Tracing subscriber setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use self::core::{PanelConfigError, Result, SchemaError};
