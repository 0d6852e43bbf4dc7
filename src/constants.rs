//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and environment variable names.

/// The display name of the application (also the config directory name).
pub const APP_NAME: &str = "Emoty";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "emoty";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "EMOTY_CONFIG_DIR";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "EMOTY_LOG";

/// Log file name inside the config directory (TUI sessions only).
pub const LOG_FILE_NAME: &str = "emoty.log";
