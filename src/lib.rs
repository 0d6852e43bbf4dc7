//! Emoty library
//!
//! This library provides the core of the Emoty emoji pattern editor: the
//! concentric pattern generator, undo/redo history, editor orchestration,
//! palettes, localization and the terminal front end.

// Module declarations
pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod i18n;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
pub mod validation;
